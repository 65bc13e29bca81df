// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::Error;
use crate::codec::Codec;

/// UTF-8, the identity encoding for Rust strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct Utf8 {}

impl Utf8 {
    /// Create a UTF-8 codec.
    pub const fn new() -> Self {
        Self {}
    }
}

impl Codec for Utf8 {
    fn name(&self) -> &str {
        "UTF-8"
    }

    fn encode(&self, text: &str, out: &mut Vec<u8>) -> Result<(), Error> {
        out.extend_from_slice(text.as_bytes());
        Ok(())
    }
}

/// Byte order of a multi-byte encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    /// Least significant byte first.
    Little,
    /// Most significant byte first.
    Big,
}

/// UTF-16 without a byte order mark.
///
/// Every Unicode scalar value is representable, so encoding never fails.
///
/// # Examples
///
/// ```
/// use logdevice::codec::Codec;
/// use logdevice::codec::Endian;
/// use logdevice::codec::Utf16;
///
/// let utf16 = Utf16::new(Endian::Big);
/// assert_eq!(utf16.encode_to_vec("hi").unwrap(), [0, b'h', 0, b'i']);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf16 {
    endian: Endian,
}

impl Utf16 {
    /// Create a UTF-16 codec with the given byte order.
    pub const fn new(endian: Endian) -> Self {
        Self { endian }
    }

    /// The byte order of this codec.
    pub fn endian(&self) -> Endian {
        self.endian
    }
}

impl Codec for Utf16 {
    fn name(&self) -> &str {
        match self.endian {
            Endian::Little => "UTF-16LE",
            Endian::Big => "UTF-16BE",
        }
    }

    fn encode(&self, text: &str, out: &mut Vec<u8>) -> Result<(), Error> {
        out.reserve(text.len() * 2);
        for unit in text.encode_utf16() {
            let bytes = match self.endian {
                Endian::Little => unit.to_le_bytes(),
                Endian::Big => unit.to_be_bytes(),
            };
            out.extend_from_slice(&bytes);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_is_identity() {
        let text = "caf\u{e9} \u{2603}";
        assert_eq!(Utf8::new().encode_to_vec(text).unwrap(), text.as_bytes());
    }

    #[test]
    fn test_utf16_surrogate_pair() {
        let le = Utf16::new(Endian::Little).encode_to_vec("\u{1F600}").unwrap();
        assert_eq!(le, [0x3D, 0xD8, 0x00, 0xDE]);

        let be = Utf16::new(Endian::Big).encode_to_vec("\u{1F600}").unwrap();
        assert_eq!(be, [0xD8, 0x3D, 0xDE, 0x00]);
    }

    #[test]
    fn test_utf16_name_follows_endian() {
        for (endian, name) in [(Endian::Little, "UTF-16LE"), (Endian::Big, "UTF-16BE")] {
            let utf16 = Utf16::new(endian);
            assert_eq!(utf16.endian(), endian);
            assert_eq!(utf16.name(), name);
        }
    }
}
