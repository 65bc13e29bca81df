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
use crate::ErrorKind;
use crate::codec::Codec;
use crate::codec::Unrepresentable;

/// 7-bit ASCII.
///
/// Code points above U+007F are handled by the configured [`Unrepresentable`] policy.
///
/// # Examples
///
/// ```
/// use logdevice::codec::Ascii;
/// use logdevice::codec::Codec;
/// use logdevice::codec::Unrepresentable;
///
/// let ascii = Ascii::new(Unrepresentable::Replace('?'));
/// assert_eq!(ascii.encode_to_vec("café").unwrap(), b"caf?");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ascii {
    policy: Unrepresentable,
}

impl Ascii {
    /// Create an ASCII codec with the given policy for non-ASCII characters.
    pub const fn new(policy: Unrepresentable) -> Self {
        Self { policy }
    }

    /// The policy for non-ASCII characters.
    pub fn policy(&self) -> Unrepresentable {
        self.policy
    }
}

impl Default for Ascii {
    fn default() -> Self {
        Self::new(Unrepresentable::Replace('?'))
    }
}

impl Codec for Ascii {
    fn name(&self) -> &str {
        "US-ASCII"
    }

    fn encode(&self, text: &str, out: &mut Vec<u8>) -> Result<(), Error> {
        encode_single_byte(self.name(), 0x7F, self.policy, text, out)
    }

    fn validate(&self) -> Result<(), Error> {
        validate_single_byte(self.name(), 0x7F, self.policy)
    }
}

/// ISO-8859-1, where every byte is the code point of the same value.
///
/// Code points above U+00FF are handled by the configured [`Unrepresentable`] policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latin1 {
    policy: Unrepresentable,
}

impl Latin1 {
    /// Create a Latin-1 codec with the given policy for characters beyond U+00FF.
    pub const fn new(policy: Unrepresentable) -> Self {
        Self { policy }
    }

    /// The policy for characters beyond U+00FF.
    pub fn policy(&self) -> Unrepresentable {
        self.policy
    }
}

impl Default for Latin1 {
    fn default() -> Self {
        Self::new(Unrepresentable::Replace('?'))
    }
}

impl Codec for Latin1 {
    fn name(&self) -> &str {
        "ISO-8859-1"
    }

    fn encode(&self, text: &str, out: &mut Vec<u8>) -> Result<(), Error> {
        encode_single_byte(self.name(), 0xFF, self.policy, text, out)
    }

    fn validate(&self) -> Result<(), Error> {
        validate_single_byte(self.name(), 0xFF, self.policy)
    }
}

fn encode_single_byte(
    name: &str,
    limit: u32,
    policy: Unrepresentable,
    text: &str,
    out: &mut Vec<u8>,
) -> Result<(), Error> {
    out.reserve(text.len());
    for (offset, ch) in text.char_indices() {
        let code = ch as u32;
        if code <= limit {
            out.push(code as u8);
            continue;
        }

        // a substitute outside the range fails the whole encode, even when `validate` was skipped
        let mut unencodable = None;
        policy.handle(name, ch, offset, |sub| {
            let code = sub as u32;
            if code <= limit {
                out.push(code as u8);
            } else {
                unencodable.get_or_insert(sub);
            }
        })?;

        if let Some(sub) = unencodable {
            return Err(
                Error::new(ErrorKind::Encode, "replacement character is not representable")
                    .with_context("codec", name)
                    .with_context("char", format!("U+{:04X}", ch as u32))
                    .with_context("offset", offset)
                    .with_context("replacement", format!("U+{:04X}", sub as u32)),
            );
        }
    }
    Ok(())
}

fn validate_single_byte(name: &str, limit: u32, policy: Unrepresentable) -> Result<(), Error> {
    match policy {
        Unrepresentable::Replace(r) if r as u32 > limit => Err(Error::new(
            ErrorKind::InvalidCodec,
            "replacement character is not representable",
        )
        .with_context("codec", name)
        .with_context("replacement", format!("U+{:04X}", r as u32))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_substitution() {
        let ascii = Ascii::default();
        assert_eq!(ascii.encode_to_vec("caf\u{e9}").unwrap(), b"caf\x3f");
        assert_eq!(ascii.encode_to_vec("plain").unwrap(), b"plain");
    }

    #[test]
    fn test_ascii_escape() {
        let ascii = Ascii::new(Unrepresentable::Escape);
        assert_eq!(ascii.encode_to_vec("na\u{ef}ve").unwrap(), b"na\\u{00EF}ve");
    }

    #[test]
    fn test_ascii_fail() {
        let ascii = Ascii::new(Unrepresentable::Fail);
        let err = ascii.encode_to_vec("ok \u{2603}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Encode);
        assert_eq!(err.context("char"), Some("U+2603"));
        assert_eq!(err.context("offset"), Some("3"));
    }

    #[test]
    fn test_latin1_range() {
        let latin1 = Latin1::default();
        assert_eq!(latin1.encode_to_vec("caf\u{e9}").unwrap(), b"caf\xe9");
        assert_eq!(latin1.encode_to_vec("\u{20ac}5").unwrap(), b"?5");
    }

    #[test]
    fn test_unrepresentable_replacement_fails_encode() {
        let ascii = Ascii::new(Unrepresentable::Replace('\u{e9}'));
        assert_eq!(ascii.policy(), Unrepresentable::Replace('\u{e9}'));
        assert_eq!(ascii.encode_to_vec("plain").unwrap(), b"plain");

        let err = ascii.encode_to_vec("caf\u{e9}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Encode);
        assert_eq!(err.context("codec"), Some("US-ASCII"));
        assert_eq!(err.context("char"), Some("U+00E9"));
        assert_eq!(err.context("offset"), Some("3"));
        assert_eq!(err.context("replacement"), Some("U+00E9"));

        let latin1 = Latin1::new(Unrepresentable::Replace('\u{fffd}'));
        assert_eq!(latin1.policy(), Unrepresentable::Replace('\u{fffd}'));
        let err = latin1.encode_to_vec("\u{20ac}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Encode);
        assert_eq!(err.message(), "replacement character is not representable");
    }

    #[test]
    fn test_validate_replacement() {
        assert!(Ascii::default().validate().is_ok());
        assert!(Ascii::new(Unrepresentable::Fail).validate().is_ok());

        let err = Ascii::new(Unrepresentable::Replace('\u{fffd}'))
            .validate()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCodec);

        assert!(Latin1::new(Unrepresentable::Replace('\u{bf}')).validate().is_ok());
        assert!(Latin1::new(Unrepresentable::Replace('\u{fffd}')).validate().is_err());
    }
}
