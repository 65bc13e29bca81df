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

//! Character encodings used to turn log text into bytes.

use std::fmt;

use crate::Error;
use crate::ErrorKind;

mod single_byte;
mod unicode;

pub use self::single_byte::Ascii;
pub use self::single_byte::Latin1;
pub use self::unicode::Endian;
pub use self::unicode::Utf8;
pub use self::unicode::Utf16;

/// UTF-8.
pub static UTF_8: Utf8 = Utf8::new();
/// 7-bit ASCII, substituting `'?'` for anything it cannot represent.
pub static US_ASCII: Ascii = Ascii::new(Unrepresentable::Replace('?'));
/// ISO-8859-1, substituting `'?'` for anything it cannot represent.
pub static LATIN_1: Latin1 = Latin1::new(Unrepresentable::Replace('?'));
/// UTF-16, little endian, without a byte order mark.
pub static UTF_16LE: Utf16 = Utf16::new(Endian::Little);
/// UTF-16, big endian, without a byte order mark.
pub static UTF_16BE: Utf16 = Utf16::new(Endian::Big);

/// A codec that transcodes Unicode text into a byte encoding.
pub trait Codec: fmt::Debug + Send + Sync {
    /// The canonical name of the encoding, e.g. `"UTF-8"`.
    fn name(&self) -> &str;

    /// Append the encoding of `text` to `out`.
    ///
    /// On error, `out` may hold a partial encoding; callers that need all-or-nothing semantics
    /// encode into a scratch buffer.
    fn encode(&self, text: &str, out: &mut Vec<u8>) -> Result<(), Error>;

    /// Check that the codec is usable.
    ///
    /// Default to always usable.
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }

    /// Encode `text` into a new buffer.
    fn encode_to_vec(&self, text: &str) -> Result<Vec<u8>, Error> {
        let mut out = Vec::with_capacity(text.len());
        self.encode(text, &mut out)?;
        Ok(out)
    }
}

/// What a codec does with a character its encoding cannot represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unrepresentable {
    /// Emit the given character instead. It must itself be representable.
    Replace(char),
    /// Emit an ASCII escape of the form `\u{00E9}`.
    Escape,
    /// Refuse to encode, failing with [`ErrorKind::Encode`].
    Fail,
}

impl Unrepresentable {
    /// Handle `ch` found at byte `offset` of the input, calling `emit` for each substitute
    /// character.
    pub(crate) fn handle(
        &self,
        codec: &str,
        ch: char,
        offset: usize,
        mut emit: impl FnMut(char),
    ) -> Result<(), Error> {
        match *self {
            Unrepresentable::Replace(r) => emit(r),
            Unrepresentable::Escape => {
                for c in format!("\\u{{{:04X}}}", ch as u32).chars() {
                    emit(c);
                }
            }
            Unrepresentable::Fail => {
                return Err(
                    Error::new(ErrorKind::Encode, "character is not representable")
                        .with_context("codec", codec)
                        .with_context("char", format!("U+{:04X}", ch as u32))
                        .with_context("offset", offset),
                );
            }
        }
        Ok(())
    }
}

/// Look up a built-in codec by name.
///
/// Matching is case-insensitive and ignores `-` and `_`, so `"utf-8"`, `"UTF8"` and `"utf_8"`
/// all resolve to [`UTF_8`].
///
/// # Errors
///
/// Returns an [`ErrorKind::InvalidCodec`] error if no codec is known by that name.
///
/// # Examples
///
/// ```
/// use logdevice::codec;
///
/// let latin1 = codec::for_name("iso-8859-1").unwrap();
/// assert_eq!(latin1.name(), "ISO-8859-1");
/// assert!(codec::for_name("klingon").is_err());
/// ```
pub fn for_name(name: &str) -> Result<&'static dyn Codec, Error> {
    let normalized = name
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .collect::<String>()
        .to_ascii_lowercase();

    let codec: &'static dyn Codec = match normalized.as_str() {
        "utf8" => &UTF_8,
        "ascii" | "usascii" => &US_ASCII,
        "latin1" | "iso88591" => &LATIN_1,
        "utf16le" => &UTF_16LE,
        "utf16be" => &UTF_16BE,
        _ => {
            return Err(Error::new(ErrorKind::InvalidCodec, "unknown codec")
                .with_context("name", name));
        }
    };
    Ok(codec)
}
