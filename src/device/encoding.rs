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
use crate::Severity;
use crate::codec;
use crate::codec::Codec;
use crate::destination::Destination;
use crate::device::LogDevice;

/// A device that transcodes text through a bound codec before handing the bytes to a
/// [`Destination`].
///
/// The codec is borrowed, never owned: it must outlive the device, which the `'c` lifetime
/// enforces. The built-in codecs in [`codec`] are statics, so they bind for `'static`.
///
/// # Examples
///
/// ```
/// use logdevice::LogDevice;
/// use logdevice::Severity;
/// use logdevice::codec;
/// use logdevice::destination::Memory;
/// use logdevice::device::EncodingLogDevice;
///
/// let memory = Memory::default();
/// let device = EncodingLogDevice::new(&codec::US_ASCII, memory.clone()).unwrap();
///
/// device.write("caf\u{e9}", Severity::Info).unwrap();
/// assert_eq!(memory.contents(), b"caf?");
/// ```
#[derive(Debug)]
pub struct EncodingLogDevice<'c, D> {
    codec: &'c dyn Codec,
    destination: D,
    line_ending: Option<String>,
}

impl<'c, D: Destination> EncodingLogDevice<'c, D> {
    /// Bind `codec` to a device writing to `destination`.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorKind::InvalidCodec`] error if the codec fails its own validation, so a
    /// bad codec is reported here rather than on the first write.
    pub fn new(codec: &'c dyn Codec, destination: D) -> Result<Self, Error> {
        codec.validate().map_err(|err| {
            Error::new(ErrorKind::InvalidCodec, "failed to bind codec")
                .with_context("codec", codec.name())
                .with_source(err)
        })?;

        Ok(Self {
            codec,
            destination,
            line_ending: None,
        })
    }

    /// Append `line_ending` after every block of text, encoded through the same codec.
    ///
    /// Default to no line ending, so the destination receives exactly the encoded text.
    ///
    /// # Examples
    ///
    /// ```
    /// use logdevice::codec;
    /// use logdevice::destination::Stderr;
    /// use logdevice::device::EncodingLogDevice;
    ///
    /// let device = EncodingLogDevice::new(&codec::UTF_8, Stderr::default())
    ///     .unwrap()
    ///     .with_line_ending("\n");
    /// ```
    pub fn with_line_ending(mut self, line_ending: impl Into<String>) -> Self {
        self.line_ending = Some(line_ending.into());
        self
    }

    /// The codec bound to this device.
    pub fn encoding(&self) -> &'c dyn Codec {
        self.codec
    }

    /// The destination this device writes to.
    pub fn destination(&self) -> &D {
        &self.destination
    }

    /// Consume the device and return its destination.
    pub fn into_destination(self) -> D {
        self.destination
    }
}

impl<D: Destination> EncodingLogDevice<'static, D> {
    /// Bind the built-in codec called `name`. See [`codec::for_name`] for the accepted names.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorKind::InvalidCodec`] error if no codec is known by that name.
    pub fn for_name(name: &str, destination: D) -> Result<Self, Error> {
        let codec = codec::for_name(name)?;
        Self::new(codec, destination)
    }
}

impl<D: Destination> LogDevice for EncodingLogDevice<'_, D> {
    fn write(&self, text: &str, severity: Severity) -> Result<(), Error> {
        let extra = self.line_ending.as_ref().map_or(0, |s| s.len());
        let mut bytes = Vec::with_capacity(text.len() + extra);

        // encode everything before touching the destination
        self.codec.encode(text, &mut bytes)?;
        if let Some(line_ending) = &self.line_ending {
            self.codec.encode(line_ending, &mut bytes)?;
        }

        self.destination.write(&bytes, severity)
    }

    fn flush(&self) -> Result<(), Error> {
        self.destination.flush()
    }
}
