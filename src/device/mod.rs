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

//! Log devices that accept formatted text.

use std::fmt;
use std::sync::Arc;

use crate::Error;
use crate::Severity;

mod encoding;

pub use self::encoding::EncodingLogDevice;

/// A sink that accepts a block of formatted log text together with its severity.
///
/// A device knows nothing about how the text was produced. Calls may be repeated freely; any
/// ordering across concurrent callers is up to whoever serializes calls into the device.
pub trait LogDevice: fmt::Debug + Send + Sync {
    /// Write one block of text.
    fn write(&self, text: &str, severity: Severity) -> Result<(), Error>;

    /// Flush anything the device or its destination buffers.
    ///
    /// Default to a no-op.
    fn flush(&self) -> Result<(), Error> {
        Ok(())
    }
}

impl<'a, T: LogDevice + 'a> From<T> for Box<dyn LogDevice + 'a> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

/// Several loggers may route into the same device.
impl<T: LogDevice + ?Sized> LogDevice for Arc<T> {
    fn write(&self, text: &str, severity: Severity) -> Result<(), Error> {
        (**self).write(text, severity)
    }

    fn flush(&self) -> Result<(), Error> {
        (**self).flush()
    }
}
