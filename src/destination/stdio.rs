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

use std::io::Write;

use crate::Error;
use crate::Severity;
use crate::destination::Destination;

/// A destination that writes bytes to stdout.
///
/// # Examples
///
/// ```
/// use logdevice::destination::Stdout;
///
/// let stdout = Stdout::default();
/// ```
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct Stdout {}

impl Destination for Stdout {
    fn write(&self, bytes: &[u8], _: Severity) -> Result<(), Error> {
        std::io::stdout()
            .lock()
            .write_all(bytes)
            .map_err(Error::from_io_error)
    }

    fn flush(&self) -> Result<(), Error> {
        std::io::stdout().flush().map_err(Error::from_io_error)
    }
}

/// A destination that writes bytes to stderr.
///
/// # Examples
///
/// ```
/// use logdevice::destination::Stderr;
///
/// let stderr = Stderr::default();
/// ```
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct Stderr {}

impl Destination for Stderr {
    fn write(&self, bytes: &[u8], _: Severity) -> Result<(), Error> {
        std::io::stderr()
            .lock()
            .write_all(bytes)
            .map_err(Error::from_io_error)
    }

    fn flush(&self) -> Result<(), Error> {
        std::io::stderr().flush().map_err(Error::from_io_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LogDevice;
    use crate::codec;
    use crate::device::EncodingLogDevice;

    #[test]
    fn test_stdout_write_and_flush() {
        let stdout = Stdout::default();
        stdout.write(b"stdout destination\n", Severity::Info).unwrap();
        stdout.flush().unwrap();
    }

    #[test]
    fn test_stderr_write_and_flush() {
        let stderr = Stderr::default();
        stderr.write(b"stderr destination\n", Severity::Error).unwrap();
        stderr.flush().unwrap();
    }

    #[test]
    fn test_device_over_stdio() {
        let device = EncodingLogDevice::new(&codec::US_ASCII, Stdout::default())
            .unwrap()
            .with_line_ending("\n");
        device.write("caf\u{e9} au lait", Severity::Info).unwrap();
        device.flush().unwrap();

        let device = EncodingLogDevice::new(&codec::UTF_8, Stderr::default())
            .unwrap()
            .with_line_ending("\n");
        device.write("caf\u{e9} au lait", Severity::Warn).unwrap();
        device.flush().unwrap();
    }
}
