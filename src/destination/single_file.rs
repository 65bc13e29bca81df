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

//! Destination for writing log bytes to a single file.
//!
//! # Example
//!
//!```no_run
//! use logdevice::codec;
//! use logdevice::destination::SingleFileBuilder;
//! use logdevice::device::EncodingLogDevice;
//!
//! let file = SingleFileBuilder::new("/path/to/file.log").build().unwrap();
//! let device = EncodingLogDevice::new(&codec::LATIN_1, file)
//!     .unwrap()
//!     .with_line_ending("\n");
//! ```

use std::fs;
use std::fs::File;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::Error;
use crate::ErrorKind;
use crate::Severity;
use crate::destination::Destination;

/// A builder for configuring [`SingleFile`].
#[derive(Debug)]
pub struct SingleFileBuilder {
    // required
    filepath: PathBuf,

    // optional
    truncate: bool,
}

impl SingleFileBuilder {
    /// Creates a new [`SingleFileBuilder`].
    #[must_use]
    pub fn new(filepath: impl Into<PathBuf>) -> Self {
        Self {
            filepath: filepath.into(),
            truncate: false,
        }
    }

    /// Discard the existing content of the file instead of appending to it.
    ///
    /// Default to `false`.
    pub fn truncate(mut self, truncate: bool) -> Self {
        self.truncate = truncate;
        self
    }

    /// Build the [`SingleFile`] destination.
    ///
    /// # Errors
    ///
    /// Return an error if either:
    ///
    /// * The log directory cannot be created.
    /// * The log file cannot be opened.
    pub fn build(self) -> Result<SingleFile, Error> {
        let SingleFileBuilder { filepath, truncate } = self;

        if let Some(dir) = filepath.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|err| {
                Error::new(ErrorKind::Write, "failed to create log directory")
                    .with_context("path", dir.display())
                    .with_source(err)
            })?;
        }

        let mut options = OpenOptions::new();
        if truncate {
            options.write(true).truncate(true);
        } else {
            options.append(true);
        }
        let file = options.create(true).open(&filepath).map_err(|err| {
            Error::new(ErrorKind::Write, "failed to create log file")
                .with_context("path", filepath.display())
                .with_source(err)
        })?;

        Ok(SingleFile {
            filepath,
            writer: Mutex::new(file),
        })
    }
}

/// A destination that writes bytes to a file.
#[derive(Debug)]
pub struct SingleFile {
    filepath: PathBuf,
    writer: Mutex<File>,
}

impl SingleFile {
    /// The path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.filepath
    }

    fn writer(&self) -> MutexGuard<'_, File> {
        self.writer.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Destination for SingleFile {
    fn write(&self, bytes: &[u8], _: Severity) -> Result<(), Error> {
        let mut writer = self.writer();
        writer.write_all(bytes).map_err(Error::from_io_error)
    }

    fn flush(&self) -> Result<(), Error> {
        let mut writer = self.writer();
        writer.flush().map_err(Error::from_io_error)
    }
}

impl Drop for SingleFile {
    fn drop(&mut self) {
        let writer = self.writer.get_mut().unwrap_or_else(|e| e.into_inner());
        let _ = writer.flush();
    }
}
