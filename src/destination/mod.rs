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

//! Physical write paths for encoded log bytes.

use std::fmt;
use std::sync::Arc;

use crate::Error;
use crate::Severity;

mod memory;
pub mod single_file;
mod stdio;

pub use self::memory::Memory;
pub use self::single_file::SingleFile;
pub use self::single_file::SingleFileBuilder;
pub use self::stdio::Stderr;
pub use self::stdio::Stdout;

/// The destination-specific write path a device forwards encoded bytes to.
///
/// Implementors that share an OS handle across threads serialize their own writes.
pub trait Destination: fmt::Debug + Send + Sync {
    /// Write one block of bytes.
    ///
    /// A device hands over each encoded block in a single call. Whether an I/O failure can
    /// leave part of the block behind depends on the destination.
    fn write(&self, bytes: &[u8], severity: Severity) -> Result<(), Error>;

    /// Flush any buffered bytes.
    ///
    /// Default to a no-op.
    fn flush(&self) -> Result<(), Error> {
        Ok(())
    }
}

impl<T: Destination + ?Sized> Destination for Box<T> {
    fn write(&self, bytes: &[u8], severity: Severity) -> Result<(), Error> {
        (**self).write(bytes, severity)
    }

    fn flush(&self) -> Result<(), Error> {
        (**self).flush()
    }
}

impl<T: Destination + ?Sized> Destination for Arc<T> {
    fn write(&self, bytes: &[u8], severity: Severity) -> Result<(), Error> {
        (**self).write(bytes, severity)
    }

    fn flush(&self) -> Result<(), Error> {
        (**self).flush()
    }
}
