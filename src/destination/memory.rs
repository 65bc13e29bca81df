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

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::Error;
use crate::Severity;
use crate::destination::Destination;

/// A destination that keeps every write in memory.
///
/// Clones share the same buffer, so a clone kept by the caller observes what a device wrote.
///
/// # Examples
///
/// ```
/// use logdevice::Severity;
/// use logdevice::destination::Destination;
/// use logdevice::destination::Memory;
///
/// let memory = Memory::default();
/// memory.clone().write(b"hello", Severity::Info).unwrap();
/// assert_eq!(memory.contents(), b"hello");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Memory {
    entries: Arc<Mutex<Vec<(Severity, Vec<u8>)>>>,
}

impl Memory {
    fn entries_guard(&self) -> MutexGuard<'_, Vec<(Severity, Vec<u8>)>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// All bytes written so far, concatenated in write order.
    pub fn contents(&self) -> Vec<u8> {
        self.entries_guard()
            .iter()
            .flat_map(|(_, bytes)| bytes.iter().copied())
            .collect()
    }

    /// Every write so far with the severity it carried.
    pub fn entries(&self) -> Vec<(Severity, Vec<u8>)> {
        self.entries_guard().clone()
    }

    /// Discard everything written so far.
    pub fn clear(&self) {
        self.entries_guard().clear();
    }
}

impl Destination for Memory {
    fn write(&self, bytes: &[u8], severity: Severity) -> Result<(), Error> {
        self.entries_guard().push((severity, bytes.to_vec()));
        Ok(())
    }
}
