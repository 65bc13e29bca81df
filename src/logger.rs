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

use log::LevelFilter;
use log::Metadata;
use log::Record;

use crate::LogDevice;
use crate::Severity;
use crate::layout::Layout;
use crate::layout::TextLayout;
use crate::trap::DefaultTrap;
use crate::trap::Trap;

/// A [`log::Log`] implementation that renders records with a [`Layout`] and writes the text to a
/// single [`LogDevice`].
///
/// Errors from the layout or the device cannot reach the `log` macros' callers, so they are
/// handed to a [`Trap`].
///
/// # Examples
///
/// ```
/// use logdevice::DeviceLogger;
/// use logdevice::codec;
/// use logdevice::destination::Stderr;
/// use logdevice::device::EncodingLogDevice;
///
/// let device = EncodingLogDevice::new(&codec::UTF_8, Stderr::default())
///     .unwrap()
///     .with_line_ending("\n");
/// let logger = DeviceLogger::new(device).max_level(log::LevelFilter::Info);
/// ```
#[derive(Debug)]
pub struct DeviceLogger {
    device: Box<dyn LogDevice>,
    layout: Box<dyn Layout>,
    trap: Box<dyn Trap>,
    max_level: LevelFilter,
}

impl DeviceLogger {
    /// Create a logger writing to `device` with a [`TextLayout`] and a [`DefaultTrap`].
    pub fn new(device: impl Into<Box<dyn LogDevice>>) -> Self {
        Self {
            device: device.into(),
            layout: Box::new(TextLayout::default()),
            trap: Box::new(DefaultTrap::default()),
            max_level: LevelFilter::Trace,
        }
    }

    /// Set the layout.
    ///
    /// Default to [`TextLayout`].
    #[must_use = "call `apply` to set the global logger"]
    pub fn with_layout(mut self, layout: impl Into<Box<dyn Layout>>) -> Self {
        self.layout = layout.into();
        self
    }

    /// Set the trap for errors raised while logging.
    ///
    /// Default to [`DefaultTrap`].
    #[must_use = "call `apply` to set the global logger"]
    pub fn with_trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = trap.into();
        self
    }

    /// Set the max level of the logger.
    ///
    /// This will be passed to [`log::set_max_level`] on [`DeviceLogger::apply`].
    #[must_use = "call `apply` to set the global logger"]
    pub fn max_level(mut self, max_level: LevelFilter) -> Self {
        self.max_level = max_level;
        self
    }

    /// Set up the global logger with this [`DeviceLogger`].
    ///
    /// # Errors
    ///
    /// Returns an error if a global logger has already been set.
    pub fn apply(self) -> Result<(), log::SetLoggerError> {
        let max_level = self.max_level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }
}

impl log::Log for DeviceLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let result = self
            .layout
            .format(record)
            .and_then(|text| self.device.write(&text, Severity::from(record.level())));
        if let Err(err) = result {
            self.trap.trap(&err);
        }
    }

    fn flush(&self) {
        if let Err(err) = self.device.flush() {
            self.trap.trap(&err);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::Mutex;

    use log::Log;

    use super::*;
    use crate::Error;
    use crate::codec;
    use crate::codec::Ascii;
    use crate::codec::Unrepresentable;
    use crate::destination::Memory;
    use crate::device::EncodingLogDevice;

    #[derive(Debug, Clone, Default)]
    struct Collect(Arc<Mutex<Vec<String>>>);

    impl Trap for Collect {
        fn trap(&self, err: &Error) {
            self.0.lock().unwrap().push(err.to_string());
        }
    }

    static STRICT_ASCII: Ascii = Ascii::new(Unrepresentable::Fail);

    #[test]
    fn test_log_writes_through_device() {
        let memory = Memory::default();
        let device = EncodingLogDevice::new(&codec::US_ASCII, memory.clone())
            .unwrap()
            .with_line_ending("\n");
        let logger = DeviceLogger::new(device)
            .with_layout(TextLayout::default().no_timestamp())
            .max_level(LevelFilter::Info);

        logger.log(
            &Record::builder()
                .level(log::Level::Warn)
                .target("cafe")
                .args(format_args!("cr\u{e8}me br\u{fb}l\u{e9}e"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(log::Level::Debug)
                .target("cafe")
                .args(format_args!("filtered"))
                .build(),
        );
        logger.flush();

        assert_eq!(memory.contents(), b" WARN cafe: cr?me br?l?e\n");
        assert_eq!(memory.entries()[0].0, Severity::Warn);
    }

    #[test]
    fn test_errors_go_to_trap() {
        let memory = Memory::default();
        let trap = Collect::default();
        let device = EncodingLogDevice::new(&STRICT_ASCII, memory.clone()).unwrap();
        let logger = DeviceLogger::new(device)
            .with_layout(TextLayout::default().no_timestamp())
            .with_trap(trap.clone());

        logger.log(
            &Record::builder()
                .level(log::Level::Info)
                .args(format_args!("\u{2603}"))
                .build(),
        );

        assert!(memory.contents().is_empty());
        let trapped = trap.0.lock().unwrap();
        assert_eq!(trapped.len(), 1);
        assert!(trapped[0].contains("not representable"), "{}", trapped[0]);
    }
}
