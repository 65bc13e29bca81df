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

//! Layouts for rendering `log` records as text.

use std::fmt;
use std::fmt::Write;

#[cfg(feature = "jiff")]
use jiff::Zoned;
#[cfg(feature = "jiff")]
use jiff::tz::TimeZone;

use crate::Error;
use crate::Severity;

/// A layout for rendering log records into the text a [`LogDevice`] writes.
///
/// [`LogDevice`]: crate::LogDevice
pub trait Layout: fmt::Debug + Send + Sync + 'static {
    /// Render a log record.
    fn format(&self, record: &log::Record) -> Result<String, Error>;
}

impl<T: Layout> From<T> for Box<dyn Layout> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

/// A layout that renders a log record as one line of text.
///
/// Output format:
///
/// ```text
/// 2024-08-11T22:44:57.172105+08:00 ERROR rolling_file: Hello error!
/// 2024-08-11T22:44:57.172219+08:00  WARN rolling_file: Hello warn!
/// 2024-08-11T22:44:57.172276+08:00  INFO rolling_file: Hello info!
/// ```
///
/// Without the `jiff` feature the timestamp is the number of nanoseconds since the Unix epoch.
///
/// # Examples
///
/// ```
/// use logdevice::layout::TextLayout;
///
/// let text_layout = TextLayout::default();
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextLayout {
    #[cfg(feature = "jiff")]
    tz: Option<TimeZone>,
    no_timestamp: bool,
}

impl TextLayout {
    /// Set the timezone for timestamps.
    ///
    /// Default to the system timezone.
    #[cfg(feature = "jiff")]
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.tz = Some(tz);
        self
    }

    /// Leave the timestamp out of the rendered line.
    pub fn no_timestamp(mut self) -> Self {
        self.no_timestamp = true;
        self
    }

    #[cfg(feature = "jiff")]
    fn write_timestamp(&self, text: &mut String) -> fmt::Result {
        let time = match self.tz.clone() {
            Some(tz) => Zoned::now().with_time_zone(tz),
            None => Zoned::now(),
        };
        write!(text, "{} ", time.strftime("%Y-%m-%dT%H:%M:%S.%6f%:z"))
    }

    #[cfg(not(feature = "jiff"))]
    fn write_timestamp(&self, text: &mut String) -> fmt::Result {
        use std::time::SystemTime;

        match SystemTime::now().duration_since(SystemTime::UNIX_EPOCH) {
            Ok(dur) => write!(text, "{} ", dur.as_nanos()),
            Err(err) => write!(text, "-{} ", err.duration().as_nanos()),
        }
    }
}

impl Layout for TextLayout {
    fn format(&self, record: &log::Record) -> Result<String, Error> {
        let mut text = String::new();
        if !self.no_timestamp {
            self.write_timestamp(&mut text)
                .map_err(Error::from_fmt_error)?;
        }

        let severity = Severity::from(record.level());
        let target = record.target();
        let message = record.args();
        write!(&mut text, "{severity:>5} {target}: {message}").map_err(Error::from_fmt_error)?;
        Ok(text)
    }
}
