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

//! Logdevice provides log output devices: sinks that accept formatted log text and a severity,
//! and write it to a destination such as the console, a file or an in-memory buffer.
//!
//! # Overview
//!
//! A [`LogDevice`] knows nothing about character encodings. [`EncodingLogDevice`] layers one
//! on top: it binds a [`Codec`], transcodes every block of text into bytes, and forwards them to
//! a [`Destination`]. Several devices bound to different codecs can sit side by side.
//!
//! [`DeviceLogger`] bridges the `log` crate to a device.
//!
//! # Examples
//!
//! Write Latin-1 encoded lines to stderr:
//!
//! ```
//! use logdevice::LogDevice;
//! use logdevice::Severity;
//! use logdevice::codec;
//! use logdevice::destination::Stderr;
//! use logdevice::device::EncodingLogDevice;
//!
//! let device = EncodingLogDevice::new(&codec::LATIN_1, Stderr::default())
//!     .unwrap()
//!     .with_line_ending("\n");
//! device.write("d\u{e9}j\u{e0} vu", Severity::Info).unwrap();
//! ```
//!
//! Route the `log` macros through a device:
//!
//! ```
//! use logdevice::DeviceLogger;
//! use logdevice::device::EncodingLogDevice;
//! use logdevice::destination::Stdout;
//!
//! let device = EncodingLogDevice::for_name("utf-8", Stdout::default())
//!     .unwrap()
//!     .with_line_ending("\n");
//! DeviceLogger::new(device).apply().unwrap();
//!
//! log::info!("This is an info message.");
//! ```
//!
//! [`Codec`]: codec::Codec
//! [`Destination`]: destination::Destination
//! [`EncodingLogDevice`]: device::EncodingLogDevice

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod codec;
pub mod destination;
pub mod device;
pub mod layout;
pub mod trap;

pub use self::device::LogDevice;
pub use self::error::Error;
pub use self::error::ErrorKind;
pub use self::logger::DeviceLogger;
pub use self::severity::Severity;

mod error;
mod logger;
mod severity;
