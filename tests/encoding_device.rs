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

use std::fs;

use logdevice::ErrorKind;
use logdevice::LogDevice;
use logdevice::Severity;
use logdevice::codec;
use logdevice::codec::Codec;
use logdevice::destination::Memory;
use logdevice::destination::SingleFileBuilder;
use logdevice::device::EncodingLogDevice;
use rand::Rng;
use tempfile::TempDir;

#[test]
fn test_representable_text_is_forwarded_verbatim() {
    let mut rng = rand::rng();
    let codecs: [&'static dyn Codec; 5] = [
        &codec::UTF_8,
        &codec::US_ASCII,
        &codec::LATIN_1,
        &codec::UTF_16LE,
        &codec::UTF_16BE,
    ];

    for codec in codecs {
        let memory = Memory::default();
        let device = EncodingLogDevice::new(codec, memory.clone()).unwrap();

        for _ in 0..32 {
            let len = rng.random_range(0..64);
            let text: String = (0..len)
                .map(|_| char::from(rng.random_range(0x20u8..0x7f)))
                .collect();

            memory.clear();
            device.write(&text, Severity::Info).unwrap();
            assert_eq!(memory.contents(), codec.encode_to_vec(&text).unwrap());
        }
    }
}

#[test]
fn test_codecs_disagree_on_bytes() {
    let ascii = Memory::default();
    let latin1 = Memory::default();
    let utf8 = Memory::default();

    let devices: Vec<Box<dyn LogDevice>> = vec![
        EncodingLogDevice::new(&codec::US_ASCII, ascii.clone())
            .unwrap()
            .into(),
        EncodingLogDevice::new(&codec::LATIN_1, latin1.clone())
            .unwrap()
            .into(),
        EncodingLogDevice::new(&codec::UTF_8, utf8.clone())
            .unwrap()
            .into(),
    ];
    for device in &devices {
        device.write("caf\u{e9}", Severity::Info).unwrap();
    }

    assert_eq!(ascii.contents(), b"caf\x3f");
    assert_eq!(latin1.contents(), b"caf\xe9");
    assert_eq!(utf8.contents(), b"caf\xc3\xa9");
}

#[test]
fn test_unknown_codec_name_fails_before_any_write() {
    let memory = Memory::default();
    let err = EncodingLogDevice::for_name("x-unknown", memory.clone()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidCodec);
    assert!(memory.entries().is_empty());
}

#[test]
fn test_file_receives_encoded_lines() {
    let temp_dir = TempDir::new().expect("failed to create a temporary directory");
    let path = temp_dir.path().join("logs").join("latin1.log");

    let file = SingleFileBuilder::new(&path).build().unwrap();
    let device = EncodingLogDevice::for_name("ISO-8859-1", file)
        .unwrap()
        .with_line_ending("\n");

    device.write("na\u{ef}ve", Severity::Info).unwrap();
    device.write("\u{20ac}100", Severity::Warn).unwrap();
    device.flush().unwrap();
    assert_eq!(device.destination().path(), path.as_path());
    drop(device);

    assert_eq!(fs::read(&path).unwrap(), b"na\xefve\n?100\n");
}
