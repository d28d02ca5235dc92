// session-rs: Process Environment and Arguments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{EnvCodec, Encoding, NarrowCodec, WideCodec, block_entries, bytes_to_utf8};
use crate::error::{Direction, EncodingError};

#[test]
fn test_utf8_passthrough() {
    let input = "Hello, 世界!";
    let result = bytes_to_utf8(Encoding::Utf8, input.as_bytes());
    insta::assert_snapshot!(result, @"Hello, 世界!");
}

#[test]
fn test_windows_1252_conversion() {
    let input = b"caf\xe9";
    let result = bytes_to_utf8(Encoding::Acp, input);
    insta::assert_snapshot!(result, @"café");
}

#[test]
fn test_detect_prefers_utf8() {
    assert_eq!(Encoding::detect("naïve".as_bytes()), Encoding::Utf8);
    assert_eq!(Encoding::detect(b"na\xefve"), Encoding::Acp);
    assert_eq!(Encoding::detect(b""), Encoding::Utf8);
}

#[test]
fn test_narrow_codec_falls_back_to_ansi() {
    let utf8 = NarrowCodec::narrow("GREETING=grüß".as_bytes()).unwrap();
    assert_eq!(utf8, "GREETING=grüß");

    // Legacy-encoded value: 0xFC is 'ü' in CP1252 and invalid as UTF-8.
    let legacy = NarrowCodec::narrow(b"GREETING=gr\xfc\xdf").unwrap();
    assert_eq!(legacy, "GREETING=grüß");
}

#[test]
fn test_wide_codec_round_trip() {
    for text in ["", "PATH=C:\\Windows", "ключ=значение", "emoji=🦀"] {
        let wide = WideCodec::widen(text);
        assert_eq!(WideCodec::narrow(&wide).unwrap(), text);
        assert_eq!(WideCodec::widen(&WideCodec::narrow(&wide).unwrap()), wide);
    }
}

#[test]
fn test_wide_codec_rejects_unpaired_surrogate() {
    let wide = [u16::from(b'K'), u16::from(b'='), 0xD800];
    let err = WideCodec::narrow(&wide).unwrap_err();
    assert_eq!(err, EncodingError::no_translation(Direction::Narrow));
    assert_eq!(err.code, 1113);
}

#[test]
fn test_widen_entry_separator_offset() {
    let (entry, offset) = WideCodec::widen_entry("ключ", "a=b");
    assert_eq!(offset, 4);
    assert_eq!(entry[offset], u16::from(b'='));
    assert_eq!(WideCodec::narrow(&entry).unwrap(), "ключ=a=b");

    let (entry, offset) = NarrowCodec::widen_entry("ключ", "v");
    assert_eq!(offset, "ключ".len());
    assert_eq!(entry[offset], b'=');
}

#[test]
fn test_block_entries_stops_at_empty_entry() {
    let block: Vec<u16> = "A=1\0B=2\0\0garbage\0".encode_utf16().collect();
    let entries: Vec<String> = block_entries(&block)
        .map(|e| WideCodec::narrow(e).unwrap())
        .collect();
    assert_eq!(entries, ["A=1", "B=2"]);
}

#[test]
fn test_block_entries_empty_block() {
    let block = [0u8, 0u8];
    assert_eq!(block_entries(&block).count(), 0);
    assert_eq!(block_entries::<u8>(&[]).count(), 0);
}
