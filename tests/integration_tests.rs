//! Integration tests for mutf8
//!
//! These tests verify end-to-end behaviour and the codec's algebraic laws.

use mutf8::handle::{Name, Signature};
use mutf8::{
    decode, decode_to_string, decoded_len, encode, encode_into, encode_range, encode_str,
    encode_to_handle, encoded_len, ByteString, Error, Mutf8Reader, Mutf8Writer, Terminator,
    MAX_BYTES_PER_UNIT, NUL_ENCODING, TERMINATOR,
};
use proptest::prelude::*;

fn utf16(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

#[test]
fn test_all_bmp_units_roundtrip() {
    // Every 16-bit value, surrogates included, in one string
    let text: Vec<u16> = (0..=u16::MAX).collect();
    let bytes = encode(&text, Terminator::None);

    assert_eq!(bytes.len(), encoded_len(&text));
    assert_eq!(decode(&bytes).unwrap(), text);
    assert!(!bytes.contains(&0x00));
}

#[test]
fn test_nul_handling() {
    assert_eq!(encode(&[0x0000], Terminator::None), NUL_ENCODING);

    let bytes = encode(&utf16("a\u{0}b\u{0}"), Terminator::Nul);
    assert_eq!(bytes, [0x61, 0xC0, 0x80, 0x62, 0xC0, 0x80, 0x00]);

    // Only the explicit terminator is a literal zero
    assert_eq!(bytes.iter().filter(|&&b| b == TERMINATOR).count(), 1);
}

#[test]
fn test_supplementary_character_is_six_bytes() {
    let bytes = encode(&[0xD800, 0xDC00], Terminator::None);
    assert_eq!(bytes, [0xED, 0xA0, 0x80, 0xED, 0xB0, 0x80]);

    let mut separate = encode(&[0xD800], Terminator::None);
    separate.extend(encode(&[0xDC00], Terminator::None));
    assert_eq!(bytes, separate);

    // Not the 4-byte standard form
    assert_ne!(bytes, "\u{10000}".as_bytes());
}

#[test]
fn test_error_cases() {
    assert_eq!(
        decode(&[0xE0, 0xA0]),
        Err(Error::TruncatedSequence { offset: 0 })
    );
    assert_eq!(
        decode(&[0xC2, 0x00]),
        Err(Error::InvalidContinuationByte { offset: 1 })
    );
    assert_eq!(
        decode(&[0x41, 0x80]),
        Err(Error::InvalidLeadingByte { offset: 1 })
    );
    assert_eq!(
        decode("\u{1F600}".as_bytes()),
        Err(Error::InvalidLeadingByte { offset: 0 })
    );
}

#[test]
fn test_every_leading_byte_dispatch() {
    for b in 0u8..=0xFF {
        let result = decode(&[b, 0x80, 0x80]);
        match b >> 4 {
            0..=7 => assert_eq!(
                result,
                Err(Error::InvalidLeadingByte { offset: 1 }),
                "byte {b:#04x}"
            ),
            12 | 13 => assert_eq!(
                result,
                Err(Error::InvalidLeadingByte { offset: 2 }),
                "byte {b:#04x}"
            ),
            14 => assert!(result.is_ok(), "byte {b:#04x}"),
            _ => assert_eq!(
                result,
                Err(Error::InvalidLeadingByte { offset: 0 }),
                "byte {b:#04x}"
            ),
        }
    }
}

#[test]
fn test_lone_surrogates_survive_roundtrip() {
    let text = [0xDC00, 0x41, 0xD800];
    let bytes = encode(&text, Terminator::None);
    assert_eq!(decode(&bytes).unwrap(), text);
    assert_eq!(
        decode_to_string(&bytes),
        Err(Error::UnpairedSurrogate { offset: 0 })
    );
}

#[test]
fn test_encode_range_matches_slice() {
    let text = utf16("prefix\u{4E2D}\u{0}suffix");
    for start in 0..text.len() {
        for len in 0..=(text.len() - start) {
            assert_eq!(
                encode_range(&text, start, len, Terminator::Nul),
                encode(&text[start..start + len], Terminator::Nul)
            );
        }
    }
}

#[test]
fn test_writer_builds_multiple_strings() {
    let mut buf = [0u8; 64];
    let mut writer = Mutf8Writer::new(&mut buf);

    writer.put_units(&utf16("Code")).unwrap();
    writer.put_terminator().unwrap();
    writer.put_units(&utf16("main")).unwrap();
    writer.put_terminator().unwrap();

    let written = writer.as_slice();
    let parts: Vec<&[u8]> = written[..written.len() - 1].split(|&b| b == 0).collect();
    assert_eq!(parts, [&b"Code"[..], &b"main"[..]]);
}

#[test]
fn test_reader_and_decode_agree() {
    let bytes = encode_str("h\u{E9}llo \u{4E16}\u{754C} \u{1F30D}", Terminator::None);
    let from_reader: Vec<u16> = Mutf8Reader::new(&bytes)
        .collect::<mutf8::Result<_>>()
        .unwrap();
    assert_eq!(from_reader, decode(&bytes).unwrap());
}

#[test]
fn test_typed_handles() {
    let name: ByteString<Name> = encode_to_handle(&utf16("<init>"));
    let sig: ByteString<Signature> = ByteString::from_text("()V");

    assert_eq!(name.as_bytes(), b"<init>");
    assert_eq!(sig.as_bytes(), b"()V");
    assert_eq!(decode_to_string(&name).unwrap(), "<init>");
}

proptest! {
    #[test]
    fn prop_roundtrip(text in prop::collection::vec(any::<u16>(), 0..256)) {
        let bytes = encode(&text, Terminator::None);
        prop_assert_eq!(decode(&bytes).unwrap(), text);
    }

    #[test]
    fn prop_length_law(text in prop::collection::vec(any::<u16>(), 0..256)) {
        let len = encoded_len(&text);
        prop_assert_eq!(encode(&text, Terminator::None).len(), len);
        prop_assert!(len >= text.len());
        prop_assert!(len <= MAX_BYTES_PER_UNIT * text.len());
    }

    #[test]
    fn prop_terminator(text in prop::collection::vec(any::<u16>(), 0..128)) {
        let bytes = encode(&text, Terminator::Nul);
        prop_assert_eq!(bytes.len(), encoded_len(&text) + 1);
        prop_assert_eq!(bytes.last().copied(), Some(TERMINATOR));
        prop_assert!(!bytes[..bytes.len() - 1].contains(&0x00));
    }

    #[test]
    fn prop_ascii_identity(text in prop::collection::vec(0x0001u16..=0x007F, 0..256)) {
        let bytes = encode(&text, Terminator::None);
        let expected: Vec<u8> = text.iter().map(|&u| u as u8).collect();
        prop_assert_eq!(bytes, expected);
    }

    #[test]
    fn prop_decode_never_exceeds_input(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        if let Ok(units) = decode(&bytes) {
            prop_assert!(units.len() <= bytes.len());
            prop_assert_eq!(decoded_len(&bytes).unwrap(), units.len());
        } else {
            prop_assert!(decoded_len(&bytes).is_err());
        }
    }

    #[test]
    fn prop_decode_errors_carry_offset(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        if let Err(e) = decode(&bytes) {
            prop_assert!(e.is_malformed_input());
            let offset = e.offset().unwrap();
            prop_assert!(offset < bytes.len());
        }
    }

    #[test]
    fn prop_encode_into_matches_encode(
        text in prop::collection::vec(any::<u16>(), 0..64),
        slack in 0usize..8,
    ) {
        let expected = encode(&text, Terminator::Nul);
        let mut buf = vec![0u8; expected.len() + slack];
        let written = encode_into(&text, &mut buf, Terminator::Nul).unwrap();
        prop_assert_eq!(&buf[..written], expected.as_slice());

        if !expected.is_empty() {
            let mut short = vec![0u8; expected.len() - 1];
            prop_assert_eq!(
                encode_into(&text, &mut short, Terminator::Nul),
                Err(Error::ShortBuffer)
            );
        }
    }

    #[test]
    fn prop_str_roundtrip(s in any::<String>()) {
        let bytes = encode_str(&s, Terminator::None);
        prop_assert_eq!(decode_to_string(&bytes).unwrap(), s);
    }

    #[test]
    fn prop_handle_roundtrip(text in prop::collection::vec(any::<u16>(), 0..128)) {
        let handle: ByteString = encode_to_handle(&text);
        prop_assert_eq!(handle.len(), encoded_len(&text));
        prop_assert_eq!(handle.to_utf16().unwrap(), text);
    }
}
