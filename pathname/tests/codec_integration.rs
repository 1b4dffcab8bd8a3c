//! Integration tests for the flat encoding.

mod common;

use common::{norm, raw};
use pathname::codec::{decode, encode, encode_into, FORMAT_VERSION, HEADER_LEN};
use pathname::Error;

#[test]
fn test_encode_decode_preserves_value_and_flags() {
    for path in [norm("/path/to/file.ext"), raw("relative/./x"), norm("..")] {
        let encoded = encode(&path).unwrap();
        let decoded = decode(&encoded, 4096).unwrap();
        assert_eq!(decoded, path);
        assert_eq!(decoded.flags(), path.flags());
    }
}

#[test]
fn test_header_is_big_endian() {
    let encoded = encode(&raw("/x")).unwrap();
    assert_eq!(&encoded[..2], &FORMAT_VERSION.to_be_bytes());
    assert_eq!(&encoded[3..HEADER_LEN], &2u32.to_be_bytes());
}

#[test]
fn test_concatenated_encodings_need_splitting() {
    let mut stream = Vec::new();
    encode_into(&raw("/a"), &mut stream).unwrap();
    encode_into(&raw("/b"), &mut stream).unwrap();

    // A single decode call expects exactly one value
    assert!(matches!(decode(&stream, 4096), Err(Error::Decode { .. })));

    let first_len = HEADER_LEN + 2;
    assert_eq!(decode(&stream[..first_len], 4096).unwrap(), "/a");
    assert_eq!(decode(&stream[first_len..], 4096).unwrap(), "/b");
}

#[test]
fn test_decode_applies_length_limit() {
    let encoded = encode(&raw("/abcdef")).unwrap();
    assert!(decode(&encoded, 7).is_ok());
    assert!(matches!(
        decode(&encoded, 6),
        Err(Error::ExceededLength { .. })
    ));
}

#[test]
fn test_decoded_value_supports_components() {
    let encoded = encode(&norm("/var/log/syslog.1")).unwrap();
    let decoded = decode(&encoded, 4096).unwrap();
    assert_eq!(decoded.extension().unwrap().as_bytes(), b".1");
    assert_eq!(decoded.dirname().unwrap(), "/var/log/");
}
