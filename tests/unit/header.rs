//! Tests for the 8-byte per-list header.

use dint::Header;

#[test]
fn test_header_layout_is_two_le_u32s() {
    let mut buf = Vec::new();
    Header {
        n: 0x0403_0201,
        universe: 0x0807_0605,
    }
    .write(&mut buf);

    assert_eq!(buf, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_header_roundtrip() {
    let header = Header {
        n: 42,
        universe: 1_000_000,
    };

    let mut buf = Vec::new();
    header.write(&mut buf);
    let (decoded, rest) = Header::read(&buf).unwrap();

    assert_eq!(decoded, header);
    assert!(rest.is_empty());
}

#[test]
fn test_header_read_consumes_exactly_eight_bytes() {
    let mut buf = Vec::new();
    Header { n: 3, universe: 9 }.write(&mut buf);
    Header { n: 4, universe: 16 }.write(&mut buf);

    let (first, rest) = Header::read(&buf).unwrap();
    let (second, rest) = Header::read(rest).unwrap();

    assert_eq!(first.n, 3);
    assert_eq!(second.n, 4);
    assert!(rest.is_empty());
}

#[test]
fn test_short_header_is_corrupt_stream() {
    for len in 0..Header::SIZE {
        let err = Header::read(&vec![0u8; len]).unwrap_err();
        assert!(err.is_corrupt_stream(), "len {} should be corrupt", len);
    }
}
