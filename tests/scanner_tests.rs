// tests/scanner_tests.rs
mod common;

use common::*;
use jfif_rs::*;
use proptest::prelude::*;
use std::io::Cursor;

#[test]
fn test_header_layout() {
    let data = watermarked_image(&[0xAA, 0xBB]);
    let toc = scan_bytes(&data).unwrap();

    let markers: Vec<Marker> = toc.iter().map(|d| d.marker).collect();
    assert_eq!(
        markers,
        vec![Marker::APP0, Marker::APP0, Marker::DQT, Marker::SOF0, Marker::DHT, Marker::SOS]
    );
    assert!(toc.is_contiguous());
    assert_eq!(toc.last().unwrap().end(), data.len() as u64);
}

#[test]
fn test_scan_stops_at_sos() {
    // bytes after SOS are never interpreted, even if they look like markers
    let mut data = build_image(&[segment(0xFE, b"comment")]);
    data.extend_from_slice(&[0xFF, 0x01, 0x02]);
    let toc = scan_bytes(&data).unwrap();
    assert_eq!(toc.len(), 2);
    assert_eq!(toc.terminator().unwrap().marker, Marker::SOS);
    assert_eq!(toc.terminator().unwrap().end(), data.len() as u64);
}

#[test]
fn test_not_a_jpeg() {
    for data in [&b""[..], &b"\xFF"[..], &b"GIF89a"[..], &b"\xD8\xFF\xE0\x00"[..]] {
        assert!(matches!(
            scan_bytes(data),
            Err(JfifError::MalformedContainer { offset: 0, .. })
        ));
        assert!(matches!(
            JfifReader::from_bytes(data),
            Err(JfifError::MalformedContainer { .. })
        ));
    }
}

#[test]
fn test_reader_and_scan_agree() {
    let data = watermarked_image(b"payload");
    let reader = JfifReader::from_bytes(&data).unwrap();
    let toc = scan(&mut Cursor::new(&data)).unwrap();
    assert_eq!(reader.toc(), &toc);
    assert_eq!(reader.segment_count(), 6);
    assert_eq!(reader.stream_len(), data.len() as u64);
}

fn arb_segment() -> impl Strategy<Value = Vec<u8>> {
    let tag = prop_oneof![0xC0u8..=0xCF, 0xDBu8..=0xDF, 0xE0u8..=0xEF, Just(0xFEu8)];
    (tag, prop::collection::vec(any::<u8>(), 0..80)).prop_map(|(tag, payload)| segment(tag, &payload))
}

fn arb_image() -> impl Strategy<Value = Vec<u8>> {
    (
        prop::collection::vec(arb_segment(), 0..12),
        prop::collection::vec(any::<u8>(), 0..64),
        any::<bool>(),
    )
        .prop_map(|(segments, entropy, use_eoi)| {
            let mut data = vec![0xFF, 0xD8];
            for seg in &segments {
                data.extend_from_slice(seg);
            }
            if use_eoi {
                data.extend_from_slice(&[0xFF, 0xD9]);
            } else {
                data.extend_from_slice(&[0xFF, 0xDA]);
            }
            data.extend_from_slice(&entropy);
            data
        })
}

proptest! {
    #[test]
    fn prop_toc_is_contiguous_and_terminated(data in arb_image()) {
        let toc = scan_bytes(&data).unwrap();
        prop_assert!(toc.is_contiguous());
        let last = toc.terminator().unwrap();
        prop_assert!(last.marker == Marker::SOS || last.marker == Marker::EOI);
        prop_assert_eq!(last.end(), data.len() as u64);
        for desc in toc.iter().take(toc.len() - 1) {
            prop_assert!(!desc.is_terminal());
            prop_assert!(desc.total_length >= 4);
        }
    }

    #[test]
    fn prop_listing_is_idempotent(data in arb_image()) {
        let first = scan_bytes(&data).unwrap().entries();
        let second = scan_bytes(&data).unwrap().entries();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_segments_reassemble_input(data in arb_image()) {
        let mut reader = JfifReader::from_bytes(&data).unwrap();
        let mut rebuilt = SOI_SIGNATURE.to_vec();
        let segments = reader.toc().segments().to_vec();
        for desc in &segments {
            rebuilt.extend_from_slice(&reader.read_segment(desc).unwrap());
        }
        prop_assert_eq!(rebuilt, data);
    }

    #[test]
    fn prop_truncated_headers_fail_cleanly(data in arb_image(), cut in 0usize..200) {
        let toc = scan_bytes(&data).unwrap();
        let terminator = toc.terminator().unwrap().offset as usize;
        // anything cut before the terminator marker is complete must fail
        let cut = cut % (terminator + 2);
        prop_assert!(scan_bytes(&data[..cut]).is_err());
    }
}
