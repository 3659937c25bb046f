// tests/common/mod.rs
#![allow(dead_code)]

use jfif_rs::WATERMARK_SIGNATURE;
use std::fs;
use std::path::{Path, PathBuf};

/// Length-prefixed segment with the given marker tag and payload.
pub fn segment(tag: u8, payload: &[u8]) -> Vec<u8> {
    let length = (payload.len() + 2) as u16;
    let mut seg = vec![0xFF, tag];
    seg.extend_from_slice(&length.to_be_bytes());
    seg.extend_from_slice(payload);
    seg
}

/// APP0 segment carrying the watermark signature followed by `tail`.
pub fn watermark_segment(tail: &[u8]) -> Vec<u8> {
    let mut payload = WATERMARK_SIGNATURE.to_vec();
    payload.extend_from_slice(tail);
    segment(0xE0, &payload)
}

pub fn jfif_app0() -> Vec<u8> {
    segment(0xE0, b"JFIF\0\x01\x01\0\0\x01\0\x01\0\0")
}

/// SOI, the given segments, then an SOS header with some entropy-coded
/// bytes and EOI.
pub fn build_image(segments: &[Vec<u8>]) -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8];
    for seg in segments {
        data.extend_from_slice(seg);
    }
    data.extend_from_slice(&scan_tail());
    data
}

pub fn scan_tail() -> Vec<u8> {
    let mut tail = segment(0xDA, &[0x01, 0x01, 0x00, 0x00, 0x3F, 0x00]);
    tail.extend_from_slice(&[0x12, 0xFF, 0x00, 0x34, 0x56, 0xFF, 0xD9]);
    tail
}

/// A small but realistic header layout with one watermark segment.
pub fn watermarked_image(tail: &[u8]) -> Vec<u8> {
    build_image(&[
        jfif_app0(),
        watermark_segment(tail),
        segment(0xDB, &[0x00; 65]),
        segment(0xC0, &[0x08, 0x00, 0x10, 0x00, 0x10, 0x01, 0x01, 0x11, 0x00]),
        segment(0xC4, &[0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ])
}

pub fn write_file(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, data).unwrap();
    path
}
