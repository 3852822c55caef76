//! Segment insertion against synthetic JPEG streams.

use base64 as _;
use serde_json as _;
use tempfile as _;
use thiserror as _;
use verity_helper as _;
use verity_hex as _;

use hex_literal::hex;
use pretty_assertions::assert_eq;

use verity_jpeg::{
    encode_segment_len, insert_segments, insert_segments_with_thumbnail, JpegError, Marker,
    MarkerContent, XMP_URI, MAX_SEGMENT_PAYLOAD,
};
use verity_types::ThumbnailSegment;

/// `marker | length | payload`.
fn segment(kind: u8, payload: &[u8]) -> Vec<u8> {
    let mut out = vec![0xFF, kind];
    out.extend_from_slice(&encode_segment_len(payload.len()).unwrap());
    out.extend_from_slice(payload);
    out
}

/// SOI, the given APPn segments, a DQT stand-in, and EOI.
fn jpeg(segments: &[Vec<u8>]) -> Vec<u8> {
    let mut out = hex!("FFD8").to_vec();
    for seg in segments {
        out.extend_from_slice(seg);
    }
    out.extend_from_slice(&segment(0xDB, &[0x42; 8]));
    out.extend_from_slice(&hex!("FFD9"));
    out
}

/// Walks `(marker kind, payload)` pairs until EOI.
fn walk(bytes: &[u8]) -> Vec<(u8, Vec<u8>)> {
    assert_eq!(bytes[..2], hex!("FFD8"));
    let mut segments = Vec::new();
    let mut at = 2;
    while bytes[at..at + 2] != hex!("FFD9") {
        assert_eq!(bytes[at], 0xFF, "lost sync at byte {at}");
        let kind = bytes[at + 1];
        let len = usize::from(u16::from_be_bytes([bytes[at + 2], bytes[at + 3]])) - 2;
        segments.push((kind, bytes[at + 4..at + 4 + len].to_vec()));
        at += 4 + len;
    }
    segments
}

fn content(marker: Marker, payload: &[u8]) -> MarkerContent {
    (marker, payload.to_vec())
}

#[test]
fn inserts_before_higher_markers() {
    let image = jpeg(&[segment(0xE0, b"JFIF\0"), segment(0xE1, b"Exif\0\0data")]);
    let mut output = Vec::new();

    insert_segments(
        &mut image.as_slice(),
        &mut output,
        &[content(Marker::APP11, b"Ian Rocks")],
    )
    .unwrap();

    let segments = walk(&output);
    let kinds = segments.iter().map(|(kind, _)| *kind).collect::<Vec<u8>>();
    assert_eq!(kinds, [0xE0, 0xE1, 0xEB, 0xDB]);
    assert_eq!(segments[2].1, b"Ian Rocks");

    // Everything after the insertion passes through untouched.
    assert!(output.ends_with(&hex!("FFD9")));
}

#[test]
fn length_field_is_big_endian() {
    let image = jpeg(&[segment(0xE0, b"JFIF\0")]);
    let mut output = Vec::new();

    // 258 + 2 = 0x0104, exercising the high length byte.
    insert_segments(
        &mut image.as_slice(),
        &mut output,
        &[content(Marker::APP11, &[b'S'; 258])],
    )
    .unwrap();

    let segments = walk(&output);
    assert_eq!(segments[1].0, 0xEB);
    assert_eq!(segments[1].1.len(), 258);

    let eb = output.windows(4).position(|w| w[..2] == hex!("FFEB")).unwrap();
    assert_eq!(output[eb + 2..eb + 4], hex!("0104"));
}

#[test]
fn inserts_within_existing_app_segments() {
    let image = jpeg(&[
        segment(0xE0, b"JFIF\0"),
        segment(0xE1, b"Exif\0\0data"),
        segment(0xEA, b"app10"),
        segment(0xEB, b"old jumbf"),
        segment(0xEC, b"app12"),
    ]);
    let mut output = Vec::new();

    insert_segments(
        &mut image.as_slice(),
        &mut output,
        &[content(Marker::APP11, b"new jumbf")],
    )
    .unwrap();

    let segments = walk(&output);
    let kinds = segments.iter().map(|(kind, _)| *kind).collect::<Vec<u8>>();
    assert_eq!(kinds, [0xE0, 0xE1, 0xEA, 0xEB, 0xEB, 0xEC, 0xDB]);

    // The new segment lands before the existing APP11.
    assert_eq!(segments[3].1, b"new jumbf");
    assert_eq!(segments[4].1, b"old jumbf");
}

#[test]
fn inserts_multiple_segments() {
    let image = jpeg(&[
        segment(0xE0, b"JFIF\0"),
        segment(0xE1, b"Exif\0\0data"),
        segment(0xEA, b"app10"),
        segment(0xEB, b"old jumbf"),
        segment(0xEC, b"app12"),
    ]);
    let mut output = Vec::new();

    insert_segments(
        &mut image.as_slice(),
        &mut output,
        &[
            content(Marker::APP1, b"Whatsup"),
            content(Marker::APP11, &[b'S'; 230]),
        ],
    )
    .unwrap();

    let segments = walk(&output);
    let kinds = segments.iter().map(|(kind, _)| *kind).collect::<Vec<u8>>();
    assert_eq!(kinds, [0xE0, 0xE1, 0xE1, 0xEA, 0xEB, 0xEB, 0xEC, 0xDB]);
    assert_eq!(segments[1].1, b"Whatsup");
    assert_eq!(segments[4].1, vec![b'S'; 230]);
}

#[test]
fn drops_existing_xmp() {
    let mut xmp_payload = XMP_URI.as_bytes().to_vec();
    xmp_payload.extend_from_slice(b"\0<x:xmpmeta/>");
    let image = jpeg(&[segment(0xE0, b"JFIF\0"), segment(0xE1, &xmp_payload)]);
    let mut output = Vec::new();

    insert_segments(
        &mut image.as_slice(),
        &mut output,
        &[content(Marker::APP11, b"jumbf")],
    )
    .unwrap();

    let segments = walk(&output);
    let kinds = segments.iter().map(|(kind, _)| *kind).collect::<Vec<u8>>();
    assert_eq!(kinds, [0xE0, 0xEB, 0xDB]);
}

#[test]
fn splices_thumbnail_across_jumbfs() {
    let image = jpeg(&[segment(0xE0, b"JFIF\0")]);
    let thumbnail = b"0123456789AB";
    let mut output = Vec::new();

    insert_segments_with_thumbnail(
        &mut image.as_slice(),
        &mut output,
        &[
            content(Marker::APP1, b"xmp"),
            content(Marker::APP11, b"head-tail"),
            content(Marker::APP11, b"rest"),
        ],
        thumbnail,
        &[
            ThumbnailSegment {
                index: 0,
                start: 4,
                length: 8,
            },
            ThumbnailSegment {
                index: 1,
                start: 0,
                length: 4,
            },
        ],
    )
    .unwrap();

    let segments = walk(&output);
    // First JUMBF gets thumbnail[0..8] at offset 4, second gets [8..12] at 0.
    assert_eq!(segments[2].1, b"head01234567-tail");
    assert_eq!(segments[3].1, b"89ABrest");
}

#[test]
fn thumbnail_ignores_the_leading_xmp_entry() {
    let image = jpeg(&[segment(0xE0, b"JFIF\0")]);
    let mut output = Vec::new();

    // `index: 0` targets the first APP11 entry, not the APP1 at index 0.
    insert_segments_with_thumbnail(
        &mut image.as_slice(),
        &mut output,
        &[content(Marker::APP1, b"xmp"), content(Marker::APP11, b"jumbf")],
        b"THUMB",
        &[ThumbnailSegment {
            index: 0,
            start: 0,
            length: 5,
        }],
    )
    .unwrap();

    let segments = walk(&output);
    assert_eq!(segments[1].1, b"xmp");
    assert_eq!(segments[2].1, b"THUMBjumbf");
}

#[test]
fn missing_soi() {
    let image = segment(0xE0, b"JFIF\0");
    let mut output = Vec::new();

    assert!(matches!(
        insert_segments(
            &mut image.as_slice(),
            &mut output,
            &[content(Marker::APP11, b"jumbf")],
        ),
        Err(JpegError::MissingSoi),
    ));
}

#[test]
fn oversized_payload() {
    let image = jpeg(&[segment(0xE0, b"JFIF\0")]);
    let mut output = Vec::new();

    assert!(matches!(
        insert_segments(
            &mut image.as_slice(),
            &mut output,
            &[content(Marker::APP11, &vec![0; MAX_SEGMENT_PAYLOAD + 1])],
        ),
        Err(JpegError::SegmentTooLarge(_)),
    ));
}

#[test]
fn truncated_input() {
    // APP0 claiming 100 payload bytes, delivering 5.
    let mut image = hex!("FFD8 FFE0 0066").to_vec();
    image.extend_from_slice(b"JFIF\0");
    let mut output = Vec::new();

    assert!(matches!(
        insert_segments(
            &mut image.as_slice(),
            &mut output,
            &[content(Marker::APP11, b"jumbf")],
        ),
        Err(JpegError::TruncatedSegment),
    ));
}
