#![doc = include_str!("../README.md")]
// Allow some lints when running in debug mode.
#![cfg_attr(debug_assertions, allow(clippy::todo, clippy::multiple_crate_versions))]

mod marker;
mod provenance;
mod scan;
mod segment;
mod writer;

pub use marker::Marker;
pub use provenance::{asset_info, create_compliant_file, create_compliant_file_with_thumbnail};
pub use scan::jumbf_insertion_point;
pub use segment::{decode_segment_len, encode_segment_len, MAX_SEGMENT_PAYLOAD};
pub use writer::{insert_segments, insert_segments_with_thumbnail, MarkerContent};

use thiserror::Error;

#[cfg(test)]
use {hex_literal as _, pretty_assertions as _, serde_json as _, tempfile as _};

/// Namespace URI opening every XMP APP1 payload.
pub const XMP_URI: &str = "http://ns.adobe.com/xap/1.0/";

/// An error working with a JPEG stream.
#[derive(Debug, Error)]
pub enum JpegError {
    /// The stream does not start with the SOI marker.
    #[error("missing SOI marker at start of JPEG stream")]
    MissingSoi,
    /// The stream ended inside a marker, length field, or payload.
    #[error("JPEG stream ended inside a segment")]
    TruncatedSegment,
    /// A payload cannot fit in one APPn segment.
    #[error("APP segment payload of {0} bytes exceeds the segment size limit")]
    SegmentTooLarge(usize),
    /// A thumbnail splice points outside its payload or the thumbnail.
    #[error("thumbnail splice of {length} bytes at offset {start} does not fit")]
    ThumbnailOutOfRange {
        /// Splice offset within the JUMBF payload.
        start: usize,
        /// Splice length in bytes.
        length: usize,
    },
    /// A backend payload is not valid Base64.
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
