//! Segment length handling.
//!
//! An APPn segment is `marker (2) | length (2) | payload`. The length
//! field is a big-endian [`u16`] counting itself but not the marker, so
//! a payload of `N` bytes is written as `N + 2`.

use std::io::{ErrorKind, Read};

use crate::JpegError;

/// Largest payload an APPn segment can carry.
pub const MAX_SEGMENT_PAYLOAD: usize = u16::MAX as usize - 2;

/// Encodes a payload length as a segment length field.
///
/// ```rust
/// # use verity_jpeg::{encode_segment_len, MAX_SEGMENT_PAYLOAD};
/// assert_eq!(encode_segment_len(9).unwrap(), [0x00, 0x0B]);
/// // 258 + 2 = 0x0104
/// assert_eq!(encode_segment_len(258).unwrap(), [0x01, 0x04]);
/// assert!(encode_segment_len(MAX_SEGMENT_PAYLOAD + 1).is_err());
/// ```
///
/// # Errors
/// [`JpegError::SegmentTooLarge`] if `payload_len` exceeds
/// [`MAX_SEGMENT_PAYLOAD`].
pub fn encode_segment_len(payload_len: usize) -> Result<[u8; 2], JpegError> {
    let Ok(total) = u16::try_from(payload_len.saturating_add(2)) else {
        return Err(JpegError::SegmentTooLarge(payload_len));
    };
    Ok(total.to_be_bytes())
}

/// Decodes a segment length field into a payload length.
///
/// # Errors
/// [`JpegError::TruncatedSegment`] if the field is below 2, which no
/// well-formed segment produces.
pub fn decode_segment_len(bytes: [u8; 2]) -> Result<usize, JpegError> {
    match usize::from(u16::from_be_bytes(bytes)).checked_sub(2) {
        Some(payload_len) => Ok(payload_len),
        None => Err(JpegError::TruncatedSegment),
    }
}

/// [`Read::read_exact`] with EOF mapped to [`JpegError::TruncatedSegment`].
pub(crate) fn read_or_truncated<R: Read + ?Sized>(
    stream: &mut R,
    buf: &mut [u8],
) -> Result<(), JpegError> {
    stream.read_exact(buf).map_err(|e| {
        if e.kind() == ErrorKind::UnexpectedEof {
            JpegError::TruncatedSegment
        } else {
            JpegError::Io(e)
        }
    })
}
