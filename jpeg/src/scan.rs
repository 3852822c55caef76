//! Locating the JUMBF insertion point.

use std::io::Read;

use verity_helper::cast::usize_to_u64;

use crate::{
    marker::Marker,
    segment::{decode_segment_len, read_or_truncated},
    JpegError, XMP_URI,
};

/// Returns the byte index where JUMBF boxes will be inserted.
///
/// Scans from the start of the stream, counting SOI and every APPn
/// segment below APP11. An existing XMP block does not count: the
/// backend replaces it, so the index is computed as if it were absent.
/// Scanning stops at the first APP11-or-above or non-APPn marker.
///
/// The backend runs the same scan server-side; the two must agree on
/// the byte index for the returned JUMBF payloads to be valid.
///
/// # Errors
/// [`JpegError::MissingSoi`] if the stream does not start with SOI,
/// [`JpegError::TruncatedSegment`]/[`JpegError::Io`] on malformed input
/// or stream failure.
pub fn jumbf_insertion_point<R: Read + ?Sized>(stream: &mut R) -> Result<usize, JpegError> {
    if Marker::read_from(stream)? != Marker::SOI {
        return Err(JpegError::MissingSoi);
    }
    let mut offset = 2;

    let mut marker = Marker::read_from(stream)?;
    let mut len_bytes = [0; 2];
    read_or_truncated(stream, &mut len_bytes)?;

    while marker.is_app() && marker.kind() < Marker::APP11.kind() {
        let len = decode_segment_len(len_bytes)?;
        let mut remaining = len;
        let mut is_xmp = false;

        // An APP1 long enough to hold the namespace URI could be XMP.
        if marker == Marker::APP1 && len > XMP_URI.len() {
            let mut prefix = [0; XMP_URI.len()];
            read_or_truncated(stream, &mut prefix)?;
            is_xmp = prefix == *XMP_URI.as_bytes();
            remaining -= prefix.len();
        }

        skip(stream, remaining)?;
        if is_xmp {
            #[cfg(feature = "tracing")]
            tracing::trace!(len, "discounting existing XMP segment");
        } else {
            offset += 4 + len;
        }

        marker = Marker::read_from(stream)?;
        read_or_truncated(stream, &mut len_bytes)?;
    }

    Ok(offset)
}

/// Discards exactly `n` bytes from `stream`.
fn skip<R: Read + ?Sized>(stream: &mut R, n: usize) -> Result<(), JpegError> {
    let n = usize_to_u64(n);
    let skipped = std::io::copy(&mut (&mut *stream).take(n), &mut std::io::sink())?;
    if skipped < n {
        return Err(JpegError::TruncatedSegment);
    }
    Ok(())
}
