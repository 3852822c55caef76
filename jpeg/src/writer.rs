//! APPn segment insertion.
//!
//! The entry points copy a JPEG stream while inserting new APPn segments
//! at their marker-ordered position. Segments must be supplied already
//! sorted by marker; existing XMP blocks are dropped from the output as
//! the provenance payloads replace them.

use std::{
    borrow::Cow,
    io::{Read, Write},
};

use verity_types::ThumbnailSegment;

use crate::{
    marker::Marker,
    segment::{decode_segment_len, encode_segment_len, read_or_truncated},
    JpegError, XMP_URI,
};

/// A marker paired with the payload to insert under it.
pub type MarkerContent = (Marker, Vec<u8>);

/// Copies `original` to `destination`, inserting `content`.
///
/// Each entry is written after every existing APPn segment with a lower
/// marker and before the first with an equal or higher one. Existing XMP
/// (APP1, payload starting with [`XMP_URI`]) is not copied through.
///
/// Streams are left unflushed and open; `destination` should be buffered
/// for anything larger than toy inputs.
///
/// # Errors
/// [`JpegError::MissingSoi`] if `original` does not start with SOI,
/// [`JpegError::SegmentTooLarge`] if a payload cannot fit one segment,
/// [`JpegError::TruncatedSegment`]/[`JpegError::Io`] on malformed input
/// or stream failure.
pub fn insert_segments<R, W>(
    original: &mut R,
    destination: &mut W,
    content: &[MarkerContent],
) -> Result<(), JpegError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    insert(original, destination, content, &[], &[])
}

/// [`insert_segments`], splicing locally-held thumbnail bytes into the
/// APP11 payloads on the way through.
///
/// `thumbnail_segments` index into `content` discounting the leading
/// APP1 entry: a segment with `index` `i` targets the APP11 entry at
/// `content[i + 1]`. Consecutive splices consume consecutive ranges of
/// `thumbnail_jpeg`.
///
/// # Errors
/// As [`insert_segments`], plus [`JpegError::ThumbnailOutOfRange`] if a
/// splice does not fit its payload or `thumbnail_jpeg`.
pub fn insert_segments_with_thumbnail<R, W>(
    original: &mut R,
    destination: &mut W,
    content: &[MarkerContent],
    thumbnail_jpeg: &[u8],
    thumbnail_segments: &[ThumbnailSegment],
) -> Result<(), JpegError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    insert(
        original,
        destination,
        content,
        thumbnail_jpeg,
        thumbnail_segments,
    )
}

fn insert<R, W>(
    original: &mut R,
    destination: &mut W,
    content: &[MarkerContent],
    thumbnail_jpeg: &[u8],
    thumbnail_segments: &[ThumbnailSegment],
) -> Result<(), JpegError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    if Marker::read_from(original)? != Marker::SOI {
        return Err(JpegError::MissingSoi);
    }
    destination.write_all(&Marker::SOI.to_bytes())?;

    // First marker + length; APP0 is mandatory in JPEGs.
    let mut marker = Marker::read_from(original)?;
    let mut len_bytes = [0; 2];
    read_or_truncated(original, &mut len_bytes)?;

    // Running total of thumbnail bytes spliced so far.
    let mut thumbnail_offset = 0;

    for (index, (insert_marker, payload)) in content.iter().enumerate() {
        // Copy existing APPn segments that sort below this entry.
        while marker.is_app() && marker.kind() < insert_marker.kind() {
            let len = decode_segment_len(len_bytes)?;
            let mut existing = vec![0; len];
            read_or_truncated(original, &mut existing)?;

            if existing.starts_with(XMP_URI.as_bytes()) {
                #[cfg(feature = "tracing")]
                tracing::trace!(%marker, len, "dropping existing XMP segment");
            } else {
                destination.write_all(&marker.to_bytes())?;
                destination.write_all(&len_bytes)?;
                destination.write_all(&existing)?;
            }

            marker = Marker::read_from(original)?;
            read_or_truncated(original, &mut len_bytes)?;
        }

        let data: Cow<'_, [u8]> =
            if let Some(segment) = thumbnail_target(thumbnail_segments, index, *insert_marker) {
                let spliced =
                    splice_thumbnail(payload, segment, thumbnail_jpeg, thumbnail_offset)?;
                thumbnail_offset += segment.length;
                Cow::Owned(spliced)
            } else {
                Cow::Borrowed(payload.as_slice())
            };

        #[cfg(feature = "tracing")]
        tracing::trace!(marker = %insert_marker, len = data.len(), "inserting segment");

        destination.write_all(&insert_marker.to_bytes())?;
        destination.write_all(&encode_segment_len(data.len())?)?;
        destination.write_all(&data)?;
    }

    // Write the pending marker + length, then pass the rest through.
    destination.write_all(&marker.to_bytes())?;
    destination.write_all(&len_bytes)?;
    std::io::copy(original, destination)?;

    Ok(())
}

/// The splice targeting the `content` entry at `index`, if any.
///
/// Only APP11 entries receive thumbnail bytes; `ThumbnailSegment::index`
/// discounts the leading APP1 entry.
fn thumbnail_target(
    thumbnail_segments: &[ThumbnailSegment],
    index: usize,
    marker: Marker,
) -> Option<&ThumbnailSegment> {
    if marker != Marker::APP11 {
        return None;
    }
    thumbnail_segments.iter().find(|s| s.index + 1 == index)
}

/// Inserts `thumbnail_jpeg[offset..offset + segment.length]` into
/// `payload` at `segment.start`.
fn splice_thumbnail(
    payload: &[u8],
    segment: &ThumbnailSegment,
    thumbnail_jpeg: &[u8],
    offset: usize,
) -> Result<Vec<u8>, JpegError> {
    let end = offset.saturating_add(segment.length);
    if segment.start > payload.len() || end > thumbnail_jpeg.len() {
        return Err(JpegError::ThumbnailOutOfRange {
            start: segment.start,
            length: segment.length,
        });
    }

    let mut out = Vec::with_capacity(payload.len() + segment.length);
    out.extend_from_slice(&payload[..segment.start]);
    out.extend_from_slice(&thumbnail_jpeg[offset..end]);
    out.extend_from_slice(&payload[segment.start..]);
    Ok(out)
}
