//! File-level provenance assembly.
//!
//! Ties the backend types to the segment writer: Base64 payloads from a
//! [`CreationInfo`]/[`CreationInfoV2`] become APP1/APP11 segments in a
//! copy of the original file, and [`asset_info`] computes what the
//! backend needs to produce them in the first place.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use base64::{engine::general_purpose::STANDARD, Engine};

use verity_helper::digest::sha256_base64;
use verity_types::{AssetInfo, CreationInfo, CreationInfoV2};

use crate::{
    marker::Marker,
    scan::jumbf_insertion_point,
    writer::{insert_segments, insert_segments_with_thumbnail, MarkerContent},
    JpegError,
};

/// Copies `original` to `output` with the [`CreationInfo`] payloads
/// embedded.
///
/// The JUMBF payloads must already be complete, thumbnail included.
///
/// # Errors
/// [`JpegError::Base64`] if a payload does not decode, otherwise as
/// [`insert_segments`].
pub fn create_compliant_file(
    original: &Path,
    output: &Path,
    info: &CreationInfo,
) -> Result<(), JpegError> {
    let content = decode_payloads(&info.xmp, &info.jumbfs)?;

    let mut reader = BufReader::new(File::open(original)?);
    let mut writer = BufWriter::new(File::create(output)?);
    insert_segments(&mut reader, &mut writer, &content)?;
    writer.flush()?;
    Ok(())
}

/// Copies `original` to `output` with the [`CreationInfoV2`] payloads
/// embedded and `thumbnail_jpeg` spliced into them.
///
/// `thumbnail_jpeg` must be byte-identical to the thumbnail the
/// backend was told about, or the result will fail validation
/// downstream even though this call succeeds.
///
/// # Errors
/// [`JpegError::Base64`] if a payload does not decode, otherwise as
/// [`insert_segments_with_thumbnail`].
pub fn create_compliant_file_with_thumbnail(
    original: &Path,
    output: &Path,
    info: &CreationInfoV2,
    thumbnail_jpeg: &[u8],
) -> Result<(), JpegError> {
    let content = decode_payloads(&info.xmp, &info.jumbfs)?;

    let mut reader = BufReader::new(File::open(original)?);
    let mut writer = BufWriter::new(File::create(output)?);
    insert_segments_with_thumbnail(
        &mut reader,
        &mut writer,
        &content,
        thumbnail_jpeg,
        &info.thumbnail_segments,
    )?;
    writer.flush()?;
    Ok(())
}

/// Describes an asset to the provenance backend.
///
/// Hashes the full image and the thumbnail and locates the JUMBF
/// insertion point. The thumbnail must be reproducible: the same bytes
/// must be available at assembly time for splicing.
///
/// # Errors
/// As [`jumbf_insertion_point`].
pub fn asset_info(image: &[u8], thumbnail_jpeg: &[u8]) -> Result<AssetInfo, JpegError> {
    let mut stream = image;
    let jumbf_insertion_point = jumbf_insertion_point(&mut stream)?;

    Ok(AssetInfo {
        asset_hash: sha256_base64(image),
        thumbnail_hash: sha256_base64(thumbnail_jpeg),
        thumbnail_assertion_length: thumbnail_jpeg.len(),
        jumbf_insertion_point,
        // XMP goes right after SOI.
        xmp_insertion_point: 2,
    })
}

/// One APP1 XMP entry followed by the APP11 JUMBF entries, in order.
fn decode_payloads(xmp: &str, jumbfs: &[String]) -> Result<Vec<MarkerContent>, JpegError> {
    let mut content = Vec::with_capacity(jumbfs.len() + 1);
    content.push((Marker::APP1, STANDARD.decode(xmp)?));
    for jumbf in jumbfs {
        content.push((Marker::APP11, STANDARD.decode(jumbf)?));
    }
    Ok(content)
}
