//! Types exchanged with the provenance backend.
//!
//! These are plain data carriers: the client sends an [`AssetInfo`]
//! describing the asset, the backend answers with a [`CreationInfo`] (or
//! [`CreationInfoV2`]) holding the segments to embed. All payload strings
//! are Base64; the wire format is `camelCase` JSON.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// `xmpInsertionPoint` when absent: immediately after the SOI marker.
#[cfg(feature = "serde")]
const fn default_xmp_insertion_point() -> usize {
    2
}

/// Splice point for locally-produced thumbnail bytes within a JUMBF payload.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ThumbnailSegment {
    /// Which JUMBF payload to splice into, by position in
    /// [`CreationInfoV2::jumbfs`].
    pub index: usize,
    /// Byte offset within that payload at which the thumbnail bytes go.
    pub start: usize,
    /// How many thumbnail bytes to splice in.
    pub length: usize,
}

/// Segment payloads for building a provenance-compliant asset.
///
/// The JUMBF payloads already contain any thumbnail data; compare
/// [`CreationInfoV2`], where the thumbnail is spliced in locally.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CreationInfo {
    /// Base64 APP11 (JUMBF) payloads, in insertion order.
    pub jumbfs: Vec<String>,
    /// A single Base64 APP1 XMP payload.
    pub xmp: String,
}

/// [`CreationInfo`] plus local-thumbnail splice points.
///
/// The JUMBF payloads come back with the thumbnail bytes omitted; each
/// [`ThumbnailSegment`] says where to splice the locally-held thumbnail
/// back in before writing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CreationInfoV2 {
    /// Base64 APP11 (JUMBF) payloads, in insertion order.
    pub jumbfs: Vec<String>,
    /// A single Base64 APP1 XMP payload.
    pub xmp: String,
    /// Where thumbnail bytes get spliced into the JUMBF payloads.
    pub thumbnail_segments: Vec<ThumbnailSegment>,
}

/// What the backend needs to know about an asset to build its manifest.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AssetInfo {
    /// Base64 SHA-256 of the full asset bytes.
    pub asset_hash: String,
    /// Base64 SHA-256 of the thumbnail JPEG bytes.
    pub thumbnail_hash: String,
    /// Thumbnail size (as JPEG) in bytes.
    pub thumbnail_assertion_length: usize,
    /// Byte index where the JUMBF boxes will be inserted in the asset.
    pub jumbf_insertion_point: usize,
    /// Byte index where the XMP goes; 2 (right after SOI) unless stated.
    #[cfg_attr(
        feature = "serde",
        serde(default = "default_xmp_insertion_point")
    )]
    pub xmp_insertion_point: usize,
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn creation_info_json() {
        let json = r#"{"jumbfs":["TXlKdW1iZkV4YW1wbGU="],"xmp":"TXlFeGFtcGxlWE1Q"}"#;

        let info = serde_json::from_str::<CreationInfo>(json).unwrap();
        assert_eq!(
            info,
            CreationInfo {
                jumbfs: vec!["TXlKdW1iZkV4YW1wbGU=".to_string()],
                xmp: "TXlFeGFtcGxlWE1Q".to_string(),
            }
        );

        assert_eq!(serde_json::to_string(&info).unwrap(), json);
    }

    #[test]
    fn creation_info_v2_json() {
        let json = r#"{"jumbfs":["QQ==","Qg=="],"xmp":"WA==","thumbnailSegments":[{"index":0,"start":0,"length":24}]}"#;

        let info = serde_json::from_str::<CreationInfoV2>(json).unwrap();
        assert_eq!(
            info.thumbnail_segments,
            vec![ThumbnailSegment {
                index: 0,
                start: 0,
                length: 24,
            }]
        );

        assert_eq!(serde_json::to_string(&info).unwrap(), json);
    }

    #[test]
    fn asset_info_xmp_insertion_point_defaults_after_soi() {
        let json = r#"{
            "assetHash": "aGFzaA==",
            "thumbnailHash": "dGh1bWI=",
            "thumbnailAssertionLength": 4096,
            "jumbfInsertionPoint": 20
        }"#;

        let info = serde_json::from_str::<AssetInfo>(json).unwrap();
        assert_eq!(info.xmp_insertion_point, 2);
        assert_eq!(info.jumbf_insertion_point, 20);
    }
}
