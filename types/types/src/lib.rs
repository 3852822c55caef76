#![doc = include_str!("../README.md")]
// Allow some lints when running in debug mode.
#![cfg_attr(debug_assertions, allow(clippy::todo, clippy::multiple_crate_versions))]

mod provenance;

pub use provenance::{AssetInfo, CreationInfo, CreationInfoV2, ThumbnailSegment};
