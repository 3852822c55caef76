#![doc = include_str!("../README.md")]
// Allow some lints when running in debug mode.
#![cfg_attr(debug_assertions, allow(clippy::todo, clippy::multiple_crate_versions))]

mod array;
mod codec;
mod vec;

pub use array::Hex;
pub use codec::{decode, encode, HexError};
pub use vec::HexVec;
