//! Digest helpers.

//---------------------------------------------------------------------------------------------------- Use
use base64::{engine::general_purpose::STANDARD, Engine};
use sha2::{Digest, Sha256};

//---------------------------------------------------------------------------------------------------- Free Functions
/// Base64 of the SHA-256 digest of `bytes`.
///
/// Standard alphabet, padded, no line wrapping. This is the hash format
/// carried in [`AssetInfo`] fields.
///
/// [`AssetInfo`]: https://docs.rs/verity-types
///
/// ```rust
/// # use verity_helper::digest::sha256_base64;
/// assert_eq!(
///     sha256_base64(b"hello"),
///     "LPJNul+wow4m6DsqxbninhsWHlwfp0JecwQzYpOLmCQ=",
/// );
/// assert_eq!(
///     sha256_base64(b""),
///     "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=",
/// );
/// ```
pub fn sha256_base64(bytes: impl AsRef<[u8]>) -> String {
    STANDARD.encode(Sha256::digest(bytes.as_ref()))
}
