//! The hexadecimal codec itself.

use thiserror::Error;

/// The fixed uppercase alphabet, indexed directly by nibble value.
const HEX_TABLE: [u8; 16] = *b"0123456789ABCDEF";

/// An error decoding a hexadecimal string.
///
/// [`encode`] is total and never produces this.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    /// The input has an odd number of characters.
    #[error("hex string has an odd number of characters ({len})")]
    OddLength {
        /// Length of the rejected input in bytes.
        len: usize,
    },
    /// A 2-character group is not a valid base-16 integer.
    #[error("invalid hex digit pair `{pair}` at byte offset {offset}")]
    InvalidPair {
        /// The malformed 2-character group.
        pair: String,
        /// Byte offset of the group within the input.
        offset: usize,
    },
    /// The input decoded cleanly but to the wrong number of bytes.
    ///
    /// Only returned by the fixed-size [`Hex`](crate::Hex) wrapper,
    /// never by [`decode`].
    #[error("hex string decodes to {len} bytes, expected {expected}")]
    WrongLength {
        /// The byte length the caller required.
        expected: usize,
        /// The byte length the input actually decodes to.
        len: usize,
    },
}

/// Encodes bytes as an uppercase hexadecimal string.
///
/// The output is always `2 * input.len()` characters from `0-9A-F`,
/// with no separators and no `0x` prefix.
///
/// ```rust
/// assert_eq!(verity_hex::encode([0x00, 0xFF, 0x1A]), "00FF1A");
/// assert_eq!(verity_hex::encode([]), "");
/// ```
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    // Per-byte table lookup. `format!("{byte:02X}")` per byte reads
    // nicer but is markedly slower at scale.
    let bytes = bytes.as_ref();
    let mut out = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        out.push(char::from(HEX_TABLE[usize::from(byte >> 4)]));
        out.push(char::from(HEX_TABLE[usize::from(byte & 0x0F)]));
    }
    out
}

/// Decodes a hexadecimal string into bytes.
///
/// Both `0-9A-F` and `0-9a-f` digits are accepted. Separators,
/// whitespace, and a leading `0x` are not.
///
/// ```rust
/// assert_eq!(verity_hex::decode("00FF1A").unwrap(), [0x00, 0xFF, 0x1A]);
/// assert_eq!(verity_hex::decode("00ff1a").unwrap(), [0x00, 0xFF, 0x1A]);
/// assert_eq!(verity_hex::decode("").unwrap(), []);
/// ```
///
/// # Errors
/// [`HexError::OddLength`] if the input length is odd,
/// [`HexError::InvalidPair`] if any 2-character group contains a
/// character outside `0-9A-Fa-f`.
pub fn decode(text: &str) -> Result<Vec<u8>, HexError> {
    let len = text.len();
    if len % 2 != 0 {
        return Err(HexError::OddLength { len });
    }

    let mut bytes = Vec::with_capacity(len / 2);
    for (i, pair) in text.as_bytes().chunks_exact(2).enumerate() {
        let (Some(hi), Some(lo)) = (nibble(pair[0]), nibble(pair[1])) else {
            return Err(HexError::InvalidPair {
                pair: String::from_utf8_lossy(pair).into_owned(),
                offset: i * 2,
            });
        };
        bytes.push((hi << 4) | lo);
    }

    Ok(bytes)
}

/// Value of a single hex digit, [`None`] if the byte is not one.
const fn nibble(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}
