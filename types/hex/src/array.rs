//! Hexadecimal wrappers for arrays.

use std::{
    borrow::Borrow,
    ops::{Deref, DerefMut},
};

use crate::{decode, HexError};

/// Wrapper type for a byte array that (de)serializes from/to hexadecimal strings.
///
/// The serialized form is uppercase, like [`encode`](crate::encode);
/// deserialization is case-insensitive, like [`decode`].
///
/// ```rust
/// # use verity_hex::Hex;
/// let hash = [1; 32];
/// let hex_bytes = Hex::<32>(hash);
/// let expected_json = r#""0101010101010101010101010101010101010101010101010101010101010101""#;
///
/// let to_string = serde_json::to_string(&hex_bytes).unwrap();
/// assert_eq!(to_string, expected_json);
///
/// let from_str = serde_json::from_str::<Hex<32>>(expected_json).unwrap();
/// assert_eq!(hex_bytes, from_str);
///
/// //------
///
/// let vec = vec![hex_bytes; 2];
/// let expected_json = r#"["0101010101010101010101010101010101010101010101010101010101010101","0101010101010101010101010101010101010101010101010101010101010101"]"#;
///
/// let to_string = serde_json::to_string(&vec).unwrap();
/// assert_eq!(to_string, expected_json);
///
/// let from_str = serde_json::from_str::<Vec<Hex<32>>>(expected_json).unwrap();
/// assert_eq!(vec, from_str);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Hex<const N: usize>(pub [u8; N]);

impl<const N: usize> Hex<N> {
    /// Returns `true` if the inner array is zeroed.
    ///
    /// ```rust
    /// # use verity_hex::Hex;
    /// assert!(Hex([0; 32]).is_zeroed());
    /// assert!(!Hex([1; 32]).is_zeroed());
    /// ```
    pub fn is_zeroed(&self) -> bool {
        *self == Self([0; N])
    }
}

#[cfg(feature = "serde")]
impl<const N: usize> serde::Serialize for Hex<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&crate::encode(self.0))
    }
}

#[cfg(feature = "serde")]
impl<'de, const N: usize> serde::Deserialize<'de> for Hex<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Self::try_from(text.as_ref()).map_err(serde::de::Error::custom)
    }
}

// Default is not implemented for arrays >32, so we must do it manually.
impl<const N: usize> Default for Hex<N> {
    fn default() -> Self {
        Self([0; N])
    }
}

impl<const N: usize> Deref for Hex<N> {
    type Target = [u8; N];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for Hex<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> Borrow<[u8; N]> for Hex<N> {
    fn borrow(&self) -> &[u8; N] {
        &self.0
    }
}

impl<const N: usize> AsRef<[u8; N]> for Hex<N> {
    fn as_ref(&self) -> &[u8; N] {
        &self.0
    }
}

impl<const N: usize> From<Hex<N>> for [u8; N] {
    fn from(hex: Hex<N>) -> Self {
        hex.0
    }
}

impl<const N: usize> From<[u8; N]> for Hex<N> {
    fn from(value: [u8; N]) -> Self {
        Self(value)
    }
}

impl<const N: usize> TryFrom<String> for Hex<N> {
    type Error = HexError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl<const N: usize> TryFrom<&str> for Hex<N> {
    type Error = HexError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let vec = decode(value)?;
        match <[u8; N]>::try_from(vec) {
            Ok(array) => Ok(Self(array)),
            Err(vec) => Err(HexError::WrongLength {
                expected: N,
                len: vec.len(),
            }),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn wrong_length() {
        assert_eq!(
            Hex::<4>::try_from("0011"),
            Err(HexError::WrongLength { expected: 4, len: 2 })
        );
        assert_eq!(Hex::<2>::try_from("0011"), Ok(Hex([0x00, 0x11])));
    }

    #[test]
    fn serde_is_uppercase_out_any_case_in() {
        let bytes = Hex::<3>([0x00, 0xFF, 0x1A]);

        let to_string = serde_json::to_string(&bytes).unwrap();
        assert_eq!(to_string, r#""00FF1A""#);

        let from_str = serde_json::from_str::<Hex<3>>(r#""00ff1a""#).unwrap();
        assert_eq!(bytes, from_str);
    }

    #[test]
    fn serde_rejects_bad_input() {
        assert!(serde_json::from_str::<Hex<3>>(r#""00FF1""#).is_err());
        assert!(serde_json::from_str::<Hex<3>>(r#""00FF1G""#).is_err());
        assert!(serde_json::from_str::<Hex<3>>(r#""00FF""#).is_err());
    }
}
