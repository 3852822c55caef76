//! Hexadecimal wrappers for byte vectors.

use std::ops::{Deref, DerefMut};

use crate::{decode, HexError};

/// Wrapper type for a byte vector that (de)serializes from/to hexadecimal strings.
///
/// The variable-length counterpart of [`Hex`](crate::Hex).
///
/// ```rust
/// # use verity_hex::HexVec;
/// let bytes = HexVec(vec![0x00, 0xFF, 0x1A]);
///
/// let to_string = serde_json::to_string(&bytes).unwrap();
/// assert_eq!(to_string, r#""00FF1A""#);
///
/// let from_str = serde_json::from_str::<HexVec>(r#""00ff1a""#).unwrap();
/// assert_eq!(bytes, from_str);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct HexVec(pub Vec<u8>);

#[cfg(feature = "serde")]
impl serde::Serialize for HexVec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&crate::encode(&self.0))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for HexVec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Self::try_from(text.as_ref()).map_err(serde::de::Error::custom)
    }
}

impl Deref for HexVec {
    type Target = Vec<u8>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for HexVec {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl AsRef<[u8]> for HexVec {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<HexVec> for Vec<u8> {
    fn from(hex: HexVec) -> Self {
        hex.0
    }
}

impl From<Vec<u8>> for HexVec {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl TryFrom<String> for HexVec {
    type Error = HexError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl TryFrom<&str> for HexVec {
    type Error = HexError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        decode(value).map(Self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty() {
        let empty = HexVec(Vec::new());

        let to_string = serde_json::to_string(&empty).unwrap();
        assert_eq!(to_string, r#""""#);

        let from_str = serde_json::from_str::<HexVec>(r#""""#).unwrap();
        assert_eq!(empty, from_str);
    }

    #[test]
    fn rejects_odd_length() {
        assert!(serde_json::from_str::<HexVec>(r#""ABC""#).is_err());
    }
}
