use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use hex::{FromHex, ToHex};
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::{decode_bytes, encode_bytes};
use crate::error::Base58Error;

/// A byte vector represented as a hex string in serialization.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct HexBytes(pub Vec<u8>);

impl Display for HexBytes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.encode_hex::<String>())
    }
}

impl Debug for HexBytes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "HexBytes({self})")
    }
}

impl FromStr for HexBytes {
    type Err = Base58Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(HexBytes(Vec::from_hex(s)?))
    }
}

impl<'de> Deserialize<'de> for HexBytes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(D::Error::custom)
    }
}

impl Serialize for HexBytes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// A byte vector represented as a CryptoNote Base58 string in serialization.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Base58Bytes(pub Vec<u8>);

impl Display for Base58Bytes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&encode_bytes(&self.0))
    }
}

impl Debug for Base58Bytes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Base58Bytes({self})")
    }
}

impl FromStr for Base58Bytes {
    type Err = Base58Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Base58Bytes(decode_bytes(s)?))
    }
}

impl<'de> Deserialize<'de> for Base58Bytes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = String::deserialize(deserializer)?;
        encoded.parse().map_err(D::Error::custom)
    }
}

impl Serialize for Base58Bytes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&encode_bytes(&self.0))
    }
}

impl From<HexBytes> for Base58Bytes {
    fn from(value: HexBytes) -> Self {
        Base58Bytes(value.0)
    }
}

impl From<Base58Bytes> for HexBytes {
    fn from(value: Base58Bytes) -> Self {
        HexBytes(value.0)
    }
}
