//! SHA-256 checksum identifying stored contract code.
//!
//! On the wire the checksum is a lowercase hex string. It must always be
//! exactly 32 bytes, anything else is rejected while decoding.
use std::{fmt, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Magic number every WebAssembly module starts with (`\0asm`).
const WASM_MAGIC: [u8; 4] = [0x00, 0x61, 0x73, 0x6d];

#[derive(Debug, Error, PartialEq)]
pub enum ChecksumError {
    /// The provided wasm byte slice was empty.
    #[error("wasm bytes nil or empty")]
    EmptyWasm,
    /// The provided wasm blob was smaller than the 4 byte magic header.
    #[error("wasm bytes shorter than 4 bytes")]
    TooShort,
    /// The blob does not start with the expected `\0asm` magic number.
    #[error("wasm bytes do not start with Wasm magic number")]
    MissingMagic,
    #[error("checksum must be {} bytes, got {0}", Checksum::LEN)]
    InvalidLength(usize),
    #[error("invalid checksum hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Checksum([u8; Checksum::LEN]);

impl Checksum {
    pub const LEN: usize = 32;

    /// Computes the checksum of a wasm blob.
    ///
    /// The input must be non-empty, at least four bytes long and begin with
    /// the wasm magic number.
    pub fn generate(wasm: &[u8]) -> Result<Self, ChecksumError> {
        if wasm.is_empty() {
            return Err(ChecksumError::EmptyWasm);
        }
        if wasm.len() < WASM_MAGIC.len() {
            return Err(ChecksumError::TooShort);
        }
        if wasm[..WASM_MAGIC.len()] != WASM_MAGIC {
            return Err(ChecksumError::MissingMagic);
        }
        Ok(Self(Sha256::digest(wasm).into()))
    }

    pub fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; Checksum::LEN]> for Checksum {
    fn from(value: [u8; Checksum::LEN]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Checksum {
    type Error = ChecksumError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; Self::LEN] = value
            .try_into()
            .map_err(|_| ChecksumError::InvalidLength(value.len()))?;
        Ok(Self(bytes))
    }
}

impl FromStr for Checksum {
    type Err = ChecksumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s)?;
        Self::try_from(bytes.as_slice())
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Checksum({})", self.to_hex())
    }
}

impl Serialize for Checksum {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Checksum {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
