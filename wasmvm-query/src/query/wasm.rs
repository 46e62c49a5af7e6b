use cosmwasm_std::Binary;
use serde::{de, ser::SerializeTuple, Deserialize, Deserializer, Serialize, Serializer};
use serde_with::{serde_as, DefaultOnNull};

use crate::types::Checksum;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WasmQuery {
    /// Sends a JSON message to another contract's `query` entry point. The
    /// response is whatever raw bytes the contract returns.
    Smart(SmartQuery),
    /// Loads a single key from another contract's storage. The response is
    /// the raw value, empty when the key is not set.
    Raw(RawQuery),
    ContractInfo(ContractInfoQuery),
    CodeInfo(CodeInfoQuery),
    /// Ordered scan over a contract's storage. Returns [`RawRangeResponse`].
    RawRange(RawRangeQuery),
}

impl WasmQuery {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Smart(_) => "smart",
            Self::Raw(_) => "raw",
            Self::ContractInfo(_) => "contract_info",
            Self::CodeInfo(_) => "code_info",
            Self::RawRange(_) => "raw_range",
        }
    }

    /// Address of the contract this query targets, if any.
    pub fn contract_addr(&self) -> Option<&str> {
        match self {
            Self::Smart(SmartQuery { contract_addr, .. })
            | Self::Raw(RawQuery { contract_addr, .. })
            | Self::ContractInfo(ContractInfoQuery { contract_addr })
            | Self::RawRange(RawRangeQuery { contract_addr, .. }) => Some(contract_addr),
            Self::CodeInfo(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmartQuery {
    /// Bech32 address of the contract.
    pub contract_addr: String,
    pub msg: Binary,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuery {
    /// Bech32 address of the contract.
    pub contract_addr: String,
    pub key: Binary,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractInfoQuery {
    /// Bech32 address of the contract.
    pub contract_addr: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractInfoResponse {
    pub code_id: u64,
    pub creator: String,
    /// Account allowed to migrate the contract, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<String>,
    pub pinned: bool,
    /// Set when the contract is IBC enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ibc_port: Option<String>,
    /// Set when the contract is IBC2 enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ibc2_port: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeInfoQuery {
    pub code_id: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeInfoResponse {
    pub code_id: u64,
    pub creator: String,
    pub checksum: Checksum,
}

/// Iteration order of a range scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Order {
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

/// Scan over the raw storage of a contract.
///
/// If both bounds are set and `start >= end` the range is empty, no matter
/// the order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRangeQuery {
    pub contract_addr: String,
    /// Inclusive lower bound. Unbounded when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Binary>,
    /// Exclusive upper bound. Unbounded when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Binary>,
    /// Maximum number of entries in one page. Keep it small enough for the
    /// full JSON response to fit the guest's deserialization limits.
    pub limit: u16,
    pub order: Order,
}

impl RawRangeQuery {
    /// Request for the page following one that returned `next_key`, keeping
    /// bounds and order.
    ///
    /// Ascending scans resume at `start = next_key`. Descending scans move the
    /// exclusive `end` to the immediate successor of `next_key` so the key is
    /// still included.
    pub fn next_page(&self, next_key: &Binary) -> Self {
        let mut next = self.clone();
        match self.order {
            Order::Ascending => next.start = Some(next_key.clone()),
            Order::Descending => {
                let mut end = next_key.to_vec();
                end.push(0);
                next.end = Some(Binary::new(end));
            }
        }
        next
    }

    /// `true` when the bounds describe an empty range.
    pub fn is_empty_range(&self) -> bool {
        match (&self.start, &self.end) {
            (Some(start), Some(end)) => start.as_slice() >= end.as_slice(),
            _ => false,
        }
    }
}

/// A key/value pair. Encoded as the two element array `[key, value]` rather
/// than an object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRangeEntry {
    pub key: Binary,
    pub value: Binary,
}

impl RawRangeEntry {
    pub fn new(key: impl Into<Binary>, value: impl Into<Binary>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Serialize for RawRangeEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.key)?;
        tuple.serialize_element(&self.value)?;
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for RawRangeEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut pair = Vec::<Binary>::deserialize(deserializer)?;
        if pair.len() != 2 {
            return Err(de::Error::custom(format!(
                "invalid raw range entry: expected array of length 2, got {}",
                pair.len()
            )));
        }
        let value = pair.pop().unwrap_or_default();
        let key = pair.pop().unwrap_or_default();
        Ok(Self { key, value })
    }
}

#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRangeResponse {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub data: Vec<RawRangeEntry>,
    /// `None` when there are no more entries within the range. Encoded as
    /// `null`.
    #[serde(default)]
    pub next_key: Option<Binary>,
}
