//! The two-level result envelope returned to the guest.
//!
//! [`QuerierResult`] says whether the querying infrastructure worked. When it
//! did, the inner [`QueryResult`] says whether the queried module answered
//! successfully.
//!
//! ```json
//! {"ok":{"ok":"eyJhbW91bnQiOnt9fQ=="}}
//! {"ok":{"error":"validator not found"}}
//! {"error":{"unsupported_request":{"kind":"ibc"}}}
//! ```
use cosmwasm_std::Binary;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SystemError;

/// Outcome of the queried operation itself.
///
/// Error messages are never empty on the wire. A value with neither data nor
/// message, including `Err` with an empty message, is encoded as the empty
/// success `{"ok":""}`, and `{}` decodes to empty success.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryResult {
    Ok(Binary),
    Err(String),
}

impl Default for QueryResult {
    fn default() -> Self {
        Self::Ok(Binary::default())
    }
}

impl QueryResult {
    pub fn is_ok(&self) -> bool {
        match self {
            Self::Ok(_) => true,
            Self::Err(message) => message.is_empty(),
        }
    }

    pub fn into_result(self) -> Result<Binary, String> {
        match self {
            Self::Ok(data) => Ok(data),
            Self::Err(message) if message.is_empty() => Ok(Binary::default()),
            Self::Err(message) => Err(message),
        }
    }
}

impl From<Result<Binary, String>> for QueryResult {
    fn from(value: Result<Binary, String>) -> Self {
        match value {
            Ok(data) => Self::Ok(data),
            Err(message) => Self::Err(message),
        }
    }
}

impl From<QueryResult> for Result<Binary, String> {
    fn from(value: QueryResult) -> Self {
        value.into_result()
    }
}

// Sparse object form shared by encoding and decoding.
#[derive(Serialize, Deserialize)]
struct QueryResultRepr<'a> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ok: Option<std::borrow::Cow<'a, Binary>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl Serialize for QueryResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let repr = match self {
            Self::Err(message) if !message.is_empty() => QueryResultRepr {
                ok: None,
                error: Some(message.clone()),
            },
            Self::Ok(data) => QueryResultRepr {
                ok: Some(std::borrow::Cow::Borrowed(data)),
                error: None,
            },
            Self::Err(_) => QueryResultRepr {
                ok: Some(std::borrow::Cow::Owned(Binary::default())),
                error: None,
            },
        };
        repr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for QueryResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let QueryResultRepr { ok, error } = QueryResultRepr::deserialize(deserializer)?;
        let error = error.filter(|message| !message.is_empty());
        match (ok, error) {
            (Some(_), Some(_)) => Err(de::Error::custom(
                "query result must not contain both ok and error",
            )),
            (None, Some(message)) => Ok(Self::Err(message)),
            (ok, None) => Ok(Self::Ok(ok.map(|data| data.into_owned()).unwrap_or_default())),
        }
    }
}

/// Outcome of a dispatch as seen by the guest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuerierResult {
    Ok(QueryResult),
    #[serde(rename = "error")]
    Err(SystemError),
}

impl QuerierResult {
    pub fn ok(data: impl Into<Binary>) -> Self {
        Self::Ok(QueryResult::Ok(data.into()))
    }

    pub fn contract_err(message: impl Into<String>) -> Self {
        Self::Ok(QueryResult::Err(message.into()))
    }

    pub fn system_err(error: SystemError) -> Self {
        Self::Err(error)
    }

    pub fn to_vec(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

impl From<SystemError> for QuerierResult {
    fn from(error: SystemError) -> Self {
        Self::Err(error)
    }
}
