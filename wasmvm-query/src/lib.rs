//! Query protocol between a sandboxed CosmWasm contract and its host.
//!
//! A contract sends a JSON encoded [`QueryRequest`](query::QueryRequest) and
//! is blocked until the host answers with a two-level result:
//!
//! - [`QuerierResult`](result::QuerierResult) reports whether the querying
//!   infrastructure worked (request decoded, query supported, gas sufficient).
//! - [`QueryResult`](result::QueryResult) reports whether the queried module
//!   answered successfully.
//!
//! The wire format matches the Go [`wasmvm`](https://github.com/CosmWasm/wasmvm)
//! `types` package and `cosmwasm-std`. Hosts plug their modules into a
//! [`QueryRouter`](router::QueryRouter) by implementing the responder traits
//! in [`router`]; the [`testing`] module provides in-memory responders.

pub mod error;
pub mod gas;
pub mod params;
pub mod querier;
pub mod query;
pub mod range;
pub mod result;
pub mod router;
pub mod testing;
pub mod types;

use cosmwasm_std::Binary;
use serde::{de::DeserializeOwned, Serialize};

pub use error::{DecodeError, QueryError, SystemError};
pub use querier::{query_raw, to_querier_result, Querier};
pub use query::QueryRequest;
pub use result::{QuerierResult, QueryResult};
pub use router::QueryRouter;

/// Encodes a response payload the way responders return it.
pub fn to_json_binary<T: Serialize + ?Sized>(value: &T) -> Result<Binary, serde_json::Error> {
    serde_json::to_vec(value).map(Binary::new)
}

/// Decodes a response payload, e.g. the data of a successful [`QueryResult`].
pub fn from_json<T: DeserializeOwned>(data: impl AsRef<[u8]>) -> Result<T, serde_json::Error> {
    serde_json::from_slice(data.as_ref())
}
