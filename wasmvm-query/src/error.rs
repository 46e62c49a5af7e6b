//! Error definitions for the query protocol.
//!
//! Three failure tiers are kept apart:
//!
//! - [`SystemError`] is serialized into the outer envelope. It covers
//!   undecodable requests, unsupported queries, unknown contracts and gas
//!   exhaustion.
//! - A business failure of the queried module travels as the message of
//!   [`QueryResult::Err`](crate::result::QueryResult::Err).
//! - [`QueryError`] is the local failure channel of a responder. It is never
//!   serialized itself; [`to_querier_result`](crate::querier::to_querier_result)
//!   classifies it into one of the two tiers above.
use cosmwasm_std::Binary;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gas::OutOfGas;

/// Failure detected by the querying infrastructure rather than the queried
/// module. Exactly one variant per instance, encoded as a single key object.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemError {
    /// The request bytes could not be decoded. Carries the original bytes.
    #[error("Cannot parse request: {error} in: {}", String::from_utf8_lossy(.request))]
    InvalidRequest { error: String, request: Binary },
    #[error("Cannot parse response: {error} in: {}", String::from_utf8_lossy(.response))]
    InvalidResponse { error: String, response: Binary },
    #[error("No such contract: {addr}")]
    NoSuchContract { addr: String },
    #[error("No such code: {code_id}")]
    NoSuchCode { code_id: u64 },
    #[error("Unknown system error")]
    Unknown {},
    /// The host does not implement this query.
    #[error("Unsupported query type: {kind}")]
    UnsupportedRequest { kind: String },
    #[error("Query ran out of gas in {descriptor} (limit {limit})")]
    OutOfGas { descriptor: String, limit: u64 },
}

impl From<DecodeError> for SystemError {
    fn from(DecodeError { message, request }: DecodeError) -> Self {
        Self::InvalidRequest {
            error: message,
            request,
        }
    }
}

impl From<OutOfGas> for SystemError {
    fn from(OutOfGas { descriptor, limit }: OutOfGas) -> Self {
        Self::OutOfGas { descriptor, limit }
    }
}

/// Request bytes that do not decode into a [`QueryRequest`](crate::query::QueryRequest).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DecodeError {
    pub message: String,
    pub request: Binary,
}

impl DecodeError {
    pub fn new(message: impl Into<String>, request: &[u8]) -> Self {
        Self {
            message: message.into(),
            request: Binary::from(request),
        }
    }
}

/// Failure returned by a responder while answering a query.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Infrastructure failure, reported in the outer envelope.
    #[error(transparent)]
    System(#[from] SystemError),
    /// Gas limit exhausted, reported as [`SystemError::OutOfGas`].
    #[error(transparent)]
    OutOfGas(#[from] OutOfGas),
    /// The query was understood but the answer is negative, e.g. an unknown
    /// validator. Reported in the inner envelope.
    #[error("{0}")]
    Failed(String),
    /// Any other responder failure, reported in the inner envelope.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl QueryError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    pub fn unsupported(kind: impl Into<String>) -> Self {
        Self::System(SystemError::UnsupportedRequest { kind: kind.into() })
    }

    pub fn no_such_contract(addr: impl Into<String>) -> Self {
        Self::System(SystemError::NoSuchContract { addr: addr.into() })
    }
}
