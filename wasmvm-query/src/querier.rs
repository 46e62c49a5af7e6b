//! The querier contract between a guest and its host.
//!
//! Queries are synchronous: the guest is blocked until the response is
//! returned. They are read-only and deterministic, so nothing else runs on
//! the caller's state in the meantime.
use cosmwasm_std::Binary;
use tracing::{debug, warn};

use crate::{
    error::{QueryError, SystemError},
    query::QueryRequest,
    result::{QuerierResult, QueryResult},
};

/// Something that answers queries from the environment a guest runs in,
/// typically other contracts or modules of a Cosmos chain.
pub trait Querier {
    /// Performs the query and returns the encoded response.
    ///
    /// `gas_limit` is measured in CosmWasm gas and keeps the query from
    /// consuming more than the caller has left.
    fn query(&mut self, request: &QueryRequest, gas_limit: u64) -> Result<Binary, QueryError>;

    /// Gas consumed by this querier over its entire lifetime.
    ///
    /// What the absolute value includes is implementation defined. Callers
    /// read it before and after a query and use the difference.
    fn gas_consumed(&self) -> u64;
}

impl<Q: Querier + ?Sized> Querier for &mut Q {
    fn query(&mut self, request: &QueryRequest, gas_limit: u64) -> Result<Binary, QueryError> {
        (**self).query(request, gas_limit)
    }

    fn gas_consumed(&self) -> u64 {
        (**self).gas_consumed()
    }
}

impl<Q: Querier + ?Sized> Querier for Box<Q> {
    fn query(&mut self, request: &QueryRequest, gas_limit: u64) -> Result<Binary, QueryError> {
        (**self).query(request, gas_limit)
    }

    fn gas_consumed(&self) -> u64 {
        (**self).gas_consumed()
    }
}

/// Decodes raw request bytes, runs the query and wraps the outcome.
///
/// Undecodable bytes short-circuit to [`SystemError::InvalidRequest`], the
/// only error that echoes the original request back.
pub fn query_raw<Q: Querier + ?Sized>(
    querier: &mut Q,
    request: &[u8],
    gas_limit: u64,
) -> QuerierResult {
    let request = match QueryRequest::from_slice(request) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "rejecting undecodable query request");
            return QuerierResult::Err(e.into());
        }
    };

    debug!(kind = %request.kind(), gas_limit, "dispatching query");
    to_querier_result(querier.query(&request, gas_limit))
}

/// Classifies a responder outcome into the two-level envelope.
///
/// System errors and gas exhaustion go to the outer error branch, every other
/// failure becomes the message of the inner error branch.
pub fn to_querier_result(result: Result<Binary, QueryError>) -> QuerierResult {
    match result {
        Ok(data) => QuerierResult::Ok(QueryResult::Ok(data)),
        Err(QueryError::System(e)) => QuerierResult::Err(e),
        Err(QueryError::OutOfGas(e)) => QuerierResult::Err(SystemError::from(e)),
        Err(e @ (QueryError::Failed(_) | QueryError::Other(_))) => {
            QuerierResult::Ok(QueryResult::Err(e.to_string()))
        }
    }
}
