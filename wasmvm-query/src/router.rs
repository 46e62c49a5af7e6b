//! Dispatcher routing decoded requests to host responders.
//!
//! The host registers one responder per category. Each responder trait has a
//! method per operation returning the paired response type. Methods default
//! to [`SystemError::UnsupportedRequest`] so a host only implements what it
//! supports, and a category without a registered responder is unsupported as
//! a whole.
//!
//! ```
//! use wasmvm_query::{
//!     params::QuerierParams, querier::Querier, router::QueryRouter, testing::MockBank,
//! };
//!
//! let mut router = QueryRouter::new(QuerierParams::default()).with_bank(MockBank::default());
//! let before = router.gas_consumed();
//! let result = router.dispatch(
//!     br#"{"bank":{"balance":{"address":"addr1","denom":"utoken"}}}"#,
//!     1_000_000,
//! );
//! assert!(matches!(result, wasmvm_query::result::QuerierResult::Ok(_)));
//! assert!(router.gas_consumed() >= before);
//! ```
use std::fmt;

use cosmwasm_std::Binary;
use serde::Serialize;
use tracing::{debug, error};

use crate::{
    error::{QueryError, SystemError},
    gas::GasMeter,
    params::QuerierParams,
    querier::{query_raw, Querier},
    query::*,
    result::QuerierResult,
    to_json_binary,
};

pub trait BankResponder {
    fn supply(&self, _query: &SupplyQuery, _gas: &mut GasMeter) -> Result<SupplyResponse, QueryError> {
        Err(QueryError::unsupported("bank/supply"))
    }

    fn balance(&self, _query: &BalanceQuery, _gas: &mut GasMeter) -> Result<BalanceResponse, QueryError> {
        Err(QueryError::unsupported("bank/balance"))
    }

    fn all_balances(
        &self,
        _query: &AllBalancesQuery,
        _gas: &mut GasMeter,
    ) -> Result<AllBalancesResponse, QueryError> {
        Err(QueryError::unsupported("bank/all_balances"))
    }

    fn denom_metadata(
        &self,
        _query: &DenomMetadataQuery,
        _gas: &mut GasMeter,
    ) -> Result<DenomMetadataResponse, QueryError> {
        Err(QueryError::unsupported("bank/denom_metadata"))
    }

    fn all_denom_metadata(
        &self,
        _query: &AllDenomMetadataQuery,
        _gas: &mut GasMeter,
    ) -> Result<AllDenomMetadataResponse, QueryError> {
        Err(QueryError::unsupported("bank/all_denom_metadata"))
    }
}

pub trait IbcResponder {
    fn port_id(&self, _query: &PortIdQuery, _gas: &mut GasMeter) -> Result<PortIdResponse, QueryError> {
        Err(QueryError::unsupported("ibc/port_id"))
    }

    fn list_channels(
        &self,
        _query: &ListChannelsQuery,
        _gas: &mut GasMeter,
    ) -> Result<ListChannelsResponse, QueryError> {
        Err(QueryError::unsupported("ibc/list_channels"))
    }

    fn channel(&self, _query: &ChannelQuery, _gas: &mut GasMeter) -> Result<ChannelResponse, QueryError> {
        Err(QueryError::unsupported("ibc/channel"))
    }
}

pub trait StakingResponder {
    fn all_validators(
        &self,
        _query: &AllValidatorsQuery,
        _gas: &mut GasMeter,
    ) -> Result<AllValidatorsResponse, QueryError> {
        Err(QueryError::unsupported("staking/all_validators"))
    }

    fn validator(&self, _query: &ValidatorQuery, _gas: &mut GasMeter) -> Result<ValidatorResponse, QueryError> {
        Err(QueryError::unsupported("staking/validator"))
    }

    fn all_delegations(
        &self,
        _query: &AllDelegationsQuery,
        _gas: &mut GasMeter,
    ) -> Result<AllDelegationsResponse, QueryError> {
        Err(QueryError::unsupported("staking/all_delegations"))
    }

    fn delegation(
        &self,
        _query: &DelegationQuery,
        _gas: &mut GasMeter,
    ) -> Result<DelegationResponse, QueryError> {
        Err(QueryError::unsupported("staking/delegation"))
    }

    fn bonded_denom(
        &self,
        _query: &BondedDenomQuery,
        _gas: &mut GasMeter,
    ) -> Result<BondedDenomResponse, QueryError> {
        Err(QueryError::unsupported("staking/bonded_denom"))
    }
}

pub trait DistributionResponder {
    fn delegator_withdraw_address(
        &self,
        _query: &DelegatorWithdrawAddressQuery,
        _gas: &mut GasMeter,
    ) -> Result<DelegatorWithdrawAddressResponse, QueryError> {
        Err(QueryError::unsupported("distribution/delegator_withdraw_address"))
    }

    fn delegation_rewards(
        &self,
        _query: &DelegationRewardsQuery,
        _gas: &mut GasMeter,
    ) -> Result<DelegationRewardsResponse, QueryError> {
        Err(QueryError::unsupported("distribution/delegation_rewards"))
    }

    fn delegation_total_rewards(
        &self,
        _query: &DelegationTotalRewardsQuery,
        _gas: &mut GasMeter,
    ) -> Result<DelegationTotalRewardsResponse, QueryError> {
        Err(QueryError::unsupported("distribution/delegation_total_rewards"))
    }

    fn delegator_validators(
        &self,
        _query: &DelegatorValidatorsQuery,
        _gas: &mut GasMeter,
    ) -> Result<DelegatorValidatorsResponse, QueryError> {
        Err(QueryError::unsupported("distribution/delegator_validators"))
    }
}

/// Protobuf queries routed by path. Responses are opaque bytes.
pub trait GrpcResponder {
    fn stargate(&self, _query: &StargateQuery, _gas: &mut GasMeter) -> Result<Binary, QueryError> {
        Err(QueryError::unsupported("stargate"))
    }

    fn grpc(&self, _query: &GrpcQuery, _gas: &mut GasMeter) -> Result<Binary, QueryError> {
        Err(QueryError::unsupported("grpc"))
    }
}

/// Chain specific queries. The request is the raw JSON under `custom`.
pub trait CustomResponder {
    fn custom(&self, query: &serde_json::Value, gas: &mut GasMeter) -> Result<Binary, QueryError>;
}

impl<F> CustomResponder for F
where
    F: Fn(&serde_json::Value, &mut GasMeter) -> Result<Binary, QueryError>,
{
    fn custom(&self, query: &serde_json::Value, gas: &mut GasMeter) -> Result<Binary, QueryError> {
        self(query, gas)
    }
}

/// Queries against other contracts. Smart and raw queries return the
/// contract's bytes unchanged.
pub trait WasmResponder {
    fn smart(&self, _query: &SmartQuery, _gas: &mut GasMeter) -> Result<Binary, QueryError> {
        Err(QueryError::unsupported("wasm/smart"))
    }

    fn raw(&self, _query: &RawQuery, _gas: &mut GasMeter) -> Result<Binary, QueryError> {
        Err(QueryError::unsupported("wasm/raw"))
    }

    fn contract_info(
        &self,
        _query: &ContractInfoQuery,
        _gas: &mut GasMeter,
    ) -> Result<ContractInfoResponse, QueryError> {
        Err(QueryError::unsupported("wasm/contract_info"))
    }

    fn code_info(&self, _query: &CodeInfoQuery, _gas: &mut GasMeter) -> Result<CodeInfoResponse, QueryError> {
        Err(QueryError::unsupported("wasm/code_info"))
    }

    fn raw_range(
        &self,
        _query: &RawRangeQuery,
        _gas: &mut GasMeter,
    ) -> Result<RawRangeResponse, QueryError> {
        Err(QueryError::unsupported("wasm/raw_range"))
    }
}

/// [`Querier`] that meters each dispatch and routes it to the registered
/// responders.
///
/// Dispatching takes `&mut self`, so one router serves one query at a time
/// and [`Querier::gas_consumed`] read around a dispatch brackets exactly that
/// dispatch.
pub struct QueryRouter {
    params: QuerierParams,
    bank: Option<Box<dyn BankResponder>>,
    custom: Option<Box<dyn CustomResponder>>,
    ibc: Option<Box<dyn IbcResponder>>,
    staking: Option<Box<dyn StakingResponder>>,
    distribution: Option<Box<dyn DistributionResponder>>,
    grpc: Option<Box<dyn GrpcResponder>>,
    wasm: Option<Box<dyn WasmResponder>>,
    gas_consumed: u64,
}

impl fmt::Debug for QueryRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryRouter")
            .field("params", &self.params)
            .field("bank", &self.bank.is_some())
            .field("custom", &self.custom.is_some())
            .field("ibc", &self.ibc.is_some())
            .field("staking", &self.staking.is_some())
            .field("distribution", &self.distribution.is_some())
            .field("grpc", &self.grpc.is_some())
            .field("wasm", &self.wasm.is_some())
            .field("gas_consumed", &self.gas_consumed)
            .finish()
    }
}

impl QueryRouter {
    pub fn new(params: QuerierParams) -> Self {
        Self {
            params,
            bank: None,
            custom: None,
            ibc: None,
            staking: None,
            distribution: None,
            grpc: None,
            wasm: None,
            gas_consumed: 0,
        }
    }

    pub fn params(&self) -> &QuerierParams {
        &self.params
    }

    pub fn with_bank(mut self, responder: impl BankResponder + 'static) -> Self {
        self.bank = Some(Box::new(responder));
        self
    }

    pub fn with_custom(mut self, responder: impl CustomResponder + 'static) -> Self {
        self.custom = Some(Box::new(responder));
        self
    }

    pub fn with_ibc(mut self, responder: impl IbcResponder + 'static) -> Self {
        self.ibc = Some(Box::new(responder));
        self
    }

    pub fn with_staking(mut self, responder: impl StakingResponder + 'static) -> Self {
        self.staking = Some(Box::new(responder));
        self
    }

    pub fn with_distribution(mut self, responder: impl DistributionResponder + 'static) -> Self {
        self.distribution = Some(Box::new(responder));
        self
    }

    pub fn with_grpc(mut self, responder: impl GrpcResponder + 'static) -> Self {
        self.grpc = Some(Box::new(responder));
        self
    }

    pub fn with_wasm(mut self, responder: impl WasmResponder + 'static) -> Self {
        self.wasm = Some(Box::new(responder));
        self
    }

    /// Decodes `request`, answers it within `gas_limit` and returns the
    /// envelope for the guest.
    pub fn dispatch(&mut self, request: &[u8], gas_limit: u64) -> QuerierResult {
        query_raw(self, request, gas_limit)
    }

    fn route(&self, request: &QueryRequest, gas: &mut GasMeter) -> Result<Binary, QueryError> {
        match request {
            QueryRequest::Bank(query) => {
                let bank = responder(&self.bank, request)?;
                match query {
                    BankQuery::Supply(q) => encode(&bank.supply(q, gas)?),
                    BankQuery::Balance(q) => encode(&bank.balance(q, gas)?),
                    BankQuery::AllBalances(q) => encode(&bank.all_balances(q, gas)?),
                    BankQuery::DenomMetadata(q) => encode(&bank.denom_metadata(q, gas)?),
                    BankQuery::AllDenomMetadata(q) => encode(&bank.all_denom_metadata(q, gas)?),
                }
            }
            QueryRequest::Custom(query) => responder(&self.custom, request)?.custom(query, gas),
            QueryRequest::Ibc(query) => {
                let ibc = responder(&self.ibc, request)?;
                match query {
                    IbcQuery::PortId(q) => encode(&ibc.port_id(q, gas)?),
                    IbcQuery::ListChannels(q) => encode(&ibc.list_channels(q, gas)?),
                    IbcQuery::Channel(q) => encode(&ibc.channel(q, gas)?),
                }
            }
            QueryRequest::Staking(query) => {
                let staking = responder(&self.staking, request)?;
                match query {
                    StakingQuery::AllValidators(q) => encode(&staking.all_validators(q, gas)?),
                    StakingQuery::Validator(q) => encode(&staking.validator(q, gas)?),
                    StakingQuery::AllDelegations(q) => encode(&staking.all_delegations(q, gas)?),
                    StakingQuery::Delegation(q) => encode(&staking.delegation(q, gas)?),
                    StakingQuery::BondedDenom(q) => encode(&staking.bonded_denom(q, gas)?),
                }
            }
            QueryRequest::Distribution(query) => {
                let distribution = responder(&self.distribution, request)?;
                match query {
                    DistributionQuery::DelegatorWithdrawAddress(q) => {
                        encode(&distribution.delegator_withdraw_address(q, gas)?)
                    }
                    DistributionQuery::DelegationRewards(q) => {
                        encode(&distribution.delegation_rewards(q, gas)?)
                    }
                    DistributionQuery::DelegationTotalRewards(q) => {
                        encode(&distribution.delegation_total_rewards(q, gas)?)
                    }
                    DistributionQuery::DelegatorValidators(q) => {
                        encode(&distribution.delegator_validators(q, gas)?)
                    }
                }
            }
            QueryRequest::Stargate(query) => {
                self.check_path(&query.path)?;
                responder(&self.grpc, request)?.stargate(query, gas)
            }
            QueryRequest::Grpc(query) => {
                self.check_path(&query.path)?;
                responder(&self.grpc, request)?.grpc(query, gas)
            }
            QueryRequest::Wasm(query) => {
                let wasm = responder(&self.wasm, request)?;
                match query {
                    WasmQuery::Smart(q) => wasm.smart(q, gas),
                    WasmQuery::Raw(q) => wasm.raw(q, gas),
                    WasmQuery::ContractInfo(q) => encode(&wasm.contract_info(q, gas)?),
                    WasmQuery::CodeInfo(q) => encode(&wasm.code_info(q, gas)?),
                    WasmQuery::RawRange(q) => encode(&wasm.raw_range(q, gas)?),
                }
            }
        }
    }

    fn check_path(&self, path: &str) -> Result<(), QueryError> {
        if self.params.is_path_accepted(path) {
            Ok(())
        } else {
            Err(QueryError::unsupported(format!(
                "'{path}' path is not allowed from the contract"
            )))
        }
    }
}

impl Querier for QueryRouter {
    fn query(&mut self, request: &QueryRequest, gas_limit: u64) -> Result<Binary, QueryError> {
        let mut gas = GasMeter::new(gas_limit);
        let result = gas
            .consume(self.params.query_base_gas, "query base")
            .map_err(QueryError::from)
            .and_then(|()| self.route(request, &mut gas));

        self.gas_consumed = self.gas_consumed.saturating_add(gas.consumed());
        debug!(
            kind = %request.kind(),
            gas_used = gas.consumed(),
            ok = result.is_ok(),
            "query answered"
        );
        result
    }

    fn gas_consumed(&self) -> u64 {
        self.gas_consumed
    }
}

fn responder<'a, T: ?Sized>(
    slot: &'a Option<Box<T>>,
    request: &QueryRequest,
) -> Result<&'a T, QueryError> {
    slot.as_deref()
        .ok_or_else(|| QueryError::unsupported(request.category()))
}

fn encode<T: Serialize>(response: &T) -> Result<Binary, QueryError> {
    to_json_binary(response).map_err(|e| {
        error!(error = %e, "failed to encode query response");
        QueryError::System(SystemError::Unknown {})
    })
}
