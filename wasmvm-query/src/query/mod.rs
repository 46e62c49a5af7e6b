//! The query request taxonomy.
//!
//! A [`QueryRequest`] is exactly one category, and each category is exactly
//! one operation. On the wire both levels are objects with a single key:
//!
//! ```json
//! {"bank":{"balance":{"address":"cosmos1...","denom":"uatom"}}}
//! ```
//!
//! Decoding rejects objects with no key, more than one key, a `null` branch
//! or an unknown branch, at every level. Responses are paired with requests
//! by name only (`BalanceQuery` → `BalanceResponse`).

pub mod bank;
pub mod distribution;
pub mod grpc;
pub mod ibc;
pub mod staking;
pub mod wasm;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::DecodeError;

pub use self::{
    bank::{
        AllBalancesQuery, AllBalancesResponse, AllDenomMetadataQuery, AllDenomMetadataResponse,
        BalanceQuery, BalanceResponse, BankQuery, DenomMetadataQuery, DenomMetadataResponse,
        SupplyQuery, SupplyResponse,
    },
    distribution::{
        DelegationRewardsQuery, DelegationRewardsResponse, DelegationTotalRewardsQuery,
        DelegationTotalRewardsResponse, DelegatorValidatorsQuery, DelegatorValidatorsResponse,
        DelegatorWithdrawAddressQuery, DelegatorWithdrawAddressResponse, DistributionQuery,
    },
    grpc::{GrpcQuery, StargateQuery},
    ibc::{
        ChannelQuery, ChannelResponse, IbcQuery, ListChannelsQuery, ListChannelsResponse,
        PortIdQuery, PortIdResponse,
    },
    staking::{
        AllDelegationsQuery, AllDelegationsResponse, AllValidatorsQuery, AllValidatorsResponse,
        BondedDenomQuery, BondedDenomResponse, DelegationQuery, DelegationResponse, StakingQuery,
        ValidatorQuery, ValidatorResponse,
    },
    wasm::{
        CodeInfoQuery, CodeInfoResponse, ContractInfoQuery, ContractInfoResponse, Order,
        RawQuery, RawRangeEntry, RawRangeQuery, RawRangeResponse, SmartQuery, WasmQuery,
    },
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryRequest {
    Bank(BankQuery),
    /// Chain specific query. The payload is passed to the host untouched but
    /// must not be `null`.
    Custom(#[serde(deserialize_with = "non_null_custom")] serde_json::Value),
    Ibc(IbcQuery),
    Staking(StakingQuery),
    Distribution(DistributionQuery),
    Stargate(StargateQuery),
    Grpc(GrpcQuery),
    Wasm(WasmQuery),
}

impl QueryRequest {
    /// Decodes a request sent by a guest. The error keeps the original bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        serde_json::from_slice(bytes).map_err(|e| DecodeError::new(e.to_string(), bytes))
    }

    pub fn to_vec(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    pub fn category(&self) -> &'static str {
        match self {
            Self::Bank(_) => "bank",
            Self::Custom(_) => "custom",
            Self::Ibc(_) => "ibc",
            Self::Staking(_) => "staking",
            Self::Distribution(_) => "distribution",
            Self::Stargate(_) => "stargate",
            Self::Grpc(_) => "grpc",
            Self::Wasm(_) => "wasm",
        }
    }

    /// Label of the form `category/operation`, e.g. `bank/balance`. Queries
    /// without an operation level are labelled by category only.
    pub fn kind(&self) -> String {
        let operation = match self {
            Self::Bank(query) => query.kind(),
            Self::Ibc(query) => query.kind(),
            Self::Staking(query) => query.kind(),
            Self::Distribution(query) => query.kind(),
            Self::Wasm(query) => query.kind(),
            Self::Custom(_) | Self::Stargate(_) | Self::Grpc(_) => {
                return self.category().to_owned()
            }
        };
        format!("{}/{operation}", self.category())
    }
}

// A `null` branch counts as an absent one, which leaves no branch set.
fn non_null_custom<'de, D: Deserializer<'de>>(deserializer: D) -> Result<serde_json::Value, D::Error> {
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Err(de::Error::custom("custom query must not be null")),
        value => Ok(value),
    }
}

impl From<BankQuery> for QueryRequest {
    fn from(query: BankQuery) -> Self {
        Self::Bank(query)
    }
}

impl From<IbcQuery> for QueryRequest {
    fn from(query: IbcQuery) -> Self {
        Self::Ibc(query)
    }
}

impl From<StakingQuery> for QueryRequest {
    fn from(query: StakingQuery) -> Self {
        Self::Staking(query)
    }
}

impl From<DistributionQuery> for QueryRequest {
    fn from(query: DistributionQuery) -> Self {
        Self::Distribution(query)
    }
}

impl From<StargateQuery> for QueryRequest {
    fn from(query: StargateQuery) -> Self {
        Self::Stargate(query)
    }
}

impl From<GrpcQuery> for QueryRequest {
    fn from(query: GrpcQuery) -> Self {
        Self::Grpc(query)
    }
}

impl From<WasmQuery> for QueryRequest {
    fn from(query: WasmQuery) -> Self {
        Self::Wasm(query)
    }
}
