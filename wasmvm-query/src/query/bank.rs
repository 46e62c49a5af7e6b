use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use cosmwasm_std::Binary;

use crate::types::{Coin, DenomMetadata, PageRequest};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BankQuery {
    /// Total supply of a denomination. Returns [`SupplyResponse`].
    Supply(SupplyQuery),
    /// Balance of one account in one denomination. Returns [`BalanceResponse`].
    Balance(BalanceQuery),
    /// All balances of one account. Returns [`AllBalancesResponse`].
    AllBalances(AllBalancesQuery),
    DenomMetadata(DenomMetadataQuery),
    AllDenomMetadata(AllDenomMetadataQuery),
}

impl BankQuery {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Supply(_) => "supply",
            Self::Balance(_) => "balance",
            Self::AllBalances(_) => "all_balances",
            Self::DenomMetadata(_) => "denom_metadata",
            Self::AllDenomMetadata(_) => "all_denom_metadata",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyQuery {
    pub denom: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyResponse {
    pub amount: Coin,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceQuery {
    pub address: String,
    pub denom: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub amount: Coin,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllBalancesQuery {
    pub address: String,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllBalancesResponse {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub amount: Vec<Coin>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenomMetadataQuery {
    pub denom: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenomMetadataResponse {
    pub metadata: DenomMetadata,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllDenomMetadataQuery {
    /// Host default pagination is used when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageRequest>,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllDenomMetadataResponse {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub metadata: Vec<DenomMetadata>,
    /// Key to pass as `PageRequest::key` for the next page. Omitted when there
    /// are no more results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_key: Option<Binary>,
}
