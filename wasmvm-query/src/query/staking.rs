use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use crate::types::{Delegation, FullDelegation, Validator};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StakingQuery {
    AllValidators(AllValidatorsQuery),
    Validator(ValidatorQuery),
    AllDelegations(AllDelegationsQuery),
    Delegation(DelegationQuery),
    /// Denomination that can be bonded. Returns [`BondedDenomResponse`].
    BondedDenom(BondedDenomQuery),
}

impl StakingQuery {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AllValidators(_) => "all_validators",
            Self::Validator(_) => "validator",
            Self::AllDelegations(_) => "all_delegations",
            Self::Delegation(_) => "delegation",
            Self::BondedDenom(_) => "bonded_denom",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllValidatorsQuery {}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllValidatorsResponse {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub validators: Vec<Validator>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorQuery {
    /// Operator address, e.g. `cosmosvaloper1...`.
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorResponse {
    // Encoded as `null` when unset, never omitted.
    #[serde(default)]
    pub validator: Option<Validator>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllDelegationsQuery {
    pub delegator: String,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllDelegationsResponse {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub delegations: Vec<Delegation>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationQuery {
    pub delegator: String,
    pub validator: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delegation: Option<FullDelegation>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondedDenomQuery {}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondedDenomResponse {
    pub denom: String,
}
