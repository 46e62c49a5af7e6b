//! Distribution module queries. These map one to one onto the
//! `cosmos.distribution.v1beta1.Query` endpoints of the same name.
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use crate::types::{DecCoin, DelegatorReward};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionQuery {
    DelegatorWithdrawAddress(DelegatorWithdrawAddressQuery),
    DelegationRewards(DelegationRewardsQuery),
    DelegationTotalRewards(DelegationTotalRewardsQuery),
    DelegatorValidators(DelegatorValidatorsQuery),
}

impl DistributionQuery {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DelegatorWithdrawAddress(_) => "delegator_withdraw_address",
            Self::DelegationRewards(_) => "delegation_rewards",
            Self::DelegationTotalRewards(_) => "delegation_total_rewards",
            Self::DelegatorValidators(_) => "delegator_validators",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegatorWithdrawAddressQuery {
    pub delegator_address: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegatorWithdrawAddressResponse {
    pub withdraw_address: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationRewardsQuery {
    pub delegator_address: String,
    pub validator_address: String,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationRewardsResponse {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub rewards: Vec<DecCoin>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationTotalRewardsQuery {
    pub delegator_address: String,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationTotalRewardsResponse {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub rewards: Vec<DelegatorReward>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub total: Vec<DecCoin>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegatorValidatorsQuery {
    pub delegator_address: String,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegatorValidatorsResponse {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub validators: Vec<String>,
}
