use cosmwasm_std::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use super::coin::{Coin, DecCoin};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validator {
    /// Operator address, e.g. `cosmosvaloper1...`.
    pub address: String,
    pub commission: Decimal,
    pub max_commission: Decimal,
    /// Maximum daily increase of the commission.
    pub max_change_rate: Decimal,
}

/// Bonded amount of one delegator with one validator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delegation {
    pub delegator: String,
    pub validator: String,
    pub amount: Coin,
}

/// Delegation including rewards and redelegation state. Only returned when
/// querying a single delegator/validator pair.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullDelegation {
    pub delegator: String,
    pub validator: String,
    pub amount: Coin,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub accumulated_rewards: Vec<Coin>,
    pub can_redelegate: Coin,
}

impl From<FullDelegation> for Delegation {
    fn from(value: FullDelegation) -> Self {
        Self {
            delegator: value.delegator,
            validator: value.validator,
            amount: value.amount,
        }
    }
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegatorReward {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub reward: Vec<DecCoin>,
    pub validator_address: String,
}
