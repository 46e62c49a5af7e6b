use std::fmt;

use cosmwasm_std::{Decimal256, Uint128};
use serde::{Deserialize, Serialize};

/// Integer amount of a single denomination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: Uint128,
}

impl Coin {
    pub fn new(amount: impl Into<Uint128>, denom: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }

    /// Zero amount of `denom`. Hosts answer balance queries for unknown
    /// accounts with this value.
    pub fn zero(denom: impl Into<String>) -> Self {
        Self::new(Uint128::zero(), denom)
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Fractional amount of a single denomination, used for distribution rewards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecCoin {
    pub denom: String,
    pub amount: Decimal256,
}

impl DecCoin {
    pub fn new(amount: Decimal256, denom: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }
}
