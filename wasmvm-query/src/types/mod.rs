//! Value types carried inside query responses.
//!
//! These are plain records with structural equality only. Amounts use the
//! `cosmwasm_std` math types so they travel as decimal strings, binary blobs
//! use [`Binary`](cosmwasm_std::Binary) which is base64 on the wire.
//!
//! ```
//! use wasmvm_query::types::Coin;
//! let coin = Coin::new(10u128, "uatom");
//! ```

pub mod bank;
pub mod checksum;
pub mod coin;
pub mod ibc;
pub mod pagination;
pub mod staking;

pub use self::{
    bank::{DenomMetadata, DenomUnit},
    checksum::{Checksum, ChecksumError},
    coin::{Coin, DecCoin},
    ibc::{IbcChannel, IbcEndpoint, IbcOrder},
    pagination::PageRequest,
    staking::{Delegation, DelegatorReward, FullDelegation, Validator},
};
