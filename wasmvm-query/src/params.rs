// Configuration for the querier.
//
// Mirrors the module parameter style used elsewhere: a serde struct with
// defaults that can also be loaded from a TOML file. Gas costs follow the
// Cosmos SDK KV store defaults.

use std::{collections::BTreeSet, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gas::{GasMeter, OutOfGas};

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("failed to read querier config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid querier config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Gas charged by responders backed by a key value store.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GasConfig {
    pub read_cost_flat: u64,
    pub read_cost_per_byte: u64,
    pub iter_next_cost_flat: u64,
}

impl Default for GasConfig {
    fn default() -> Self {
        Self {
            read_cost_flat: 1000,
            read_cost_per_byte: 3,
            iter_next_cost_flat: 30,
        }
    }
}

impl GasConfig {
    /// Charges one point read returning `len` bytes.
    pub fn charge_read(&self, gas: &mut GasMeter, len: usize) -> Result<(), OutOfGas> {
        gas.consume(self.read_cost_flat, "read flat")?;
        gas.consume(self.per_byte(len), "read per byte")
    }

    /// Charges one iterator step yielding `len` bytes of key and value.
    pub fn charge_iter_next(&self, gas: &mut GasMeter, len: usize) -> Result<(), OutOfGas> {
        gas.consume(self.iter_next_cost_flat, "iter next flat")?;
        gas.consume(self.per_byte(len), "iter next per byte")
    }

    fn per_byte(&self, len: usize) -> u64 {
        self.read_cost_per_byte
            .saturating_mul(u64::try_from(len).unwrap_or(u64::MAX))
    }
}

/// Parameters controlling the behaviour of a [`QueryRouter`](crate::router::QueryRouter).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct QuerierParams {
    /// Flat gas charged by the dispatcher before routing a request.
    pub query_base_gas: u64,
    pub gas: GasConfig,
    /// Stargate and gRPC paths contracts may call. Every path is forwarded to
    /// the responder when unset.
    pub grpc_accept_list: Option<BTreeSet<String>>,
    /// Page size used by paginated responders when the request has none.
    pub default_page_limit: u32,
}

impl Default for QuerierParams {
    fn default() -> Self {
        Self {
            query_base_gas: 0,
            gas: GasConfig::default(),
            grpc_accept_list: None,
            default_page_limit: 100,
        }
    }
}

impl QuerierParams {
    pub fn from_toml_str(raw: &str) -> Result<Self, ParamsError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn is_path_accepted(&self, path: &str) -> bool {
        self.grpc_accept_list
            .as_ref()
            .map_or(true, |list| list.contains(path))
    }
}
