//! Gas metering for a single dispatch.
//!
//! Amounts are CosmWasm gas (aka. wasmvm gas), the same unit the guest
//! supplies as its limit.
use thiserror::Error;
use tracing::trace;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("out of gas in location: {descriptor}; gas limit: {limit}")]
pub struct OutOfGas {
    pub descriptor: String,
    pub limit: u64,
}

/// Tracks gas used against a fixed limit. Consumption never exceeds the limit:
/// the charge that would overflow it fails and pins consumption to the limit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GasMeter {
    limit: u64,
    consumed: u64,
}

impl GasMeter {
    pub fn new(limit: u64) -> Self {
        Self { limit, consumed: 0 }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    pub fn remaining(&self) -> u64 {
        self.limit.saturating_sub(self.consumed)
    }

    pub fn is_out_of_gas(&self) -> bool {
        self.consumed >= self.limit
    }

    pub fn consume(&mut self, amount: u64, descriptor: &str) -> Result<(), OutOfGas> {
        let consumed = self.consumed.saturating_add(amount);
        if consumed > self.limit {
            self.consumed = self.limit;
            return Err(OutOfGas {
                descriptor: descriptor.to_owned(),
                limit: self.limit,
            });
        }

        trace!(amount, descriptor, consumed, "gas charged");
        self.consumed = consumed;
        Ok(())
    }
}
