use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// One unit of a denomination, e.g. `uatom` with exponent 0 or `atom` with 6.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenomUnit {
    pub denom: String,
    pub exponent: u32,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Bank module metadata describing a denomination.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenomMetadata {
    pub description: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub denom_units: Vec<DenomUnit>,
    pub base: String,
    pub display: String,
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub uri_hash: String,
}
