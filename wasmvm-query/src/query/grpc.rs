use cosmwasm_std::Binary;
use serde::{Deserialize, Serialize};

/// Query encoded the same way as `abci_query`: a protobuf request routed by
/// its fully qualified path, e.g. `/cosmos.authz.v1beta1.Query/Grants`.
///
/// The response is meant to be protobuf but some chains return JSON. Callers
/// compile the matching type definitions themselves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StargateQuery {
    pub path: String,
    pub data: Binary,
}

/// Like [`StargateQuery`] but the response is always protobuf encoded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrpcQuery {
    pub path: String,
    pub data: Binary,
}
