use cosmwasm_std::Binary;
use serde::{Deserialize, Serialize};

/// Pagination parameters for list queries answered by the host.
///
/// `key` is a value returned as `next_key` by a previous page. When it is
/// `None` the host starts from the beginning of the collection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub key: Option<Binary>,
    pub limit: u32,
    pub reverse: bool,
}
