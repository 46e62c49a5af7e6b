use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use crate::types::IbcChannel;

/// IBC queries answered from the perspective of the querying contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IbcQuery {
    /// Port bound to the calling contract. Returns [`PortIdResponse`].
    PortId(PortIdQuery),
    /// Channels bound to a port, the contract's own port when `port_id` is
    /// omitted. Returns [`ListChannelsResponse`].
    ListChannels(ListChannelsQuery),
    /// Returns [`ChannelResponse`].
    Channel(ChannelQuery),
}

impl IbcQuery {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::PortId(_) => "port_id",
            Self::ListChannels(_) => "list_channels",
            Self::Channel(_) => "channel",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortIdQuery {}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortIdResponse {
    pub port_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListChannelsQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_id: Option<String>,
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListChannelsResponse {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub channels: Vec<IbcChannel>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_id: Option<String>,
    pub channel_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelResponse {
    /// Omitted when there is no matching channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<IbcChannel>,
}
