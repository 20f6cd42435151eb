use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

abi_record! {
    /// A messenger deployment registered under a protocol version.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ProtocolRegistryEntry {
        pub version: U256,
        pub protocol_address: Address,
    }
}
