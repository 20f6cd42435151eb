use alloy_primitives::{Address, B256, Bytes, U256};
use serde::{Deserialize, Serialize};

abi_record! {
    /// Acknowledgement of a message delivered in the opposite direction.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TeleporterMessageReceipt {
        pub received_message_nonce: U256,
        pub relayer_reward_address: Address,
    }
}

abi_record! {
    /// Fee paid to the relayer that delivers a message.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TeleporterFeeInfo {
        pub fee_token_address: Address,
        pub amount: U256,
    }
}

abi_record! {
    /// Cross-chain message as stored, emitted and delivered by the messenger.
    ///
    /// `allowed_relayer_addresses` empty means any relayer may deliver; that
    /// rule is enforced by the messenger, not here.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TeleporterMessage {
        pub message_nonce: U256,
        pub origin_sender_address: Address,
        #[serde(rename = "destinationBlockchainID")]
        pub destination_blockchain_id: B256,
        pub destination_address: Address,
        pub required_gas_limit: U256,
        pub allowed_relayer_addresses: Vec<Address>,
        pub receipts: Vec<TeleporterMessageReceipt>,
        pub message: Bytes,
    }
}

abi_record! {
    /// Argument of `sendCrossChainMessage`: what a sender asks the messenger to
    /// deliver. The nonce, origin sender and receipts are filled in on chain.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TeleporterMessageInput {
        #[serde(rename = "destinationBlockchainID")]
        pub destination_blockchain_id: B256,
        pub destination_address: Address,
        pub fee_info: TeleporterFeeInfo,
        pub required_gas_limit: U256,
        pub allowed_relayer_addresses: Vec<Address>,
        pub message: Bytes,
    }
}

impl TeleporterMessage {
    /// True when `relayer` may deliver this message.
    pub fn allows_relayer(&self, relayer: &Address) -> bool {
        self.allowed_relayer_addresses.is_empty() || self.allowed_relayer_addresses.contains(relayer)
    }
}

#[cfg(test)]
#[path = "teleporter_tests.rs"]
mod tests;
