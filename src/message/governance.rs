use alloy_primitives::{Address, B256, Bytes, U256};
use serde::{Deserialize, Serialize};

abi_record! {
    /// Call authorised by a validator-set signature, executed against
    /// `target_contract_address` on `target_blockchain_id`.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ValidatorSetSigMessage {
        #[serde(rename = "targetBlockchainID")]
        pub target_blockchain_id: B256,
        pub validator_set_sig_address: Address,
        pub target_contract_address: Address,
        pub nonce: U256,
        pub value: U256,
        pub payload: Bytes,
    }
}
