use std::sync::LazyLock;

use alloy_primitives::{Address, B256, Bytes, keccak256};
use serde::Serialize;

use super::teleporter::{TeleporterMessage, TeleporterMessageInput};
use crate::abi::{AbiType, CodecError, RecordDecoder, RecordEncoder};

pub type Selector = [u8; 4];

pub const SELECTOR_SIZE: usize = 4;

fn selector(signature: &str) -> Selector {
    let hash = keccak256(signature.as_bytes());
    let mut out = [0u8; SELECTOR_SIZE];
    out.copy_from_slice(&hash[..SELECTOR_SIZE]);
    out
}

static SEND_SIGNATURE: LazyLock<String> = LazyLock::new(|| {
    format!(
        "sendCrossChainMessage({})",
        TeleporterMessageInput::param_type()
    )
});
static RETRY_SIGNATURE: LazyLock<String> = LazyLock::new(|| {
    format!(
        "retryMessageExecution(bytes32,{})",
        TeleporterMessage::param_type()
    )
});
static RECEIVE_SIGNATURE: LazyLock<String> =
    LazyLock::new(|| "receiveCrossChainMessage(uint32,address)".to_string());

static SEND_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector(&SEND_SIGNATURE));
static RETRY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector(&RETRY_SIGNATURE));
static RECEIVE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector(&RECEIVE_SIGNATURE));

/// Messenger entry points whose call data this crate builds and parses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "function", content = "args", rename_all = "camelCase")]
pub enum MessengerCall {
    SendCrossChainMessage(TeleporterMessageInput),
    #[serde(rename_all = "camelCase")]
    RetryMessageExecution {
        #[serde(rename = "sourceBlockchainID")]
        source_blockchain_id: B256,
        message: TeleporterMessage,
    },
    /// Delivery of the warp message at `message_index` in the transaction's
    /// access list.
    #[serde(rename_all = "camelCase")]
    ReceiveCrossChainMessage {
        message_index: u32,
        relayer_reward_address: Address,
    },
}

impl MessengerCall {
    pub fn signature(&self) -> &'static str {
        match self {
            MessengerCall::SendCrossChainMessage(_) => SEND_SIGNATURE.as_str(),
            MessengerCall::RetryMessageExecution { .. } => RETRY_SIGNATURE.as_str(),
            MessengerCall::ReceiveCrossChainMessage { .. } => RECEIVE_SIGNATURE.as_str(),
        }
    }

    pub fn selector(&self) -> Selector {
        match self {
            MessengerCall::SendCrossChainMessage(_) => *SEND_SELECTOR,
            MessengerCall::RetryMessageExecution { .. } => *RETRY_SELECTOR,
            MessengerCall::ReceiveCrossChainMessage { .. } => *RECEIVE_SELECTOR,
        }
    }

    pub fn encode(&self) -> Bytes {
        let mut args = RecordEncoder::new();
        match self {
            MessengerCall::SendCrossChainMessage(input) => {
                args.push(input);
            }
            MessengerCall::RetryMessageExecution {
                source_blockchain_id,
                message,
            } => {
                args.push(source_blockchain_id).push(message);
            }
            MessengerCall::ReceiveCrossChainMessage {
                message_index,
                relayer_reward_address,
            } => {
                args.push(message_index).push(relayer_reward_address);
            }
        }

        let mut out = Vec::with_capacity(SELECTOR_SIZE + args.encoded_size());
        out.extend_from_slice(&self.selector());
        args.write_to(&mut out);
        out.into()
    }

    pub fn decode(calldata: &[u8]) -> Result<Self, CodecError> {
        let (head, body) = calldata
            .split_first_chunk::<SELECTOR_SIZE>()
            .ok_or_else(|| CodecError::truncated(SELECTOR_SIZE, calldata.len()))?;
        let mut args = RecordDecoder::new(body);

        if *head == *SEND_SELECTOR {
            Ok(MessengerCall::SendCrossChainMessage(args.next()?))
        } else if *head == *RETRY_SELECTOR {
            Ok(MessengerCall::RetryMessageExecution {
                source_blockchain_id: args.next()?,
                message: args.next()?,
            })
        } else if *head == *RECEIVE_SELECTOR {
            Ok(MessengerCall::ReceiveCrossChainMessage {
                message_index: args.next()?,
                relayer_reward_address: args.next()?,
            })
        } else {
            Err(CodecError::Decode(format!(
                "unknown function selector 0x{}",
                hex::encode(head)
            )))
        }
    }
}

#[cfg(test)]
#[path = "call_tests.rs"]
mod tests;
