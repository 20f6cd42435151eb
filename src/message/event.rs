//! Messenger event logs, as re-parsed by off-chain relayers.
//!
//! Topic 0 is the keccak-256 of the canonical event signature; indexed
//! parameters follow as one topic each, and the remaining parameters are
//! ABI-encoded as a record in the log data.

use std::sync::LazyLock;

use alloy_primitives::{Address, B256, Bytes, keccak256};
use serde::Serialize;

use super::teleporter::{TeleporterFeeInfo, TeleporterMessage};
use crate::abi::word::{decode_address, encode_address};
use crate::abi::{AbiType, CodecError, RecordDecoder, RecordEncoder};

/// Raw log as emitted by the messenger contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventLog {
    pub topics: Vec<B256>,
    pub data: Bytes,
}

fn signature(name: &str, params: &[String]) -> String {
    format!("{name}({})", params.join(","))
}

static SEND_SIGNATURE: LazyLock<String> = LazyLock::new(|| {
    signature(
        "SendCrossChainMessage",
        &[
            "bytes32".into(),
            "bytes32".into(),
            TeleporterMessage::param_type().to_string(),
            TeleporterFeeInfo::param_type().to_string(),
        ],
    )
});

static RECEIVE_SIGNATURE: LazyLock<String> = LazyLock::new(|| {
    signature(
        "ReceiveCrossChainMessage",
        &[
            "bytes32".into(),
            "bytes32".into(),
            "address".into(),
            "address".into(),
            TeleporterMessage::param_type().to_string(),
        ],
    )
});

static EXECUTED_SIGNATURE: LazyLock<String> =
    LazyLock::new(|| signature("MessageExecuted", &["bytes32".into(), "bytes32".into()]));

static SEND_TOPIC: LazyLock<B256> = LazyLock::new(|| keccak256(SEND_SIGNATURE.as_bytes()));
static RECEIVE_TOPIC: LazyLock<B256> = LazyLock::new(|| keccak256(RECEIVE_SIGNATURE.as_bytes()));
static EXECUTED_TOPIC: LazyLock<B256> =
    LazyLock::new(|| keccak256(EXECUTED_SIGNATURE.as_bytes()));

fn address_topic(address: &Address) -> B256 {
    B256::from(encode_address(address))
}

fn expect_topics(log: &EventLog, name: &str, indexed: usize) -> Result<(), CodecError> {
    if log.topics.len() != indexed + 1 {
        return Err(CodecError::Decode(format!(
            "{name} expects {} topics, log has {}",
            indexed + 1,
            log.topics.len()
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendCrossChainMessage {
    #[serde(rename = "messageID")]
    pub message_id: B256,
    #[serde(rename = "destinationBlockchainID")]
    pub destination_blockchain_id: B256,
    pub message: TeleporterMessage,
    pub fee_info: TeleporterFeeInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiveCrossChainMessage {
    #[serde(rename = "messageID")]
    pub message_id: B256,
    #[serde(rename = "sourceBlockchainID")]
    pub source_blockchain_id: B256,
    pub deliverer: Address,
    pub reward_redeemer: Address,
    pub message: TeleporterMessage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageExecuted {
    #[serde(rename = "messageID")]
    pub message_id: B256,
    #[serde(rename = "sourceBlockchainID")]
    pub source_blockchain_id: B256,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event")]
pub enum MessengerEvent {
    SendCrossChainMessage(SendCrossChainMessage),
    ReceiveCrossChainMessage(ReceiveCrossChainMessage),
    MessageExecuted(MessageExecuted),
}

impl MessengerEvent {
    pub fn signature(&self) -> &'static str {
        match self {
            MessengerEvent::SendCrossChainMessage(_) => SEND_SIGNATURE.as_str(),
            MessengerEvent::ReceiveCrossChainMessage(_) => RECEIVE_SIGNATURE.as_str(),
            MessengerEvent::MessageExecuted(_) => EXECUTED_SIGNATURE.as_str(),
        }
    }

    pub fn topic(&self) -> B256 {
        match self {
            MessengerEvent::SendCrossChainMessage(_) => *SEND_TOPIC,
            MessengerEvent::ReceiveCrossChainMessage(_) => *RECEIVE_TOPIC,
            MessengerEvent::MessageExecuted(_) => *EXECUTED_TOPIC,
        }
    }

    pub fn decode(log: &EventLog) -> Result<Self, CodecError> {
        let topic = log
            .topics
            .first()
            .ok_or_else(|| CodecError::Decode("log has no topics".to_string()))?;

        if *topic == *SEND_TOPIC {
            expect_topics(log, "SendCrossChainMessage", 2)?;
            let mut data = RecordDecoder::new(&log.data);
            Ok(MessengerEvent::SendCrossChainMessage(SendCrossChainMessage {
                message_id: log.topics[1],
                destination_blockchain_id: log.topics[2],
                message: data.next()?,
                fee_info: data.next()?,
            }))
        } else if *topic == *RECEIVE_TOPIC {
            expect_topics(log, "ReceiveCrossChainMessage", 3)?;
            let mut data = RecordDecoder::new(&log.data);
            Ok(MessengerEvent::ReceiveCrossChainMessage(
                ReceiveCrossChainMessage {
                    message_id: log.topics[1],
                    source_blockchain_id: log.topics[2],
                    deliverer: decode_address(&log.topics[3].0)?,
                    reward_redeemer: data.next()?,
                    message: data.next()?,
                },
            ))
        } else if *topic == *EXECUTED_TOPIC {
            expect_topics(log, "MessageExecuted", 2)?;
            Ok(MessengerEvent::MessageExecuted(MessageExecuted {
                message_id: log.topics[1],
                source_blockchain_id: log.topics[2],
            }))
        } else {
            Err(CodecError::Decode(format!(
                "unrecognised event topic {topic}"
            )))
        }
    }

    pub fn to_log(&self) -> EventLog {
        match self {
            MessengerEvent::SendCrossChainMessage(event) => {
                let mut data = RecordEncoder::new();
                data.push(&event.message).push(&event.fee_info);
                EventLog {
                    topics: vec![
                        *SEND_TOPIC,
                        event.message_id,
                        event.destination_blockchain_id,
                    ],
                    data: data.finish().into(),
                }
            }
            MessengerEvent::ReceiveCrossChainMessage(event) => {
                let mut data = RecordEncoder::new();
                data.push(&event.reward_redeemer).push(&event.message);
                EventLog {
                    topics: vec![
                        *RECEIVE_TOPIC,
                        event.message_id,
                        event.source_blockchain_id,
                        address_topic(&event.deliverer),
                    ],
                    data: data.finish().into(),
                }
            }
            MessengerEvent::MessageExecuted(event) => EventLog {
                topics: vec![
                    *EXECUTED_TOPIC,
                    event.message_id,
                    event.source_blockchain_id,
                ],
                data: Bytes::new(),
            },
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
