use alloy_primitives::{Address, B256, Bytes, U256};
use serde_json::json;

use super::*;

#[test]
fn names_round_trip_through_from_str() {
    for kind in EnvelopeKind::ALL {
        assert_eq!(kind.as_str().parse::<EnvelopeKind>().unwrap(), *kind);
        assert_eq!(kind.to_string(), kind.as_str());
    }
}

#[test]
fn from_str_accepts_dashes_and_case() {
    assert_eq!(
        "Teleporter-Message".parse::<EnvelopeKind>().unwrap(),
        EnvelopeKind::TeleporterMessage
    );
}

#[test]
fn from_str_lists_known_kinds() {
    let err = "teleporter".parse::<EnvelopeKind>().unwrap_err();
    assert!(err.contains("teleporter_message_receipt"), "{err}");
}

#[test]
fn serde_name_matches_display() {
    for kind in EnvelopeKind::ALL {
        assert_eq!(serde_json::to_value(kind).unwrap(), json!(kind.as_str()));
    }
}

#[test]
fn dynamic_flag_matches_declared_shape() {
    for kind in EnvelopeKind::ALL {
        assert_eq!(kind.is_dynamic(), kind.param_type().is_dynamic(), "{kind}");
    }
    assert!(!EnvelopeKind::ProtocolRegistryEntry.is_dynamic());
    assert!(EnvelopeKind::ValidatorSetSigMessage.is_dynamic());
}

#[test]
fn every_declared_shape_is_supported() {
    for kind in EnvelopeKind::ALL {
        kind.param_type().validate().unwrap();
    }
}

#[test]
fn envelope_decode_selects_kind() {
    let entry = ProtocolRegistryEntry {
        version: U256::from(2u64),
        protocol_address: Address::repeat_byte(0xab),
    };
    let envelope = Envelope::from(entry.clone());
    assert_eq!(envelope.kind(), EnvelopeKind::ProtocolRegistryEntry);

    let decoded = Envelope::decode(EnvelopeKind::ProtocolRegistryEntry, &envelope.pack()).unwrap();
    assert_eq!(decoded, Envelope::ProtocolRegistryEntry(entry));
}

#[test]
fn unpack_keeps_variant() {
    let message = ValidatorSetSigMessage {
        target_blockchain_id: B256::repeat_byte(1),
        validator_set_sig_address: Address::repeat_byte(2),
        target_contract_address: Address::repeat_byte(3),
        nonce: U256::from(7u64),
        value: U256::ZERO,
        payload: Bytes::from_static(&[0xca, 0xfe]),
    };
    let packed = message.pack();

    let mut envelope = Envelope::from(ValidatorSetSigMessage::default());
    envelope.unpack(&packed).unwrap();
    assert_eq!(envelope, Envelope::ValidatorSetSigMessage(message));
}

#[test]
fn json_round_trip() {
    let value = json!({
        "feeTokenAddress": "0x0123456789abcdef0123456789abcdef01234567",
        "amount": "0x64",
    });
    let envelope = Envelope::from_json(EnvelopeKind::TeleporterFeeInfo, value).unwrap();
    match &envelope {
        Envelope::TeleporterFeeInfo(fee) => assert_eq!(fee.amount, U256::from(100u64)),
        other => panic!("unexpected envelope: {other:?}"),
    }
    let back = Envelope::from_json(EnvelopeKind::TeleporterFeeInfo, envelope.to_json().unwrap())
        .unwrap();
    assert_eq!(back, envelope);
}

#[test]
fn json_with_wrong_shape_is_rejected() {
    let value = json!({ "version": "0x1" });
    assert!(Envelope::from_json(EnvelopeKind::ProtocolRegistryEntry, value).is_err());
}

fn pack_as_codec<T: EnvelopeCodec>(value: T) -> Vec<u8> {
    value.pack()
}

#[test]
fn every_listed_type_carries_the_codec_capability() {
    let packed = [
        pack_as_codec(TeleporterMessage::default()),
        pack_as_codec(TeleporterMessageReceipt::default()),
        pack_as_codec(TeleporterFeeInfo::default()),
        pack_as_codec(TeleporterMessageInput::default()),
        pack_as_codec(ProtocolRegistryEntry::default()),
        pack_as_codec(ValidatorSetSigMessage::default()),
    ];
    assert_eq!(packed.len(), EnvelopeKind::ALL.len());
    for (kind, bytes) in EnvelopeKind::ALL.iter().zip(&packed) {
        let envelope = Envelope::decode(*kind, bytes).expect("decode default");
        assert_eq!(&envelope.pack(), bytes, "{kind}");
    }
}
