use alloy_primitives::{Address, B256, Bytes, U256};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use teleporter_abi::message::{
    Envelope, EnvelopeCodec, EnvelopeKind, MessengerEvent, SendCrossChainMessage,
    TeleporterFeeInfo, TeleporterMessage, TeleporterMessageReceipt,
};
use teleporter_abi::verify::{Limits, Randomize, coverage};

fn make_message(relayers: usize, receipts: usize, payload: usize) -> TeleporterMessage {
    TeleporterMessage {
        message_nonce: U256::from(1_000_000u64),
        origin_sender_address: Address::repeat_byte(0x11),
        destination_blockchain_id: B256::repeat_byte(0x22),
        destination_address: Address::repeat_byte(0x33),
        required_gas_limit: U256::from(250_000u64),
        allowed_relayer_addresses: vec![Address::repeat_byte(0x44); relayers],
        receipts: vec![
            TeleporterMessageReceipt {
                received_message_nonce: U256::from(7u64),
                relayer_reward_address: Address::repeat_byte(0x55),
            };
            receipts
        ],
        message: Bytes::from(vec![0xab; payload]),
    }
}

fn sizes() -> [(&'static str, TeleporterMessage); 3] {
    [
        ("small", make_message(0, 0, 32)),
        ("medium", make_message(4, 8, 1_000)),
        ("large", make_message(64, 255, 32_768)),
    ]
}

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");
    for (name, message) in sizes() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &message, |b, message| {
            b.iter(|| black_box(message).pack())
        });
    }
    group.finish();
}

fn bench_unpack(c: &mut Criterion) {
    let mut group = c.benchmark_group("unpack");
    for (name, message) in sizes() {
        let packed = message.pack();
        group.bench_with_input(BenchmarkId::from_parameter(name), &packed, |b, packed| {
            b.iter(|| TeleporterMessage::unpacked(black_box(packed)).unwrap())
        });
    }
    group.finish();
}

fn bench_event_log(c: &mut Criterion) {
    let event = MessengerEvent::SendCrossChainMessage(SendCrossChainMessage {
        message_id: B256::repeat_byte(0x66),
        destination_blockchain_id: B256::repeat_byte(0x22),
        message: make_message(4, 8, 1_000),
        fee_info: TeleporterFeeInfo {
            fee_token_address: Address::repeat_byte(0x77),
            amount: U256::from(10u64),
        },
    });
    let log = event.to_log();
    c.bench_function("event_decode", |b| {
        b.iter(|| MessengerEvent::decode(black_box(&log)).unwrap())
    });
}

fn bench_randomized_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("randomized_roundtrip");
    let limits = Limits::default();
    for kind in EnvelopeKind::ALL {
        let mut rng = StdRng::seed_from_u64(1);
        let mut envelope = (coverage::lookup(*kind).unwrap().template)();
        envelope.randomize(&mut rng, &limits);
        group.bench_with_input(BenchmarkId::from_parameter(kind), &envelope, |b, envelope| {
            b.iter(|| Envelope::decode(envelope.kind(), &black_box(envelope).pack()).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_pack,
    bench_unpack,
    bench_event_log,
    bench_randomized_roundtrip,
);
criterion_main!(benches);
