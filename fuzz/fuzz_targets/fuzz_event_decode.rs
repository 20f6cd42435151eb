//! Fuzz target: decode arbitrary event logs.
//! The first byte is the topic count; topics are taken 32 bytes at a time and
//! the rest is log data. Must not panic.

#![no_main]

use alloy_primitives::B256;
use libfuzzer_sys::fuzz_target;

use teleporter_abi::message::{EventLog, MessengerEvent};

fuzz_target!(|data: &[u8]| {
    let Some((count, mut rest)) = data.split_first() else {
        return;
    };
    let mut topics = Vec::new();
    for _ in 0..(*count % 6) {
        let Some((topic, tail)) = rest.split_first_chunk::<32>() else {
            break;
        };
        topics.push(B256::from(*topic));
        rest = tail;
    }

    let log = EventLog {
        topics,
        data: rest.to_vec().into(),
    };
    if let Ok(event) = MessengerEvent::decode(&log) {
        assert_eq!(MessengerEvent::decode(&event.to_log()).ok(), Some(event));
    }
});
