//! Fuzz target: decode arbitrary messenger call data.
//! Must not panic; decoded calls must survive an encode/decode cycle.

#![no_main]

use libfuzzer_sys::fuzz_target;

use teleporter_abi::message::MessengerCall;

fuzz_target!(|data: &[u8]| {
    let Ok(call) = MessengerCall::decode(data) else {
        return;
    };
    let again = MessengerCall::decode(&call.encode()).expect("re-encoded call must decode");
    assert_eq!(call, again);
});
