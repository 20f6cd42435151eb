//! Fuzz target: decode arbitrary bytes as every envelope kind.
//! Must not panic regardless of input.

#![no_main]

use libfuzzer_sys::fuzz_target;

use teleporter_abi::message::{Envelope, EnvelopeKind};

fuzz_target!(|data: &[u8]| {
    for kind in EnvelopeKind::ALL {
        let _ = Envelope::decode(*kind, data);
    }
});
