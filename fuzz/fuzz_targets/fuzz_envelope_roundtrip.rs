//! Fuzz target: decode/encode/decode stability.
//! The first byte picks the envelope kind. Whatever decodes must re-encode
//! into bytes that decode to the same value.

#![no_main]

use libfuzzer_sys::fuzz_target;

use teleporter_abi::message::{Envelope, EnvelopeKind};

fuzz_target!(|data: &[u8]| {
    let Some((selector, body)) = data.split_first() else {
        return;
    };
    let kind = EnvelopeKind::ALL[*selector as usize % EnvelopeKind::ALL.len()];

    let Ok(envelope) = Envelope::decode(kind, body) else {
        return;
    };
    let packed = envelope.pack();
    let roundtripped = Envelope::decode(kind, &packed).expect("re-encoded envelope must decode");

    assert_eq!(envelope, roundtripped, "round-trip mismatch");
    assert_eq!(packed, roundtripped.pack(), "encoding is not canonical");
});
