//! Offline round-trip verification of every envelope kind.

pub mod coverage;
mod harness;
mod randomize;

use thiserror::Error;

use crate::abi::CodecError;
use crate::message::EnvelopeKind;

pub use harness::{
    KindReport, VerifyReport, check_all, check_all_in, check_kind, check_registration,
};
pub use randomize::{Limits, Randomize};

/// Verification failures. Each one is a defect in this crate, not bad input.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("envelope kind {0} has no round-trip template registered")]
    MissingCoverageRegistration(EnvelopeKind),

    #[error("envelope kind {kind} declares an unsupported field shape: {reason}")]
    UnsupportedFieldShape { kind: EnvelopeKind, reason: String },

    #[error("envelope kind {kind} failed to unpack its own encoding")]
    Codec {
        kind: EnvelopeKind,
        #[source]
        source: CodecError,
    },

    #[error("envelope kind {kind} changed across a round trip (seed {seed}):\n{diff}")]
    Mismatch {
        kind: EnvelopeKind,
        seed: u64,
        diff: String,
    },
}

impl VerifyError {
    pub fn kind(&self) -> EnvelopeKind {
        match self {
            VerifyError::MissingCoverageRegistration(kind) => *kind,
            VerifyError::UnsupportedFieldShape { kind, .. }
            | VerifyError::Codec { kind, .. }
            | VerifyError::Mismatch { kind, .. } => *kind,
        }
    }
}
