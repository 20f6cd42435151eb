//! Round-trip coverage registrations.
//!
//! Discovery comes from [`EnvelopeKind::ALL`], which is generated from the
//! same list as the [`Envelope`] union and therefore names every envelope
//! type. Templates are registered here separately: a new envelope kind
//! without a template fails verification instead of shipping untested.

use crate::message::{
    Envelope, EnvelopeKind, ProtocolRegistryEntry, TeleporterFeeInfo, TeleporterMessage,
    TeleporterMessageInput, TeleporterMessageReceipt, ValidatorSetSigMessage,
};

use super::VerifyError;

/// Zero-valued shape template for one envelope kind.
#[derive(Debug, Clone, Copy)]
pub struct Registration {
    pub kind: EnvelopeKind,
    pub template: fn() -> Envelope,
}

fn teleporter_message() -> Envelope {
    TeleporterMessage::default().into()
}

fn teleporter_message_receipt() -> Envelope {
    TeleporterMessageReceipt::default().into()
}

fn teleporter_fee_info() -> Envelope {
    TeleporterFeeInfo::default().into()
}

fn teleporter_message_input() -> Envelope {
    TeleporterMessageInput::default().into()
}

fn protocol_registry_entry() -> Envelope {
    ProtocolRegistryEntry::default().into()
}

fn validator_set_sig_message() -> Envelope {
    ValidatorSetSigMessage::default().into()
}

static REGISTRATIONS: &[Registration] = &[
    Registration {
        kind: EnvelopeKind::TeleporterMessage,
        template: teleporter_message,
    },
    Registration {
        kind: EnvelopeKind::TeleporterMessageReceipt,
        template: teleporter_message_receipt,
    },
    Registration {
        kind: EnvelopeKind::TeleporterFeeInfo,
        template: teleporter_fee_info,
    },
    Registration {
        kind: EnvelopeKind::TeleporterMessageInput,
        template: teleporter_message_input,
    },
    Registration {
        kind: EnvelopeKind::ProtocolRegistryEntry,
        template: protocol_registry_entry,
    },
    Registration {
        kind: EnvelopeKind::ValidatorSetSigMessage,
        template: validator_set_sig_message,
    },
];

/// Every kind implementing the envelope codec.
pub fn discover() -> &'static [EnvelopeKind] {
    EnvelopeKind::ALL
}

pub fn registrations() -> &'static [Registration] {
    REGISTRATIONS
}

pub fn lookup_in(
    registrations: &[Registration],
    kind: EnvelopeKind,
) -> Result<Registration, VerifyError> {
    registrations
        .iter()
        .find(|registration| registration.kind == kind)
        .copied()
        .ok_or(VerifyError::MissingCoverageRegistration(kind))
}

pub fn lookup(kind: EnvelopeKind) -> Result<Registration, VerifyError> {
    lookup_in(REGISTRATIONS, kind)
}

/// Kinds returned by [`discover`] that have no registration.
pub fn uncovered_in(registrations: &[Registration]) -> Vec<EnvelopeKind> {
    discover()
        .iter()
        .copied()
        .filter(|kind| lookup_in(registrations, *kind).is_err())
        .collect()
}

#[cfg(test)]
#[path = "coverage_tests.rs"]
mod tests;
