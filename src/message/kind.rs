use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::codec::EnvelopeCodec;
use super::codec::sealed::Registered;
use super::governance::ValidatorSetSigMessage;
use super::registry::ProtocolRegistryEntry;
use super::teleporter::{
    TeleporterFeeInfo, TeleporterMessage, TeleporterMessageInput, TeleporterMessageReceipt,
};
use crate::abi::{AbiType, CodecError, ParamType};
use crate::verify::{Limits, Randomize};

/// Generates [`EnvelopeKind`], [`Envelope`] and the [`EnvelopeCodec`] impls
/// from a single list. Listing a type here is the only way to give it the
/// codec capability, so every codec type is a discovered kind.
macro_rules! envelope_kinds {
    ($($variant:ident($ty:ty) => $label:literal,)+) => {
        /// Every envelope type implementing [`EnvelopeCodec`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum EnvelopeKind {
            $($variant,)+
        }

        impl EnvelopeKind {
            pub const ALL: &'static [EnvelopeKind] = &[$(EnvelopeKind::$variant,)+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(EnvelopeKind::$variant => $label,)+
                }
            }

            pub fn param_type(self) -> ParamType {
                match self {
                    $(EnvelopeKind::$variant => <$ty as AbiType>::param_type(),)+
                }
            }

            pub fn is_dynamic(self) -> bool {
                match self {
                    $(EnvelopeKind::$variant => <$ty as AbiType>::DYNAMIC,)+
                }
            }
        }

        /// Tagged union over every envelope type.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum Envelope {
            $($variant($ty),)+
        }

        impl Envelope {
            pub fn kind(&self) -> EnvelopeKind {
                match self {
                    $(Envelope::$variant(_) => EnvelopeKind::$variant,)+
                }
            }

            pub fn pack(&self) -> Vec<u8> {
                match self {
                    $(Envelope::$variant(inner) => inner.pack(),)+
                }
            }

            /// Unpack into the variant already held by `self`.
            pub fn unpack(&mut self, data: &[u8]) -> Result<(), CodecError> {
                match self {
                    $(Envelope::$variant(inner) => inner.unpack(data),)+
                }
            }

            pub fn decode(kind: EnvelopeKind, data: &[u8]) -> Result<Self, CodecError> {
                match kind {
                    $(EnvelopeKind::$variant => <$ty as EnvelopeCodec>::unpacked(data).map(Envelope::$variant),)+
                }
            }

            pub fn from_json(kind: EnvelopeKind, value: Value) -> serde_json::Result<Self> {
                match kind {
                    $(EnvelopeKind::$variant => serde_json::from_value::<$ty>(value).map(Envelope::$variant),)+
                }
            }

            pub fn to_json(&self) -> serde_json::Result<Value> {
                match self {
                    $(Envelope::$variant(inner) => serde_json::to_value(inner),)+
                }
            }
        }

        impl Randomize for Envelope {
            fn randomize<R: rand::Rng>(&mut self, rng: &mut R, limits: &Limits) {
                match self {
                    $(Envelope::$variant(inner) => inner.randomize(rng, limits),)+
                }
            }
        }

        $(
            impl Registered for $ty {}

            impl EnvelopeCodec for $ty {}

            impl From<$ty> for Envelope {
                fn from(value: $ty) -> Self {
                    Envelope::$variant(value)
                }
            }
        )+
    };
}

envelope_kinds! {
    TeleporterMessage(TeleporterMessage) => "teleporter_message",
    TeleporterMessageReceipt(TeleporterMessageReceipt) => "teleporter_message_receipt",
    TeleporterFeeInfo(TeleporterFeeInfo) => "teleporter_fee_info",
    TeleporterMessageInput(TeleporterMessageInput) => "teleporter_message_input",
    ProtocolRegistryEntry(ProtocolRegistryEntry) => "protocol_registry_entry",
    ValidatorSetSigMessage(ValidatorSetSigMessage) => "validator_set_sig_message",
}

impl fmt::Display for EnvelopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnvelopeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_").to_ascii_lowercase();
        EnvelopeKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = EnvelopeKind::ALL.iter().map(|k| k.as_str()).collect();
                format!("unknown envelope kind '{s}'; expected one of: {}", known.join(", "))
            })
    }
}

#[cfg(test)]
#[path = "kind_tests.rs"]
mod tests;
