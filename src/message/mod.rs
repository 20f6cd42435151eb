#[macro_use]
mod macros;

mod call;
mod codec;
mod event;
mod governance;
mod kind;
mod registry;
mod teleporter;

pub use call::{MessengerCall, SELECTOR_SIZE, Selector};
pub use codec::EnvelopeCodec;
pub use event::{
    EventLog, MessageExecuted, MessengerEvent, ReceiveCrossChainMessage, SendCrossChainMessage,
};
pub use governance::ValidatorSetSigMessage;
pub use kind::{Envelope, EnvelopeKind};
pub use registry::ProtocolRegistryEntry;
pub use teleporter::{
    TeleporterFeeInfo, TeleporterMessage, TeleporterMessageInput, TeleporterMessageReceipt,
};
