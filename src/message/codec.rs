use crate::abi::{self, AbiType, CodecError};

/// Pack/unpack capability shared by every envelope type.
///
/// Callers holding any envelope only ever need these two operations. Packing
/// cannot fail: every value representable by the Rust type is a valid ABI
/// value. Unpacking replaces `self` only when the whole buffer decodes, so a
/// rejected payload never leaves a partially populated envelope behind.
///
/// The capability is granted only by the envelope kind list, so a type that
/// is not a discovered kind cannot be packed as an envelope:
///
/// ```compile_fail,E0277
/// use teleporter_abi::abi::{AbiType, CodecError, ParamType};
/// use teleporter_abi::message::EnvelopeCodec;
///
/// #[derive(Default)]
/// struct Unlisted(u64);
///
/// impl AbiType for Unlisted {
///     const DYNAMIC: bool = false;
///     const HEAD_SIZE: usize = 32;
///
///     fn param_type() -> ParamType {
///         u64::param_type()
///     }
///
///     fn encode_body(&self, out: &mut Vec<u8>) {
///         self.0.encode_body(out)
///     }
///
///     fn decode_body(data: &[u8]) -> Result<Self, CodecError> {
///         u64::decode_body(data).map(Unlisted)
///     }
/// }
///
/// impl EnvelopeCodec for Unlisted {}
/// ```
pub trait EnvelopeCodec: AbiType + Default + sealed::Registered {
    fn pack(&self) -> Vec<u8> {
        abi::encode(self)
    }

    fn unpack(&mut self, data: &[u8]) -> Result<(), CodecError> {
        *self = abi::decode(data)?;
        Ok(())
    }

    /// Unpack into a fresh zero-valued envelope.
    fn unpacked(data: &[u8]) -> Result<Self, CodecError> {
        let mut value = Self::default();
        value.unpack(data)?;
        Ok(value)
    }
}

pub mod sealed {
    /// Implemented by `envelope_kinds!` for every listed kind.
    pub trait Registered {}
}
