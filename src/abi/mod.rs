//! Word-aligned binary encoding compatible with the EVM contract ABI.

mod error;
mod record;
mod types;
pub mod word;

pub use error::CodecError;
pub use record::{RecordDecoder, RecordEncoder};
pub use types::{AbiType, ParamType};
pub use word::{WORD_SIZE, Word};

/// Encode `value` as a one-element argument list.
///
/// Dynamic values are therefore preceded by the offset word `0x20`, exactly
/// as `abi.encode(value)` produces them on chain.
pub fn encode<T: AbiType>(value: &T) -> Vec<u8> {
    let mut params = RecordEncoder::new();
    params.push(value);
    params.finish()
}

/// Decode a one-element argument list produced by [`encode`].
///
/// Bytes past the regions the value occupies are ignored.
pub fn decode<T: AbiType>(data: &[u8]) -> Result<T, CodecError> {
    RecordDecoder::new(data).next()
}
