use std::fmt;

use alloy_primitives::{Address, Bytes, FixedBytes, I256, U256};

use super::error::CodecError;
use super::record::{RecordDecoder, RecordEncoder};
use super::word::{self, WORD_SIZE, padded_len, read_usize, read_word, usize_word};

/// Declared shape of an encodable field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamType {
    Uint(usize),
    Int(usize),
    Bool,
    Address,
    FixedBytes(usize),
    Bytes,
    String,
    Array(Box<ParamType>),
    Tuple(Vec<ParamType>),
}

impl ParamType {
    pub fn is_dynamic(&self) -> bool {
        match self {
            ParamType::Bytes | ParamType::String | ParamType::Array(_) => true,
            ParamType::Tuple(fields) => fields.iter().any(ParamType::is_dynamic),
            _ => false,
        }
    }

    /// Reject shapes the codec cannot lay out.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            ParamType::Uint(bits) | ParamType::Int(bits) => {
                if *bits == 0 || *bits > 256 || bits % 8 != 0 {
                    return Err(format!("{self} has an invalid integer width"));
                }
                Ok(())
            }
            ParamType::FixedBytes(len) => {
                if *len == 0 || *len > WORD_SIZE {
                    return Err(format!("{self} is outside bytes1..bytes32"));
                }
                Ok(())
            }
            ParamType::Array(inner) => inner.validate(),
            ParamType::Tuple(fields) => {
                if fields.is_empty() {
                    return Err("empty tuples have no encoding".to_string());
                }
                fields.iter().try_for_each(ParamType::validate)
            }
            ParamType::Bool | ParamType::Address | ParamType::Bytes | ParamType::String => Ok(()),
        }
    }
}

/// Canonical type signature, as hashed into selectors and event topics.
impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Uint(bits) => write!(f, "uint{bits}"),
            ParamType::Int(bits) => write!(f, "int{bits}"),
            ParamType::Bool => f.write_str("bool"),
            ParamType::Address => f.write_str("address"),
            ParamType::FixedBytes(len) => write!(f, "bytes{len}"),
            ParamType::Bytes => f.write_str("bytes"),
            ParamType::String => f.write_str("string"),
            ParamType::Array(inner) => write!(f, "{inner}[]"),
            ParamType::Tuple(fields) => {
                f.write_str("(")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{field}")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// A type with a fixed ABI layout.
///
/// Static types write their full encoding inline into the enclosing head.
/// Dynamic types occupy one offset word in the head and write their body into
/// the tail. `encode_body` and `decode_body` always operate on the body: for
/// a dynamic type that is the region an offset points at.
pub trait AbiType: Sized {
    /// True when the encoded size depends on the value.
    const DYNAMIC: bool;

    /// Bytes this type occupies in an enclosing head.
    const HEAD_SIZE: usize;

    fn param_type() -> ParamType;

    /// Size of the body written by [`AbiType::encode_body`].
    fn encoded_size(&self) -> usize {
        Self::HEAD_SIZE
    }

    fn encode_body(&self, out: &mut Vec<u8>);

    /// Decode from a buffer whose first byte is the start of the body.
    fn decode_body(data: &[u8]) -> Result<Self, CodecError>;
}

macro_rules! impl_unsigned {
    ($($ty:ty),+) => {$(
        impl AbiType for $ty {
            const DYNAMIC: bool = false;
            const HEAD_SIZE: usize = WORD_SIZE;

            fn param_type() -> ParamType {
                ParamType::Uint(<$ty>::BITS as usize)
            }

            fn encode_body(&self, out: &mut Vec<u8>) {
                let mut word = [0u8; WORD_SIZE];
                let bytes = self.to_be_bytes();
                word[WORD_SIZE - bytes.len()..].copy_from_slice(&bytes);
                out.extend_from_slice(&word);
            }

            fn decode_body(data: &[u8]) -> Result<Self, CodecError> {
                let word = read_word(data, 0)?;
                if !word::is_zero_extended(word, <$ty>::BITS as usize) {
                    return Err(CodecError::violation(
                        format!("uint{}", <$ty>::BITS),
                        "high-order bytes are not zero",
                    ));
                }
                const LEN: usize = std::mem::size_of::<$ty>();
                let mut bytes = [0u8; LEN];
                bytes.copy_from_slice(&word[WORD_SIZE - LEN..]);
                Ok(<$ty>::from_be_bytes(bytes))
            }
        }
    )+};
}

macro_rules! impl_signed {
    ($($ty:ty),+) => {$(
        impl AbiType for $ty {
            const DYNAMIC: bool = false;
            const HEAD_SIZE: usize = WORD_SIZE;

            fn param_type() -> ParamType {
                ParamType::Int(<$ty>::BITS as usize)
            }

            fn encode_body(&self, out: &mut Vec<u8>) {
                let mut word = if *self < 0 { [0xffu8; WORD_SIZE] } else { [0u8; WORD_SIZE] };
                let bytes = self.to_be_bytes();
                word[WORD_SIZE - bytes.len()..].copy_from_slice(&bytes);
                out.extend_from_slice(&word);
            }

            fn decode_body(data: &[u8]) -> Result<Self, CodecError> {
                let word = read_word(data, 0)?;
                if !word::is_sign_extended(word, <$ty>::BITS as usize) {
                    return Err(CodecError::violation(
                        format!("int{}", <$ty>::BITS),
                        "high-order bytes are not a sign extension",
                    ));
                }
                const LEN: usize = std::mem::size_of::<$ty>();
                let mut bytes = [0u8; LEN];
                bytes.copy_from_slice(&word[WORD_SIZE - LEN..]);
                Ok(<$ty>::from_be_bytes(bytes))
            }
        }
    )+};
}

impl_unsigned!(u8, u16, u32, u64, u128);
impl_signed!(i8, i16, i32, i64, i128);

impl AbiType for U256 {
    const DYNAMIC: bool = false;
    const HEAD_SIZE: usize = WORD_SIZE;

    fn param_type() -> ParamType {
        ParamType::Uint(256)
    }

    fn encode_body(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_be_bytes::<WORD_SIZE>());
    }

    fn decode_body(data: &[u8]) -> Result<Self, CodecError> {
        word::decode_uint(read_word(data, 0)?, 256)
    }
}

impl AbiType for I256 {
    const DYNAMIC: bool = false;
    const HEAD_SIZE: usize = WORD_SIZE;

    fn param_type() -> ParamType {
        ParamType::Int(256)
    }

    fn encode_body(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.into_raw().to_be_bytes::<WORD_SIZE>());
    }

    fn decode_body(data: &[u8]) -> Result<Self, CodecError> {
        word::decode_int(read_word(data, 0)?, 256)
    }
}

impl AbiType for bool {
    const DYNAMIC: bool = false;
    const HEAD_SIZE: usize = WORD_SIZE;

    fn param_type() -> ParamType {
        ParamType::Bool
    }

    fn encode_body(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&word::encode_bool(*self));
    }

    fn decode_body(data: &[u8]) -> Result<Self, CodecError> {
        word::decode_bool(read_word(data, 0)?)
    }
}

impl AbiType for Address {
    const DYNAMIC: bool = false;
    const HEAD_SIZE: usize = WORD_SIZE;

    fn param_type() -> ParamType {
        ParamType::Address
    }

    fn encode_body(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&word::encode_address(self));
    }

    fn decode_body(data: &[u8]) -> Result<Self, CodecError> {
        word::decode_address(read_word(data, 0)?)
    }
}

impl<const N: usize> AbiType for FixedBytes<N> {
    const DYNAMIC: bool = false;
    const HEAD_SIZE: usize = WORD_SIZE;

    fn param_type() -> ParamType {
        ParamType::FixedBytes(N)
    }

    fn encode_body(&self, out: &mut Vec<u8>) {
        const { assert!(N > 0 && N <= WORD_SIZE, "bytesN must be bytes1..bytes32") };
        let mut word = [0u8; WORD_SIZE];
        word[..N].copy_from_slice(self.as_slice());
        out.extend_from_slice(&word);
    }

    fn decode_body(data: &[u8]) -> Result<Self, CodecError> {
        word::decode_fixed_bytes::<N>(read_word(data, 0)?)
    }
}

fn encode_byte_string(data: &[u8], out: &mut Vec<u8>) {
    out.extend_from_slice(&usize_word(data.len()));
    out.extend_from_slice(data);
    out.resize(out.len() + padded_len(data.len()) - data.len(), 0);
}

/// Borrow the data of a length-prefixed byte string. Padding after the data
/// is neither required nor inspected.
fn decode_byte_string(data: &[u8]) -> Result<&[u8], CodecError> {
    let len = read_usize(data, 0)?;
    let end = len
        .checked_add(WORD_SIZE)
        .ok_or_else(|| CodecError::truncated(usize::MAX, data.len()))?;
    data.get(WORD_SIZE..end)
        .ok_or_else(|| CodecError::truncated(end, data.len()))
}

impl AbiType for Bytes {
    const DYNAMIC: bool = true;
    const HEAD_SIZE: usize = WORD_SIZE;

    fn param_type() -> ParamType {
        ParamType::Bytes
    }

    fn encoded_size(&self) -> usize {
        WORD_SIZE + padded_len(self.len())
    }

    fn encode_body(&self, out: &mut Vec<u8>) {
        encode_byte_string(self, out);
    }

    fn decode_body(data: &[u8]) -> Result<Self, CodecError> {
        decode_byte_string(data).map(Bytes::copy_from_slice)
    }
}

impl AbiType for String {
    const DYNAMIC: bool = true;
    const HEAD_SIZE: usize = WORD_SIZE;

    fn param_type() -> ParamType {
        ParamType::String
    }

    fn encoded_size(&self) -> usize {
        WORD_SIZE + padded_len(self.len())
    }

    fn encode_body(&self, out: &mut Vec<u8>) {
        encode_byte_string(self.as_bytes(), out);
    }

    fn decode_body(data: &[u8]) -> Result<Self, CodecError> {
        let raw = decode_byte_string(data)?;
        std::str::from_utf8(raw)
            .map(str::to_owned)
            .map_err(|err| CodecError::Decode(format!("string is not valid UTF-8: {err}")))
    }
}

/// `T[]`: a count word followed by the elements laid out as a record.
impl<T: AbiType> AbiType for Vec<T> {
    const DYNAMIC: bool = true;
    const HEAD_SIZE: usize = WORD_SIZE;

    fn param_type() -> ParamType {
        ParamType::Array(Box::new(T::param_type()))
    }

    fn encoded_size(&self) -> usize {
        WORD_SIZE + RecordEncoder::from_slice(self).encoded_size()
    }

    fn encode_body(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&usize_word(self.len()));
        RecordEncoder::from_slice(self).write_to(out);
    }

    fn decode_body(data: &[u8]) -> Result<Self, CodecError> {
        let count = read_usize(data, 0)?;
        let elements = data.get(WORD_SIZE..).unwrap_or_default();
        let needed = count
            .checked_mul(T::HEAD_SIZE)
            .ok_or_else(|| CodecError::truncated(usize::MAX, elements.len()))?;
        if needed > elements.len() {
            return Err(CodecError::truncated(needed, elements.len()));
        }

        let mut decoder = RecordDecoder::new(elements);
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            out.push(decoder.next()?);
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
