//! Fixed-width scalar slots.
//!
//! Every scalar occupies exactly one 32-byte word. Integers are big-endian;
//! unsigned values are zero-extended and signed values are sign-extended to
//! the full word. Decoding rejects words whose high-order bytes are not the
//! canonical extension for the declared width.

use alloy_primitives::{Address, FixedBytes, I256, U256};

use super::error::CodecError;

pub const WORD_SIZE: usize = 32;

pub type Word = [u8; WORD_SIZE];

const ADDRESS_PADDING: usize = WORD_SIZE - 20;

/// Borrow the word starting at `at`, failing if the buffer ends first.
pub fn read_word(data: &[u8], at: usize) -> Result<&Word, CodecError> {
    let end = at
        .checked_add(WORD_SIZE)
        .ok_or_else(|| CodecError::truncated(usize::MAX, data.len()))?;
    data.get(at..end)
        .and_then(|slice| slice.try_into().ok())
        .ok_or_else(|| CodecError::truncated(end, data.len()))
}

/// Encode a length, count or offset.
pub fn usize_word(value: usize) -> Word {
    let mut word = [0u8; WORD_SIZE];
    word[WORD_SIZE - 8..].copy_from_slice(&(value as u64).to_be_bytes());
    word
}

/// Decode a length, count or offset word.
///
/// Values that cannot be represented as `usize` saturate to `usize::MAX`, so
/// the caller's bounds check reports them as truncation.
pub fn read_usize(data: &[u8], at: usize) -> Result<usize, CodecError> {
    let word = read_word(data, at)?;
    if word[..WORD_SIZE - 8].iter().any(|b| *b != 0) {
        return Ok(usize::MAX);
    }
    let mut low = [0u8; 8];
    low.copy_from_slice(&word[WORD_SIZE - 8..]);
    Ok(usize::try_from(u64::from_be_bytes(low)).unwrap_or(usize::MAX))
}

fn check_int_width(prefix: &str, bits: usize) -> Result<(), CodecError> {
    if bits == 0 || bits > 256 || bits % 8 != 0 {
        return Err(CodecError::violation(
            format!("{prefix}{bits}"),
            "width must be a multiple of 8 between 8 and 256",
        ));
    }
    Ok(())
}

/// Number of leading bytes that must carry the zero/sign extension.
fn extension_len(bits: usize) -> usize {
    WORD_SIZE - bits / 8
}

/// True when the high-order bytes of `word` are zero for an unsigned value of
/// `bits` width.
pub(crate) fn is_zero_extended(word: &Word, bits: usize) -> bool {
    word[..extension_len(bits)].iter().all(|b| *b == 0)
}

/// True when the high-order bytes of `word` are a sign extension of the
/// `bits`-wide two's-complement value it holds.
pub(crate) fn is_sign_extended(word: &Word, bits: usize) -> bool {
    let ext = extension_len(bits);
    if ext == 0 {
        return true;
    }
    let fill = if word[ext] & 0x80 != 0 { 0xff } else { 0x00 };
    word[..ext].iter().all(|b| *b == fill)
}

pub fn encode_uint(value: U256, bits: usize) -> Result<Word, CodecError> {
    check_int_width("uint", bits)?;
    let word: Word = value.to_be_bytes::<WORD_SIZE>();
    if !is_zero_extended(&word, bits) {
        return Err(CodecError::violation(
            format!("uint{bits}"),
            format!("value {value} does not fit"),
        ));
    }
    Ok(word)
}

pub fn decode_uint(word: &Word, bits: usize) -> Result<U256, CodecError> {
    check_int_width("uint", bits)?;
    if !is_zero_extended(word, bits) {
        return Err(CodecError::violation(
            format!("uint{bits}"),
            "high-order bytes are not zero",
        ));
    }
    Ok(U256::from_be_bytes(*word))
}

pub fn encode_int(value: I256, bits: usize) -> Result<Word, CodecError> {
    check_int_width("int", bits)?;
    let word: Word = value.into_raw().to_be_bytes::<WORD_SIZE>();
    if !is_sign_extended(&word, bits) {
        return Err(CodecError::violation(
            format!("int{bits}"),
            format!("value {value} does not fit"),
        ));
    }
    Ok(word)
}

pub fn decode_int(word: &Word, bits: usize) -> Result<I256, CodecError> {
    check_int_width("int", bits)?;
    if !is_sign_extended(word, bits) {
        return Err(CodecError::violation(
            format!("int{bits}"),
            "high-order bytes are not a sign extension",
        ));
    }
    Ok(I256::from_raw(U256::from_be_bytes(*word)))
}

pub fn encode_bool(value: bool) -> Word {
    let mut word = [0u8; WORD_SIZE];
    word[WORD_SIZE - 1] = u8::from(value);
    word
}

pub fn decode_bool(word: &Word) -> Result<bool, CodecError> {
    if !is_zero_extended(word, 8) {
        return Err(CodecError::violation("bool", "high-order bytes are not zero"));
    }
    match word[WORD_SIZE - 1] {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(CodecError::violation(
            "bool",
            format!("expected 0 or 1, found {other}"),
        )),
    }
}

pub fn encode_address(address: &Address) -> Word {
    let mut word = [0u8; WORD_SIZE];
    word[ADDRESS_PADDING..].copy_from_slice(address.as_slice());
    word
}

pub fn decode_address(word: &Word) -> Result<Address, CodecError> {
    if word[..ADDRESS_PADDING].iter().any(|b| *b != 0) {
        return Err(CodecError::violation(
            "address",
            "high-order 12 bytes are not zero",
        ));
    }
    Ok(Address::from_slice(&word[ADDRESS_PADDING..]))
}

/// Left-align a `bytesN` value in a word.
pub fn encode_fixed_bytes(bytes: &[u8]) -> Result<Word, CodecError> {
    if bytes.is_empty() || bytes.len() > WORD_SIZE {
        return Err(CodecError::violation(
            format!("bytes{}", bytes.len()),
            "length must be between 1 and 32",
        ));
    }
    let mut word = [0u8; WORD_SIZE];
    word[..bytes.len()].copy_from_slice(bytes);
    Ok(word)
}

/// Read a `bytesN` value. Bytes past `N` are padding and are not inspected.
pub fn decode_fixed_bytes<const N: usize>(word: &Word) -> Result<FixedBytes<N>, CodecError> {
    if N == 0 || N > WORD_SIZE {
        return Err(CodecError::violation(
            format!("bytes{N}"),
            "length must be between 1 and 32",
        ));
    }
    let mut out = [0u8; N];
    out.copy_from_slice(&word[..N]);
    Ok(FixedBytes::new(out))
}

/// Number of bytes `len` occupies once padded to a word boundary.
pub fn padded_len(len: usize) -> usize {
    len.div_ceil(WORD_SIZE) * WORD_SIZE
}

#[cfg(test)]
#[path = "word_tests.rs"]
mod tests;
