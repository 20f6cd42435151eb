//! Head/tail layout of records, argument lists and array elements.

use super::error::CodecError;
use super::types::AbiType;
use super::word::{WORD_SIZE, read_usize, usize_word};

/// Object-safe view of an [`AbiType`] value, so records can mix field types.
trait Field {
    fn is_dynamic(&self) -> bool;
    fn head_size(&self) -> usize;
    fn body_size(&self) -> usize;
    fn write_body(&self, out: &mut Vec<u8>);
}

impl<T: AbiType> Field for T {
    fn is_dynamic(&self) -> bool {
        T::DYNAMIC
    }

    fn head_size(&self) -> usize {
        T::HEAD_SIZE
    }

    fn body_size(&self) -> usize {
        self.encoded_size()
    }

    fn write_body(&self, out: &mut Vec<u8>) {
        self.encode_body(out);
    }
}

/// Lays out an ordered list of fields.
///
/// Static fields are written inline in the head. Each dynamic field gets an
/// offset word in the head, relative to the first byte of the record, and its
/// body is appended to the tail in declaration order. All offsets are computed
/// from body sizes before anything is written, so no head word is ever
/// patched after the fact.
#[derive(Default)]
pub struct RecordEncoder<'a> {
    fields: Vec<&'a dyn Field>,
}

impl<'a> RecordEncoder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_slice<T: AbiType>(values: &'a [T]) -> Self {
        let mut encoder = Self {
            fields: Vec::with_capacity(values.len()),
        };
        for value in values {
            encoder.push(value);
        }
        encoder
    }

    pub fn push<T: AbiType>(&mut self, value: &'a T) -> &mut Self {
        self.fields.push(value);
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn head_size(&self) -> usize {
        self.fields.iter().map(|field| field.head_size()).sum()
    }

    pub fn encoded_size(&self) -> usize {
        self.head_size() + self.tail_sizes().iter().sum::<usize>()
    }

    fn tail_sizes(&self) -> Vec<usize> {
        self.fields
            .iter()
            .filter(|field| field.is_dynamic())
            .map(|field| field.body_size())
            .collect()
    }

    pub fn write_to(&self, out: &mut Vec<u8>) {
        let head_size = self.head_size();
        let tail_sizes = self.tail_sizes();

        let mut offsets = Vec::with_capacity(tail_sizes.len());
        let mut next = head_size;
        for size in &tail_sizes {
            offsets.push(next);
            next += size;
        }
        out.reserve(next);

        let mut offsets = offsets.into_iter();
        for field in &self.fields {
            if field.is_dynamic() {
                let offset = offsets.next().unwrap_or(next);
                out.extend_from_slice(&usize_word(offset));
            } else {
                field.write_body(out);
            }
        }
        for field in self.fields.iter().filter(|field| field.is_dynamic()) {
            field.write_body(out);
        }
    }

    pub fn finish(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_size());
        self.write_to(&mut out);
        out
    }
}

/// Reads fields of a record in declaration order.
///
/// `data` starts at the first byte of the record; dynamic fields are reached
/// through offsets relative to that byte and may appear in any order.
pub struct RecordDecoder<'a> {
    data: &'a [u8],
    cursor: usize,
}

impl<'a> RecordDecoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, cursor: 0 }
    }

    /// Bytes of head consumed so far.
    pub fn position(&self) -> usize {
        self.cursor
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next<T: AbiType>(&mut self) -> Result<T, CodecError> {
        if T::DYNAMIC {
            let offset = read_usize(self.data, self.cursor)?;
            self.cursor += WORD_SIZE;
            if offset >= self.data.len() {
                return Err(CodecError::truncated(
                    offset.saturating_add(WORD_SIZE),
                    self.data.len(),
                ));
            }
            T::decode_body(&self.data[offset..])
        } else {
            let end = self.cursor + T::HEAD_SIZE;
            let head = self
                .data
                .get(self.cursor..end)
                .ok_or_else(|| CodecError::truncated(end, self.data.len()))?;
            let value = T::decode_body(head)?;
            self.cursor = end;
            Ok(value)
        }
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
