use thiserror::Error;

/// Failure while packing or unpacking ABI words.
///
/// Every variant describes untrusted or invalid input; none of them is
/// retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A value does not fit the width or signedness of its declared type.
    #[error("{ty} encoding violation: {reason}")]
    EncodingViolation { ty: String, reason: String },

    /// An offset, length or element count points past the end of the buffer.
    #[error("truncated input: need {needed} bytes, buffer has {available}")]
    TruncatedInput { needed: usize, available: usize },

    /// Structural mismatch that is neither a width violation nor a truncation.
    #[error("decode error: {0}")]
    Decode(String),
}

impl CodecError {
    pub(crate) fn violation(ty: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::EncodingViolation {
            ty: ty.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn truncated(needed: usize, available: usize) -> Self {
        Self::TruncatedInput { needed, available }
    }

    pub fn is_truncation(&self) -> bool {
        matches!(self, Self::TruncatedInput { .. })
    }
}
