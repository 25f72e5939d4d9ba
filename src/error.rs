//! Error types for the Modified UTF-8 codec

use thiserror::Error;

/// Errors that can occur while decoding Modified UTF-8 or writing into a caller buffer
///
/// Decoding errors carry the byte offset nearest the fault so callers can
/// point at the broken constant in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A multi-byte sequence starting at `offset` runs past the end of input
    #[error("malformed input: partial character at end (sequence starts at byte {offset})")]
    TruncatedSequence {
        /// Offset of the leading byte of the incomplete sequence
        offset: usize,
    },
    /// The byte at `offset` should be a `10xxxxxx` continuation byte but is not
    #[error("malformed input around byte {offset}: expected continuation byte")]
    InvalidContinuationByte {
        /// Offset of the offending byte
        offset: usize,
    },
    /// The byte at `offset` cannot start a sequence (orphan continuation or `1111xxxx`)
    #[error("malformed input around byte {offset}: invalid leading byte")]
    InvalidLeadingByte {
        /// Offset of the offending byte
        offset: usize,
    },
    /// Decoded text holds an unpaired surrogate at unit index `offset`
    #[error("decoded text has an unpaired surrogate at unit {offset}")]
    UnpairedSurrogate {
        /// Index of the lone surrogate in the decoded code units
        offset: usize,
    },
    /// Buffer too small for the operation
    #[error("buffer too small for operation")]
    ShortBuffer,
}

impl Error {
    /// Offset of the fault, if the error has one
    pub const fn offset(&self) -> Option<usize> {
        match *self {
            Error::TruncatedSequence { offset }
            | Error::InvalidContinuationByte { offset }
            | Error::InvalidLeadingByte { offset }
            | Error::UnpairedSurrogate { offset } => Some(offset),
            Error::ShortBuffer => None,
        }
    }

    /// Returns true for errors raised by malformed encoded input
    pub const fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Error::TruncatedSequence { .. }
                | Error::InvalidContinuationByte { .. }
                | Error::InvalidLeadingByte { .. }
        )
    }
}

/// Result type alias for codec operations
pub type Result<T> = core::result::Result<T, Error>;
