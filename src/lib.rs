//! mutf8: Modified UTF-8 codec for class-file string constants
//!
//! This crate converts between UTF-16 code units and the "Modified UTF-8"
//! byte form used by class-file constant pools and JNI. It differs from
//! standard UTF-8 in two ways:
//!
//! - `U+0000` is written as the overlong pair `C0 80`, so encoded text never
//!   contains a zero byte unless a terminator is requested.
//! - Supplementary characters are written as two three-byte sequences, one
//!   per surrogate half, never as a single four-byte sequence.
//!
//! # Encoding table
//!
//! ```text
//! +-----------------+----------------------------+-------+
//! | Code unit       | Bytes                      | Width |
//! +-----------------+----------------------------+-------+
//! | 0x0001..=0x007F | 0xxxxxxx                   | 1     |
//! | 0x0000,         | 110xxxxx 10xxxxxx          | 2     |
//! | 0x0080..=0x07FF |                            |       |
//! | 0x0800..=0xFFFF | 1110xxxx 10xxxxxx 10xxxxxx | 3     |
//! +-----------------+----------------------------+-------+
//! ```
//!
//! # Features
//!
//! - Exact up-front sizing: one allocation per encode or decode
//! - Allocation-free encoding into user-provided buffers
//! - Fail-fast decoding with byte offsets in every error
//! - Provenance-tagged immutable byte strings
//! - `no_std` support with `alloc`
//!
//! # Example
//!
//! ```rust
//! use mutf8::*;
//!
//! let text: Vec<u16> = "a\u{0}\u{1F600}".encode_utf16().collect();
//!
//! let bytes = encode(&text, Terminator::None);
//! assert_eq!(bytes, [0x61, 0xC0, 0x80, 0xED, 0xA0, 0xBD, 0xED, 0xB8, 0x80]);
//! assert_eq!(bytes.len(), encoded_len(&text));
//!
//! let decoded = decode(&bytes)?;
//! assert_eq!(decoded, text);
//! # Ok::<(), mutf8::Error>(())
//! ```

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod class;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod handle;

#[cfg(all(feature = "std", test))]
pub mod bench;

// Re-export main types
pub use class::CodeUnitClass;
pub use decoder::{decode, decode_to_string, decoded_len, Mutf8Reader};
pub use encoder::{
    encode, encode_into, encode_range, encode_str, encoded_len, Mutf8Writer, Terminator,
};
pub use error::{Error, Result};
pub use handle::{encode_to_handle, ByteString};

/// Encoded form of `U+0000`
pub const NUL_ENCODING: [u8; 2] = [0xC0, 0x80];

/// Terminator byte appended for C-style consumers
pub const TERMINATOR: u8 = 0x00;

/// Maximum bytes a single code unit encodes to
pub const MAX_BYTES_PER_UNIT: usize = 3;
