//! Immutable, provenance-tagged byte strings
//!
//! A [`ByteString<T>`] owns Modified UTF-8 bytes that will not change after
//! construction. The tag `T` never exists at runtime; it only keeps, say, a
//! method name from being passed where a type descriptor is expected.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::Deref;

use crate::decoder;
use crate::encoder::{self, Terminator};
use crate::error::Result;

/// Untagged bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Raw {}

/// Simple or qualified names (classes, fields, methods)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Name {}

/// Field and type descriptors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {}

/// Method descriptors and generic signatures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signature {}

/// Owned, immutable byte sequence tagged with its provenance `T`
pub struct ByteString<T = Raw> {
    bytes: Box<[u8]>,
    _tag: PhantomData<fn() -> T>,
}

impl<T> ByteString<T> {
    /// Wrap an owned buffer
    #[inline]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes: bytes.into_boxed_slice(),
            _tag: PhantomData,
        }
    }

    /// Encode UTF-16 text with no terminator and wrap the result
    #[inline]
    pub fn from_utf16(text: &[u16]) -> Self {
        Self::new(encoder::encode(text, Terminator::None))
    }

    /// Encode a Rust string with no terminator and wrap the result
    #[inline]
    pub fn from_text(s: &str) -> Self {
        Self::new(encoder::encode_str(s, Terminator::None))
    }

    /// Decode the held bytes back into UTF-16 code units
    #[inline]
    pub fn to_utf16(&self) -> Result<Vec<u16>> {
        decoder::decode(&self.bytes)
    }

    /// Borrow the encoded bytes
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Encoded length in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if no bytes are held
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Give the buffer back
    #[inline]
    pub fn into_boxed_bytes(self) -> Box<[u8]> {
        self.bytes
    }

    /// Reinterpret the same bytes under another tag
    #[inline]
    pub fn retag<U>(self) -> ByteString<U> {
        ByteString {
            bytes: self.bytes,
            _tag: PhantomData,
        }
    }
}

/// Encode `text` with no terminator into a tagged byte string
#[inline]
pub fn encode_to_handle<T>(text: &[u16]) -> ByteString<T> {
    ByteString::from_utf16(text)
}

impl<T> Clone for ByteString<T> {
    fn clone(&self) -> Self {
        Self {
            bytes: self.bytes.clone(),
            _tag: PhantomData,
        }
    }
}

impl<T> PartialEq for ByteString<T> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl<T> Eq for ByteString<T> {}

impl<T> Hash for ByteString<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl<T> fmt::Debug for ByteString<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Printable ASCII as-is, everything else escaped
        f.write_str("b\"")?;
        for &b in self.bytes.iter() {
            for c in core::ascii::escape_default(b) {
                fmt::Write::write_char(f, c as char)?;
            }
        }
        f.write_str("\"")
    }
}

impl<T> Deref for ByteString<T> {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<T> AsRef<[u8]> for ByteString<T> {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl<T> From<Vec<u8>> for ByteString<T> {
    #[inline]
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}
