//! Modified UTF-8 decoder
//!
//! Decoding is a single forward pass that stops at the first malformed byte.
//! There is no replacement-character fallback and no partial result: a
//! caller either gets every code unit or an [`Error`] with the fault offset.
//!
//! The decoder is lenient in the same places the format's producers are:
//! unpaired surrogates and overlong forms other than `C0 80` decode to
//! whatever 16-bit value their bits spell.

use alloc::string::String;
use alloc::vec::Vec;

use crate::class::{is_continuation, CodeUnitClass};
use crate::error::{Error, Result};

/// Cursor decoding one code unit at a time from a borrowed buffer
#[derive(Debug, Clone)]
pub struct Mutf8Reader<'a> {
    buf: &'a [u8],
    pos: usize,
    failed: bool,
}

impl<'a> Mutf8Reader<'a> {
    /// Create new reader for the given buffer
    #[inline]
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            failed: false,
        }
    }

    /// Get current read position
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get remaining bytes in reader
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Check if reader is at end
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Decode the next code unit
    ///
    /// Returns `Ok(None)` at end of input. On error the position is left at
    /// the leading byte of the bad sequence.
    #[inline]
    pub fn next_unit(&mut self) -> Result<Option<u16>> {
        if self.is_at_end() {
            return Ok(None);
        }

        let i = self.pos;
        let b0 = self.buf[i];

        let unit = match CodeUnitClass::from_leading_byte(b0) {
            Some(CodeUnitClass::Ascii) => {
                self.pos += 1;
                b0 as u16
            }
            Some(CodeUnitClass::TwoByte) => {
                let b1 = self.continuation(i, 2, 1)?;
                self.pos += 2;
                ((b0 as u16 & 0x1F) << 6) | (b1 as u16 & 0x3F)
            }
            Some(CodeUnitClass::ThreeByte) => {
                let b1 = self.continuation(i, 3, 1)?;
                let b2 = self.continuation(i, 3, 2)?;
                self.pos += 3;
                ((b0 as u16 & 0x0F) << 12) | ((b1 as u16 & 0x3F) << 6) | (b2 as u16 & 0x3F)
            }
            None => return Err(Error::InvalidLeadingByte { offset: i }),
        };

        Ok(Some(unit))
    }

    /// Fetch continuation byte `k` of a `width`-byte sequence starting at `start`
    #[inline]
    fn continuation(&self, start: usize, width: usize, k: usize) -> Result<u8> {
        if start + width > self.buf.len() {
            return Err(Error::TruncatedSequence { offset: start });
        }

        let byte = self.buf[start + k];
        if !is_continuation(byte) {
            return Err(Error::InvalidContinuationByte { offset: start + k });
        }
        Ok(byte)
    }
}

impl Iterator for Mutf8Reader<'_> {
    type Item = Result<u16>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.next_unit() {
            Ok(unit) => unit.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        // Each unit takes at least one byte; a bad byte yields one error item
        let remaining = self.remaining();
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl core::iter::FusedIterator for Mutf8Reader<'_> {}

/// Decode Modified UTF-8 bytes into UTF-16 code units
///
/// The output is sized to `bytes.len()` up front, which bounds the unit
/// count, so it never reallocates.
pub fn decode(bytes: &[u8]) -> Result<Vec<u16>> {
    let mut out = Vec::with_capacity(bytes.len());

    // ASCII prefix
    let ascii = bytes.iter().take_while(|&&b| b < 0x80).count();
    out.extend(bytes[..ascii].iter().map(|&b| b as u16));

    let mut reader = Mutf8Reader {
        buf: bytes,
        pos: ascii,
        failed: false,
    };
    while let Some(unit) = reader.next_unit()? {
        out.push(unit);
    }

    Ok(out)
}

/// Validate `bytes` and count the code units they decode to, without allocating
pub fn decoded_len(bytes: &[u8]) -> Result<usize> {
    let mut reader = Mutf8Reader::new(bytes);
    let mut count = 0;
    while reader.next_unit()?.is_some() {
        count += 1;
    }
    Ok(count)
}

/// Decode into a Rust `String`
///
/// Rust strings cannot hold lone surrogates, so decoded text must be
/// well-formed UTF-16. An unpaired surrogate fails with
/// [`Error::UnpairedSurrogate`] at its unit index.
pub fn decode_to_string(bytes: &[u8]) -> Result<String> {
    let units = decode(bytes)?;
    let mut out = String::with_capacity(bytes.len());

    let mut offset = 0;
    for ch in char::decode_utf16(units.iter().copied()) {
        match ch {
            Ok(c) => {
                out.push(c);
                offset += c.len_utf16();
            }
            Err(_) => return Err(Error::UnpairedSurrogate { offset }),
        }
    }

    Ok(out)
}
