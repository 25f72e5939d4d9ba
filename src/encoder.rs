//! Modified UTF-8 encoder
//!
//! Encoding never fails: every 16-bit value has a defined byte form. The
//! allocating entry points size their output once with [`encoded_len`] and
//! never grow it. [`Mutf8Writer`] writes into a user-provided buffer with
//! bounds checking instead, for callers that manage their own storage.

use alloc::vec::Vec;

use crate::class::CodeUnitClass;
use crate::error::{Error, Result};
use crate::TERMINATOR;

/// Whether an encoded string gets a trailing `0x00` byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Terminator {
    /// No trailing byte; the caller tracks the length externally
    #[default]
    None,
    /// Append a single `0x00` for C-style consumers
    Nul,
}

impl Terminator {
    /// Number of bytes the terminator adds
    #[inline]
    pub const fn len(self) -> usize {
        match self {
            Terminator::None => 0,
            Terminator::Nul => 1,
        }
    }

    /// Returns true if no terminator byte is written
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Terminator::None)
    }
}

impl From<bool> for Terminator {
    fn from(append: bool) -> Self {
        if append {
            Terminator::Nul
        } else {
            Terminator::None
        }
    }
}

/// Number of bytes `text` takes in Modified UTF-8, not counting any terminator
///
/// Always between `text.len()` and `3 * text.len()`.
#[inline]
pub fn encoded_len(text: &[u16]) -> usize {
    text.iter()
        .map(|&unit| CodeUnitClass::of(unit).encoded_len())
        .sum()
}

/// Encode a single code unit, returning the byte buffer and how much of it is used
#[inline]
pub(crate) const fn encode_unit(unit: u16) -> ([u8; 3], usize) {
    match CodeUnitClass::of(unit) {
        CodeUnitClass::Ascii => ([unit as u8, 0, 0], 1),
        CodeUnitClass::TwoByte => (
            [
                0xC0 | ((unit >> 6) & 0x1F) as u8,
                0x80 | (unit & 0x3F) as u8,
                0,
            ],
            2,
        ),
        CodeUnitClass::ThreeByte => (
            [
                0xE0 | ((unit >> 12) & 0x0F) as u8,
                0x80 | ((unit >> 6) & 0x3F) as u8,
                0x80 | (unit & 0x3F) as u8,
            ],
            3,
        ),
    }
}

/// Length of the leading run of ASCII units in `text`
#[inline]
fn ascii_prefix_len(text: &[u16]) -> usize {
    text.iter()
        .take_while(|&&unit| CodeUnitClass::of(unit) == CodeUnitClass::Ascii)
        .count()
}

/// Encode `text` into a freshly allocated byte vector
///
/// Surrogate halves are encoded independently, so a supplementary character
/// takes six bytes. `U+0000` becomes `C0 80`.
pub fn encode(text: &[u16], terminator: Terminator) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(text) + terminator.len());

    let ascii = ascii_prefix_len(text);
    out.extend(text[..ascii].iter().map(|&unit| unit as u8));

    for &unit in &text[ascii..] {
        let (bytes, n) = encode_unit(unit);
        out.extend_from_slice(&bytes[..n]);
    }

    if !terminator.is_empty() {
        out.push(TERMINATOR);
    }

    debug_assert_eq!(out.len(), out.capacity());
    out
}

/// Encode `len` units of `text` starting at `start`
///
/// # Panics
///
/// Panics if `start + len` is past the end of `text`, like slice indexing.
#[inline]
pub fn encode_range(text: &[u16], start: usize, len: usize, terminator: Terminator) -> Vec<u8> {
    encode(&text[start..][..len], terminator)
}

/// Encode a Rust string via its UTF-16 form
///
/// Characters outside the BMP become two surrogate units and therefore two
/// three-byte sequences.
pub fn encode_str(s: &str, terminator: Terminator) -> Vec<u8> {
    let len: usize = s
        .encode_utf16()
        .map(|unit| CodeUnitClass::of(unit).encoded_len())
        .sum();
    let mut out = Vec::with_capacity(len + terminator.len());

    for unit in s.encode_utf16() {
        let (bytes, n) = encode_unit(unit);
        out.extend_from_slice(&bytes[..n]);
    }

    if !terminator.is_empty() {
        out.push(TERMINATOR);
    }

    out
}

/// Encode `text` into `buf` without allocating
///
/// Returns the number of bytes written. Fails with [`Error::ShortBuffer`]
/// before writing anything if `buf` cannot hold the whole result.
pub fn encode_into(text: &[u16], buf: &mut [u8], terminator: Terminator) -> Result<usize> {
    if buf.len() < encoded_len(text) + terminator.len() {
        return Err(Error::ShortBuffer);
    }

    let mut writer = Mutf8Writer::new(buf);
    writer.put_units(text)?;
    if !terminator.is_empty() {
        writer.put_terminator()?;
    }

    Ok(writer.position())
}

/// Modified UTF-8 writer over a user-provided buffer
pub struct Mutf8Writer<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> Mutf8Writer<'a> {
    /// Create new writer with the given buffer
    #[inline]
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Write one code unit
    #[inline]
    pub fn put_unit(&mut self, unit: u16) -> Result<()> {
        let (bytes, n) = encode_unit(unit);
        self.put_raw(&bytes[..n])
    }

    /// Write a run of code units
    ///
    /// Either all units are written or none are.
    #[inline]
    pub fn put_units(&mut self, units: &[u16]) -> Result<()> {
        if encoded_len(units) > self.remaining() {
            return Err(Error::ShortBuffer);
        }

        let ascii = ascii_prefix_len(units);
        for (dst, &unit) in self.buf[self.pos..self.pos + ascii].iter_mut().zip(units) {
            *dst = unit as u8;
        }
        self.pos += ascii;

        for &unit in &units[ascii..] {
            self.put_unit(unit)?;
        }
        Ok(())
    }

    /// Write the `0x00` terminator byte
    #[inline]
    pub fn put_terminator(&mut self) -> Result<()> {
        self.put_raw(&[TERMINATOR])
    }

    #[inline]
    fn put_raw(&mut self, bytes: &[u8]) -> Result<()> {
        if self.pos + bytes.len() > self.buf.len() {
            return Err(Error::ShortBuffer);
        }
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(())
    }

    /// Get current position in buffer
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get remaining buffer capacity
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Reset writer for reuse with the same buffer
    #[inline]
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Get a slice of the encoded data
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.pos]
    }
}
