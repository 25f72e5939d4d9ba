//! Code unit classification
//!
//! Every UTF-16 code unit falls into exactly one of three classes, which
//! decides how many bytes it takes in Modified UTF-8. Surrogate halves are
//! ordinary `ThreeByte` units; nothing here looks at neighbouring units.

/// Encoded width class of a single UTF-16 code unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeUnitClass {
    /// `0x0001..=0x007F`, encoded as the byte itself
    Ascii,
    /// `0x0000` or `0x0080..=0x07FF`, encoded as `110xxxxx 10xxxxxx`
    TwoByte,
    /// `0x0800..=0xFFFF`, surrogates included, encoded as `1110xxxx 10xxxxxx 10xxxxxx`
    ThreeByte,
}

impl CodeUnitClass {
    /// Classify a code unit
    #[inline]
    pub const fn of(unit: u16) -> Self {
        match unit {
            0x0001..=0x007F => CodeUnitClass::Ascii,
            0x0800..=0xFFFF => CodeUnitClass::ThreeByte,
            _ => CodeUnitClass::TwoByte,
        }
    }

    /// Number of bytes a unit of this class encodes to
    #[inline]
    pub const fn encoded_len(self) -> usize {
        match self {
            CodeUnitClass::Ascii => 1,
            CodeUnitClass::TwoByte => 2,
            CodeUnitClass::ThreeByte => 3,
        }
    }

    /// Classify from a leading byte, or `None` if it cannot start a sequence
    ///
    /// Only the high nibble matters: `0..=7` one byte, `12..=13` two bytes,
    /// `14` three bytes. Orphan continuation bytes (`8..=11`) and the
    /// 4-byte-and-up leaders (`15`) start nothing.
    #[inline]
    pub const fn from_leading_byte(byte: u8) -> Option<Self> {
        match byte >> 4 {
            0..=7 => Some(CodeUnitClass::Ascii),
            12 | 13 => Some(CodeUnitClass::TwoByte),
            14 => Some(CodeUnitClass::ThreeByte),
            _ => None,
        }
    }
}

/// Returns true if `byte` matches the `10xxxxxx` continuation pattern
#[inline]
pub const fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}
