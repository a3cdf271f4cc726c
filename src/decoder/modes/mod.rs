//! QR code data mode decoders
//!
//! Each decoder reads the body of one segment, after the mode indicator and
//! character count have been consumed:
//! - Numeric: digit groups (opt-in)
//! - Alphanumeric: letters, numbers, and symbols
//! - Byte: raw 8-bit code units
//! - Kanji: 13-bit Shift JIS double-byte characters

pub mod alphanumeric;
pub mod byte;
pub mod kanji;
pub mod numeric;

/// Text and raw code units produced by one segment body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentBody {
    /// Decoded characters
    pub text: String,
    /// Code units the characters were decoded from
    pub data: Vec<u8>,
}

impl SegmentBody {
    pub(crate) fn with_capacity(count: usize) -> Self {
        Self {
            text: String::with_capacity(count),
            data: Vec::with_capacity(count),
        }
    }

    /// Push a character whose code unit is its own single byte
    pub(crate) fn push_ascii(&mut self, ch: char) {
        debug_assert!(ch.is_ascii());
        self.text.push(ch);
        self.data.push(ch as u8);
    }
}
