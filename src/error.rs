use thiserror::Error;

/// Faults that abort a payload decode.
///
/// Decoding never retries or patches over malformed input: the first fault
/// is returned to the caller and no further segments are read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Mode indicator outside the handled set
    #[error("unhandled mode indicator {0:#06b}")]
    UnhandledMode(u8),

    /// A read asked for more bits than the stream still holds
    #[error("truncated stream: {requested} bits requested at offset {offset}, {remaining} remaining")]
    TruncatedStream {
        /// Cursor position when the read was attempted
        offset: usize,
        /// Number of bits requested
        requested: usize,
        /// Number of bits left in the stream
        remaining: usize,
    },

    /// Alphanumeric value that does not map into the 45-symbol table
    #[error("alphanumeric value {value} does not map into the 45-symbol table")]
    InvalidIndex {
        /// The raw value read from the stream
        value: u32,
    },

    /// Kanji value that maps to a code outside Shift JIS
    #[error("kanji code {0:#06X} is not a valid Shift JIS character")]
    InvalidCodePoint(u16),

    /// Numeric group whose value exceeds its digit count
    #[error("numeric group value {value} does not fit in {digits} digit(s)")]
    InvalidDigitGroup {
        /// The raw value read from the stream
        value: u32,
        /// Digits the group was supposed to carry
        digits: usize,
    },

    /// Input text contained something other than a bit or whitespace
    #[error("unexpected character {found:?} at position {position} in bit string")]
    InvalidBitCharacter {
        /// Character index in the input text
        position: usize,
        /// The offending character
        found: char,
    },

    /// Symbol version outside 1..=40
    #[error("version {0} is outside 1..=40")]
    InvalidVersion(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mode() {
        assert_eq!(
            DecodeError::UnhandledMode(0b0001).to_string(),
            "unhandled mode indicator 0b0001"
        );
    }

    #[test]
    fn test_display_code_point() {
        assert_eq!(
            DecodeError::InvalidCodePoint(0xA07F).to_string(),
            "kanji code 0xA07F is not a valid Shift JIS character"
        );
    }
}
