/// Segment mode selected by the 4-bit indicator in front of every segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// `0000`: end of data
    Terminator,
    /// `0001`: digit groups (only decoded when enabled in the config)
    Numeric,
    /// `0010`: pairs from the 45-symbol table
    Alphanumeric,
    /// `0100`: raw 8-bit code units
    Byte,
    /// `1000`: 13-bit Shift JIS double-byte characters
    Kanji,
}

impl Mode {
    /// Get mode from the 4-bit indicator
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits & 0x0F {
            0b0000 => Some(Mode::Terminator),
            0b0001 => Some(Mode::Numeric),
            0b0010 => Some(Mode::Alphanumeric),
            0b0100 => Some(Mode::Byte),
            0b1000 => Some(Mode::Kanji),
            _ => None,
        }
    }

    /// The 4-bit indicator for this mode
    pub fn bits(&self) -> u8 {
        match self {
            Mode::Terminator => 0b0000,
            Mode::Numeric => 0b0001,
            Mode::Alphanumeric => 0b0010,
            Mode::Byte => 0b0100,
            Mode::Kanji => 0b1000,
        }
    }

    /// Lowercase name used in logs and CLI output
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Terminator => "terminator",
            Mode::Numeric => "numeric",
            Mode::Alphanumeric => "alphanumeric",
            Mode::Byte => "byte",
            Mode::Kanji => "kanji",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
