use crate::error::DecodeError;
use crate::models::{Mode, Version};

/// Alphanumeric character set: 0-9, A-Z, space, $%*+-./:
pub const ALPHANUMERIC_TABLE: [char; 45] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I',
    'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ' ', '$',
    '%', '*', '+', '-', '.', '/', ':',
];

/// Kanji values at or above this use the upper Shift JIS block
pub const KANJI_UPPER_START: u16 = 0x1740;
/// Base code for the lower Shift JIS block (0x8140..)
pub const KANJI_LOWER_BASE: u16 = 0x8140;
/// Base code for the upper Shift JIS block (0xC140..)
pub const KANJI_UPPER_BASE: u16 = 0xC140;

// Character count indicator widths, index: [mode][version band]
// Bands are versions 1-9, 10-26, 27-40.
const CHAR_COUNT_BITS: [[usize; 3]; 4] = [
    [10, 12, 14], // Numeric
    [9, 11, 13],  // Alphanumeric
    [8, 16, 16],  // Byte
    [8, 10, 12],  // Kanji
];

/// Look up a symbol, failing on anything past the end of the table
pub fn alphanumeric_symbol(index: u32) -> Result<char, DecodeError> {
    ALPHANUMERIC_TABLE
        .get(index as usize)
        .copied()
        .ok_or(DecodeError::InvalidIndex { value: index })
}

/// Width of the character count that follows a mode indicator.
///
/// The terminator carries no count.
pub fn char_count_bits(mode: Mode, version: Version) -> usize {
    let row = match mode {
        Mode::Terminator => return 0,
        Mode::Numeric => 0,
        Mode::Alphanumeric => 1,
        Mode::Byte => 2,
        Mode::Kanji => 3,
    };
    let band = match version.number() {
        1..=9 => 0,
        10..=26 => 1,
        _ => 2,
    };
    CHAR_COUNT_BITS[row][band]
}
