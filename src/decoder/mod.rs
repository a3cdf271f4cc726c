//! QR payload decoding modules
//!
//! Everything between the raw data bits and the decoded text:
//! - Bit reading (text, module glyphs, or packed codewords)
//! - Segment dispatch on the 4-bit mode indicator
//! - Data mode decoding (numeric, alphanumeric, byte, kanji)

/// Bit reader over the payload
pub mod bitstream;
/// Decoder configuration (version, trailing width, numeric mode)
pub mod config;
/// Data mode decoders (numeric, alphanumeric, byte, kanji)
pub mod modes;
/// Mode indicator dispatch loop
pub mod segment_decoder;
/// Symbol table and character count widths
pub mod tables;
