//! RustQR payload - decoder for the data segments of a QR code
//!
//! Takes the data bits of a symbol (after error correction) and turns them
//! into text. The payload is a run of segments, each starting with a 4-bit
//! mode indicator: alphanumeric, byte, kanji, and the terminator.
//!
//! ```
//! let text = rust_qr_payload::decode_bits(
//!     "0100 00000011 01001000 01001001 00100001 0000",
//! ).unwrap();
//! assert_eq!(text, "HI!");
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Payload decoding modules (bit reader, segment dispatch, data modes)
pub mod decoder;
/// Decode faults
pub mod error;
/// Core data structures (Mode, Version, Payload, Segment)
pub mod models;
/// Batch decoding helpers used by the CLI
pub mod tools;

pub use decoder::bitstream::BitReader;
pub use decoder::config::{DecoderConfig, TrailingWidth};
pub use decoder::segment_decoder::SegmentDecoder;
pub use error::DecodeError;
pub use models::{Mode, Payload, Segment, Version};

/// Decode a textual bit string with the default configuration
///
/// # Arguments
/// * `bits` - `0`/`1` characters (or `x`/`.` module glyphs), whitespace ignored
///
/// # Returns
/// The decoded text, or the first fault encountered
pub fn decode_bits(bits: &str) -> Result<String, DecodeError> {
    decode_payload(bits, &DecoderConfig::default()).map(|payload| payload.text)
}

/// Decode packed data codewords (most significant bit first) with the
/// default configuration
pub fn decode_codewords(codewords: &[u8]) -> Result<String, DecodeError> {
    SegmentDecoder::new(BitReader::from_codewords(codewords), DecoderConfig::default())
        .decode()
        .map(|payload| payload.text)
}

/// Decode a textual bit string into its segments
pub fn decode_payload(bits: &str, config: &DecoderConfig) -> Result<Payload, DecodeError> {
    let reader = BitReader::parse(bits)?;
    SegmentDecoder::new(reader, *config).decode()
}
