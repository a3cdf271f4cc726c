/// Byte mode decoder (Mode 0100) for 8-bit data
use super::SegmentBody;
use crate::decoder::bitstream::BitReader;
use crate::error::DecodeError;

/// Decode byte mode data (8 bits per character).
///
/// Each byte is one character with that ordinal (0-255); it is never
/// re-decoded as multi-byte text.
pub struct ByteDecoder;

impl ByteDecoder {
    pub fn decode(
        reader: &mut BitReader,
        character_count: usize,
    ) -> Result<SegmentBody, DecodeError> {
        let mut body = SegmentBody::with_capacity(character_count);

        for _ in 0..character_count {
            let byte = reader.take(8)? as u8;
            body.text.push(char::from(byte));
            body.data.push(byte);
        }

        Ok(body)
    }
}
