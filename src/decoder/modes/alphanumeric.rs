/// Alphanumeric mode decoder (Mode 0010)
use super::SegmentBody;
use crate::decoder::bitstream::BitReader;
use crate::decoder::config::TrailingWidth;
use crate::decoder::tables::alphanumeric_symbol;
use crate::error::DecodeError;

/// Decode alphanumeric data
/// Pairs = 11 bits, trailing single = 11 (legacy) or 6 (standard) bits
pub struct AlphanumericDecoder;

impl AlphanumericDecoder {
    pub fn decode(
        reader: &mut BitReader,
        character_count: usize,
        trailing: TrailingWidth,
    ) -> Result<SegmentBody, DecodeError> {
        let mut body = SegmentBody::with_capacity(character_count);

        for _ in 0..character_count / 2 {
            // value = first * 45 + second, so anything past 44*45+44 is garbage
            let value = reader.take(11)?;
            let first = alphanumeric_symbol(value / 45)
                .map_err(|_| DecodeError::InvalidIndex { value })?;
            let second = alphanumeric_symbol(value % 45)?;
            body.push_ascii(first);
            body.push_ascii(second);
        }

        if character_count % 2 == 1 {
            let value = reader.take(trailing.bits())?;
            body.push_ascii(alphanumeric_symbol(value)?);
        }

        Ok(body)
    }
}
