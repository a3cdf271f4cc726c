/// Numeric mode decoder (Mode 0001)
use super::SegmentBody;
use crate::decoder::bitstream::BitReader;
use crate::error::DecodeError;

/// Decode numeric mode data
/// Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits
pub struct NumericDecoder;

impl NumericDecoder {
    pub fn decode(
        reader: &mut BitReader,
        character_count: usize,
    ) -> Result<SegmentBody, DecodeError> {
        let mut body = SegmentBody::with_capacity(character_count);
        let mut chars_remaining = character_count;

        while chars_remaining > 0 {
            let digits = chars_remaining.min(3);
            let (bits_needed, limit) = match digits {
                3 => (10, 1000),
                2 => (7, 100),
                _ => (4, 10),
            };

            let value = reader.take(bits_needed)?;
            if value >= limit {
                return Err(DecodeError::InvalidDigitGroup { value, digits });
            }

            let group = format!("{:0width$}", value, width = digits);
            for ch in group.chars() {
                body.push_ascii(ch);
            }
            chars_remaining -= digits;
        }

        Ok(body)
    }
}
