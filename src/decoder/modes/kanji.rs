//! Kanji mode decoder (Mode 1000)
//!
//! Every character is a 13-bit value that folds a two-byte Shift JIS code
//! into one of two blocks, 0x8140..=0x9FFF and 0xE040..=0xEBBF. Not every
//! code in those blocks is assigned, so transcoding can still fail.
use std::borrow::Cow;

use encoding_rs::SHIFT_JIS;

use super::SegmentBody;
use crate::decoder::bitstream::BitReader;
use crate::decoder::tables::{KANJI_LOWER_BASE, KANJI_UPPER_BASE, KANJI_UPPER_START};
use crate::error::DecodeError;

/// Expand a 13-bit value into its two-byte Shift JIS code
pub fn code_point(num: u16) -> u16 {
    let base = if num >= KANJI_UPPER_START {
        KANJI_UPPER_BASE
    } else {
        KANJI_LOWER_BASE
    };
    base + (num / 0xC0) * 0x100 + num % 0xC0
}

/// Transcode one Shift JIS code to a character
pub fn to_char(code: u16) -> Result<char, DecodeError> {
    let bytes = code.to_be_bytes();
    let decoded = SHIFT_JIS
        .decode_without_bom_handling_and_without_replacement(&bytes)
        .ok_or(DecodeError::InvalidCodePoint(code))?;
    single_char(&decoded).ok_or(DecodeError::InvalidCodePoint(code))
}

fn single_char(text: &Cow<'_, str>) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

/// Decode kanji mode data (13 bits per character)
pub struct KanjiDecoder;

impl KanjiDecoder {
    pub fn decode(
        reader: &mut BitReader,
        character_count: usize,
    ) -> Result<SegmentBody, DecodeError> {
        let mut body = SegmentBody {
            text: String::with_capacity(character_count * 3),
            data: Vec::with_capacity(character_count * 2),
        };

        for _ in 0..character_count {
            let code = code_point(reader.take(13)? as u16);
            body.text.push(to_char(code)?);
            body.data.extend_from_slice(&code.to_be_bytes());
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_point_blocks() {
        assert_eq!(code_point(0), 0x8140);
        assert_eq!(code_point(0xBF), 0x81FF);
        assert_eq!(code_point(0xC0), 0x8240);
        assert_eq!(code_point(0x173F), 0x9FFF);
        assert_eq!(code_point(0x1740), 0xE040);
        assert_eq!(code_point(0x1FFF), 0xEBBF);
    }

    #[test]
    fn test_known_characters() {
        // Worked examples from the symbology standard
        assert_eq!(code_point(0x0D9F), 0x935F);
        assert_eq!(to_char(0x935F), Ok('\u{70b9}'));
        assert_eq!(code_point(0x1AAA), 0xE4AA);
        assert_eq!(to_char(0xE4AA), Ok('\u{8317}'));
    }

    #[test]
    fn test_invalid_code_points() {
        // lead byte outside Shift JIS
        assert_eq!(to_char(0xA040), Err(DecodeError::InvalidCodePoint(0xA040)));
        // trail byte outside Shift JIS
        assert_eq!(to_char(0x81FF), Err(DecodeError::InvalidCodePoint(0x81FF)));
        assert_eq!(to_char(0x817F), Err(DecodeError::InvalidCodePoint(0x817F)));
    }

    #[test]
    fn test_kanji_decode() {
        let mut reader = BitReader::parse("0110110011111 1101010101010").unwrap();
        let body = KanjiDecoder::decode(&mut reader, 2).unwrap();
        assert_eq!(body.text, "\u{70b9}\u{8317}");
        assert_eq!(body.data, vec![0x93, 0x5F, 0xE4, 0xAA]);
    }
}
