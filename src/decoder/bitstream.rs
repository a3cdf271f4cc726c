/// Bitstream reader over a decoded payload
use crate::error::DecodeError;

/// Owns the payload bits and a cursor that only moves forward
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitReader {
    bits: Vec<bool>,
    idx: usize,
}

impl BitReader {
    /// Wrap an already unpacked bit sequence
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits, idx: 0 }
    }

    /// Unpack codewords, most significant bit first
    pub fn from_codewords(codewords: &[u8]) -> Self {
        let mut bits = Vec::with_capacity(codewords.len() * 8);
        for &byte in codewords {
            for i in (0..8).rev() {
                bits.push(((byte >> i) & 1) != 0);
            }
        }
        Self::new(bits)
    }

    /// Parse a textual bit string.
    ///
    /// `0`/`1` are bits, and so are the module glyphs `x`/`X` (dark, 1) and
    /// `.` (light, 0). ASCII whitespace is skipped so streams can be grouped
    /// into codewords or lines.
    pub fn parse(text: &str) -> Result<Self, DecodeError> {
        let mut bits = Vec::with_capacity(text.len());
        for (position, ch) in text.chars().enumerate() {
            match ch {
                '1' | 'x' | 'X' => bits.push(true),
                '0' | '.' => bits.push(false),
                ch if ch.is_ascii_whitespace() => {}
                found => return Err(DecodeError::InvalidBitCharacter { position, found }),
            }
        }
        Ok(Self::new(bits))
    }

    /// Take the next `n` bits as a big-endian unsigned value.
    ///
    /// Fails without moving the cursor if fewer than `n` bits remain.
    pub fn take(&mut self, n: usize) -> Result<u32, DecodeError> {
        debug_assert!(n <= 32, "cannot take {} bits into a u32", n);
        if n > self.remaining() {
            return Err(DecodeError::TruncatedStream {
                offset: self.idx,
                requested: n,
                remaining: self.remaining(),
            });
        }
        let mut val = 0u32;
        for &bit in &self.bits[self.idx..self.idx + n] {
            val = (val << 1) | (bit as u32);
        }
        self.idx += n;
        Ok(val)
    }

    /// Bits not yet consumed
    pub fn remaining(&self) -> usize {
        self.bits.len() - self.idx
    }

    /// Current cursor position
    pub fn position(&self) -> usize {
        self.idx
    }

    /// Total number of bits in the stream
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True when the stream holds no bits at all
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_big_endian() {
        let mut reader = BitReader::parse("0100 00000011").unwrap();
        assert_eq!(reader.take(4), Ok(0b0100));
        assert_eq!(reader.take(8), Ok(3));
        assert_eq!(reader.remaining(), 0);
        assert_eq!(reader.position(), 12);
    }

    #[test]
    fn test_take_zero_bits() {
        let mut reader = BitReader::parse("").unwrap();
        assert!(reader.is_empty());
        assert_eq!(reader.take(0), Ok(0));
    }

    #[test]
    fn test_truncated_read_keeps_cursor() {
        let mut reader = BitReader::parse("101").unwrap();
        assert_eq!(reader.take(1), Ok(1));
        assert_eq!(
            reader.take(4),
            Err(DecodeError::TruncatedStream {
                offset: 1,
                requested: 4,
                remaining: 2,
            })
        );
        assert_eq!(reader.position(), 1);
        assert_eq!(reader.take(2), Ok(0b01));
    }

    #[test]
    fn test_module_glyphs() {
        let mut reader = BitReader::parse("x.X.\n..xx").unwrap();
        assert_eq!(reader.len(), 8);
        assert_eq!(reader.take(8), Ok(0b1010_0011));
    }

    #[test]
    fn test_parse_rejects_other_characters() {
        assert_eq!(
            BitReader::parse("01 2").unwrap_err(),
            DecodeError::InvalidBitCharacter {
                position: 3,
                found: '2',
            }
        );
    }

    #[test]
    fn test_from_codewords_msb_first() {
        let mut reader = BitReader::from_codewords(&[0x40, 0x31]);
        assert_eq!(reader.len(), 16);
        assert_eq!(reader.take(4), Ok(0b0100));
        assert_eq!(reader.take(8), Ok(0x03));
        assert_eq!(reader.take(4), Ok(0b0001));
    }
}
