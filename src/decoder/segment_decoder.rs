//! Segment decoder: reads mode indicators and dispatches to the mode decoders
//! until the terminator.
use log::{debug, trace};

use crate::decoder::bitstream::BitReader;
use crate::decoder::config::DecoderConfig;
use crate::decoder::modes::{
    SegmentBody, alphanumeric::AlphanumericDecoder, byte::ByteDecoder, kanji::KanjiDecoder,
    numeric::NumericDecoder,
};
use crate::decoder::tables::char_count_bits;
use crate::error::DecodeError;
use crate::models::{Mode, Payload, Segment};


/// Width of every mode indicator
pub const MODE_INDICATOR_BITS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Reading,
    Done,
}

/// Drives a [`BitReader`] through one payload.
///
/// Decoding is a single forward pass: it ends at the terminator or at the
/// first fault, and the decoder is consumed either way.
pub struct SegmentDecoder {
    reader: BitReader,
    config: DecoderConfig,
    state: State,
    payload: Payload,
}

impl SegmentDecoder {
    /// Create a decoder over `reader`
    pub fn new(reader: BitReader, config: DecoderConfig) -> Self {
        Self {
            reader,
            config,
            state: State::Reading,
            payload: Payload::default(),
        }
    }

    /// Decode every segment up to the terminator
    pub fn decode(self) -> Result<Payload, DecodeError> {
        match self.decode_partial() {
            (payload, None) => Ok(payload),
            (_, Some(err)) => Err(err),
        }
    }

    /// Decode up to the terminator or the first fault.
    ///
    /// On a fault the payload holds every segment completed before it; text
    /// from the segment that failed is not included.
    pub fn decode_partial(mut self) -> (Payload, Option<DecodeError>) {
        while self.state == State::Reading {
            if let Err(err) = self.step() {
                debug!(
                    "decode aborted at bit {} after {} segment(s): {}",
                    self.reader.position(),
                    self.payload.segments.len(),
                    err
                );
                self.payload.bits_consumed = self.reader.position();
                return (self.payload, Some(err));
            }
        }
        self.payload.bits_consumed = self.reader.position();
        (self.payload, None)
    }

    fn step(&mut self) -> Result<(), DecodeError> {
        let bit_offset = self.reader.position();
        let bits = self.reader.take(MODE_INDICATOR_BITS)? as u8;
        trace!("mode indicator {:04b} at bit {}", bits, bit_offset);

        let mode = match Mode::from_bits(bits) {
            Some(Mode::Numeric) if !self.config.numeric => None,
            mode => mode,
        }
        .ok_or(DecodeError::UnhandledMode(bits))?;

        if mode == Mode::Terminator {
            self.state = State::Done;
            return Ok(());
        }

        let count = self
            .reader
            .take(char_count_bits(mode, self.config.version))? as usize;
        let body = self.decode_body(mode, count)?;
        debug!(
            "{} segment at bit {}: {} character(s)",
            mode, bit_offset, count
        );

        self.payload.push(Segment {
            mode,
            count,
            bit_offset,
            data: body.data,
            text: body.text,
        });
        Ok(())
    }

    fn decode_body(&mut self, mode: Mode, count: usize) -> Result<SegmentBody, DecodeError> {
        let reader = &mut self.reader;
        match mode {
            Mode::Numeric => NumericDecoder::decode(reader, count),
            Mode::Alphanumeric => AlphanumericDecoder::decode(reader, count, self.config.trailing),
            Mode::Byte => ByteDecoder::decode(reader, count),
            Mode::Kanji => KanjiDecoder::decode(reader, count),
            Mode::Terminator => Ok(SegmentBody::default()),
        }
    }
}
