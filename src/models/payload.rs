use super::Mode;

/// One decoded data segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Mode the segment was written in
    pub mode: Mode,
    /// Character count read from the segment header
    pub count: usize,
    /// Bit offset of the mode indicator within the stream
    pub bit_offset: usize,
    /// Raw code units (symbols, bytes, or Shift JIS pairs)
    pub data: Vec<u8>,
    /// Decoded text
    pub text: String,
}

/// Decoded payload: segments in stream order plus their concatenated text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload {
    /// Segments in the order they were decoded
    pub segments: Vec<Segment>,
    /// Text of all segments, appended in order
    pub text: String,
    /// Bits read, including the terminator when one was reached
    pub bits_consumed: usize,
}

impl Payload {
    /// Append a finished segment
    pub(crate) fn push(&mut self, segment: Segment) {
        self.text.push_str(&segment.text);
        self.segments.push(segment);
    }

    /// Raw code units of every segment, concatenated
    pub fn data(&self) -> Vec<u8> {
        self.segments
            .iter()
            .flat_map(|s| s.data.iter().copied())
            .collect()
    }

    /// True when no characters were decoded
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
