//! Helpers for decoding many payloads at once.
use crate::{BitReader, DecodeError, DecoderConfig, Payload, SegmentDecoder};
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::Path;

/// Load payload bit strings from a file, one per line.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn read_streams<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(parse_streams(&contents))
}

/// Split text into payload bit strings, one per line
pub fn parse_streams(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Decode independent payloads in parallel, keeping input order
pub fn decode_batch<S: AsRef<str> + Sync>(
    streams: &[S],
    config: &DecoderConfig,
) -> Vec<Result<Payload, DecodeError>> {
    streams
        .par_iter()
        .map(|bits| {
            let reader = BitReader::parse(bits.as_ref())?;
            SegmentDecoder::new(reader, *config).decode()
        })
        .collect()
}

/// Outcome counts for a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Payloads attempted
    pub total: usize,
    /// Payloads that reached the terminator
    pub decoded: usize,
    /// Payloads that faulted
    pub failed: usize,
}

impl BatchSummary {
    /// Tally a batch of results
    pub fn from_results(results: &[Result<Payload, DecodeError>]) -> Self {
        let decoded = results.iter().filter(|r| r.is_ok()).count();
        Self {
            total: results.len(),
            decoded,
            failed: results.len() - decoded,
        }
    }

    /// Fraction of payloads decoded (0.0 - 1.0)
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.decoded as f64 / self.total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_streams_skips_comments() {
        let text = "# captured payloads\n0000\n\n  0100 00000000 0000  \n";
        assert_eq!(parse_streams(text), vec!["0000", "0100 00000000 0000"]);
    }

    #[test]
    fn test_decode_batch_keeps_order() {
        let streams = vec![
            "0100 00000001 01000001 0000".to_string(),
            "0001".to_string(),
            "0000".to_string(),
            "0100 00000001 01011010 0000".to_string(),
        ];
        let results = decode_batch(&streams, &DecoderConfig::default());
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].as_ref().map(|p| p.text.as_str()), Ok("A"));
        assert_eq!(results[1], Err(DecodeError::UnhandledMode(1)));
        assert_eq!(results[2].as_ref().map(|p| p.text.as_str()), Ok(""));
        assert_eq!(results[3].as_ref().map(|p| p.text.as_str()), Ok("Z"));

        let summary = BatchSummary::from_results(&results);
        assert_eq!(
            summary,
            BatchSummary {
                total: 4,
                decoded: 3,
                failed: 1
            }
        );
        assert!((summary.success_rate() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(BatchSummary::from_results(&[]).success_rate(), 0.0);
    }
}
