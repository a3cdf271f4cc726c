use crate::models::Version;

fn parse_env_u8(name: &str) -> Option<u8> {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    parse_env_u8(name).map(|v| v != 0).unwrap_or(default)
}

/// Bit width used for the last character of an odd-length alphanumeric segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingWidth {
    /// 11 bits, the same width as a pair
    #[default]
    Legacy,
    /// 6 bits, as the symbology standard lays it out
    Standard,
}

impl TrailingWidth {
    /// Number of bits read for the trailing character
    pub fn bits(&self) -> usize {
        match self {
            TrailingWidth::Legacy => 11,
            TrailingWidth::Standard => 6,
        }
    }

    /// Map a bit count back to a width (6 or 11)
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            11 => Some(TrailingWidth::Legacy),
            6 => Some(TrailingWidth::Standard),
            _ => None,
        }
    }
}

/// Knobs for one decode pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecoderConfig {
    /// Symbol version; picks character count widths
    pub version: Version,
    /// Width of the trailing alphanumeric character
    pub trailing: TrailingWidth,
    /// Decode mode `0001` instead of rejecting it
    pub numeric: bool,
}

impl DecoderConfig {
    /// Read overrides from `QR_PAYLOAD_VERSION`, `QR_PAYLOAD_TRAILING_BITS`
    /// and `QR_PAYLOAD_NUMERIC`. Unset or malformed values keep the default.
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            version: parse_env_u8("QR_PAYLOAD_VERSION")
                .and_then(|v| Version::new(v).ok())
                .unwrap_or(default.version),
            trailing: parse_env_u8("QR_PAYLOAD_TRAILING_BITS")
                .and_then(TrailingWidth::from_bits)
                .unwrap_or(default.trailing),
            numeric: parse_env_bool_u8("QR_PAYLOAD_NUMERIC", default.numeric),
        }
    }

    /// Replace the version
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// Replace the trailing character width
    pub fn with_trailing(mut self, trailing: TrailingWidth) -> Self {
        self.trailing = trailing;
        self
    }

    /// Enable or disable numeric mode
    pub fn with_numeric(mut self, numeric: bool) -> Self {
        self.numeric = numeric;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DecoderConfig::default();
        assert_eq!(config.version.number(), 1);
        assert_eq!(config.trailing.bits(), 11);
        assert!(!config.numeric);
    }

    #[test]
    fn test_trailing_from_bits() {
        assert_eq!(TrailingWidth::from_bits(6), Some(TrailingWidth::Standard));
        assert_eq!(TrailingWidth::from_bits(11), Some(TrailingWidth::Legacy));
        assert_eq!(TrailingWidth::from_bits(8), None);
    }

    #[test]
    fn test_builders() {
        let config = DecoderConfig::default()
            .with_version(Version::MAX)
            .with_trailing(TrailingWidth::Standard)
            .with_numeric(true);
        assert_eq!(config.version, Version::MAX);
        assert_eq!(config.trailing, TrailingWidth::Standard);
        assert!(config.numeric);
    }
}
