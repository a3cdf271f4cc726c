use crate::error::DecodeError;

/// QR code version (1-40), which fixes the width of every character count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest symbol, whose count widths are the ones most payloads use
    pub const MIN: Version = Version(1);
    /// Largest symbol
    pub const MAX: Version = Version(40);

    /// Create a version, rejecting numbers outside 1..=40
    pub fn new(number: u8) -> Result<Self, DecodeError> {
        if (1..=40).contains(&number) {
            Ok(Version(number))
        } else {
            Err(DecodeError::InvalidVersion(number))
        }
    }

    /// Get the version number (1-40)
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(&self) -> usize {
        4 * (self.0 as usize) + 17
    }

    /// Recover the version from a symbol's side length in modules
    pub fn from_size(size: usize) -> Option<Self> {
        if size < 21 || (size - 17) % 4 != 0 {
            return None;
        }
        let number = (size - 17) / 4;
        u8::try_from(number).ok().and_then(|n| Version::new(n).ok())
    }
}

impl Default for Version {
    fn default() -> Self {
        Version::MIN
    }
}
