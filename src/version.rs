//! Version Parsing
//!
//! Major.minor version tuples parsed out of tool output such as
//! `node --version` (`v20.11.1`). Only the leading numeric components
//! matter for the minimum-version gates.

use std::fmt;

use regex::Regex;

/// A major.minor version pair. Patch components are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parse the leading major.minor out of a version string.
    /// Accepts an optional `v` prefix and trailing components (`v20.11.1`).
    pub fn parse(raw: &str) -> Option<Self> {
        let re = Regex::new(r"^v?(\d+)(?:\.(\d+))?").ok()?;
        let caps = re.captures(raw.trim())?;

        let major = caps.get(1)?.as_str().parse().ok()?;
        let minor = caps
            .get(2)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0);

        Some(Self { major, minor })
    }

    /// Whether this version satisfies the given minimum.
    pub fn meets(&self, min: Version) -> bool {
        (self.major, self.minor) >= (min.major, min.minor)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_v_prefix_and_patch() {
        assert_eq!(Version::parse("v20.11.1"), Some(Version::new(20, 11)));
    }

    #[test]
    fn test_parse_bare_major() {
        assert_eq!(Version::parse("18"), Some(Version::new(18, 0)));
    }

    #[test]
    fn test_parse_with_surrounding_whitespace() {
        assert_eq!(Version::parse("  v18.19.0\n"), Some(Version::new(18, 19)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Version::parse("not a version"), None);
        assert_eq!(Version::parse(""), None);
    }

    #[test]
    fn test_meets_minimum() {
        assert!(Version::new(3, 7).meets(Version::new(3, 7)));
        assert!(Version::new(3, 10).meets(Version::new(3, 7)));
        assert!(Version::new(4, 0).meets(Version::new(3, 7)));
        assert!(Version::new(20, 11).meets(Version::new(18, 0)));
    }

    #[test]
    fn test_below_minimum_fails() {
        assert!(!Version::new(3, 6).meets(Version::new(3, 7)));
        assert!(!Version::new(2, 9).meets(Version::new(3, 7)));
        assert!(!Version::new(16, 3).meets(Version::new(18, 0)));
    }
}
