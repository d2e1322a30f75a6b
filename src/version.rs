//! Release version numbers.
//!
//! Releases are versioned as `major.minor`. Ordering is numeric on
//! (major, minor), so `4.10` sorts after `4.2`.

use std::{fmt, str::FromStr};
use thiserror::Error;

/// Navigation weight reserved for the unversioned "current" docs branch.
/// Versioned docs always weigh more, so the current branch sorts first.
#[allow(dead_code)] // Reserved for the hand-written main index page
pub const MAIN_NAV_WEIGHT: u32 = 1;

/// A `major.minor` release version, totally ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

/// Version string parse failure.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid version `{0}`: expected `major.minor`")]
pub struct VersionError(String);

impl Version {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Compute a menu sorting weight for this version.
    ///
    /// Lower weight is shown first; newer versions get smaller weights.
    /// Weight `MAIN_NAV_WEIGHT` is reserved for the current branch.
    pub const fn nav_weight(&self) -> u32 {
        100_000_000 - self.major * 1_000_000 - self.minor * 1_000
    }
}

impl FromStr for Version {
    type Err = VersionError;

    /// Parse `major.minor` from a dotted version string.
    ///
    /// Segments past the second are ignored; fewer than two segments, or a
    /// non-numeric segment, is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('.');
        let (Some(major), Some(minor)) = (parts.next(), parts.next()) else {
            return Err(VersionError(s.to_string()));
        };

        let major = major.parse().map_err(|_| VersionError(s.to_string()))?;
        let minor = minor.parse().map_err(|_| VersionError(s.to_string()))?;
        Ok(Self { major, minor })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!("4.2".parse::<Version>().unwrap(), Version::new(4, 2));
        assert_eq!("0.10".parse::<Version>().unwrap(), Version::new(0, 10));
    }

    #[test]
    fn test_parse_extra_segments_ignored() {
        assert_eq!("4.2.7".parse::<Version>().unwrap(), Version::new(4, 2));
    }

    #[test]
    fn test_parse_rejects_single_segment() {
        assert!("4".parse::<Version>().is_err());
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!("4.x".parse::<Version>().is_err());
        assert!("abc".parse::<Version>().is_err());
        assert!("".parse::<Version>().is_err());
    }

    #[test]
    fn test_ordering_is_numeric() {
        // Guards against lexicographic comparison where "10" < "2"
        assert!(Version::new(4, 10) > Version::new(4, 2));
        assert!(Version::new(10, 0) > Version::new(9, 9));
    }

    #[test]
    fn test_ordering_major_before_minor() {
        assert!(Version::new(5, 0) > Version::new(4, 99));
        assert!(Version::new(4, 3) > Version::new(4, 2));
    }

    #[test]
    fn test_display_round_trip() {
        let v: Version = "4.2".parse().unwrap();
        assert_eq!(v.to_string(), "4.2");
    }

    #[test]
    fn test_nav_weight_newer_is_smaller() {
        let older = Version::new(3, 9).nav_weight();
        let newer = Version::new(4, 0).nav_weight();
        assert!(newer < older);
        assert_eq!(Version::new(4, 2).nav_weight(), 95_998_000);
    }

    #[test]
    fn test_nav_weight_never_collides_with_main() {
        assert!(Version::new(99, 999).nav_weight() > MAIN_NAV_WEIGHT);
    }
}
