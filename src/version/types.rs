//! Operating system version triple

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::version::error::ParseError;

/// A `major.minor.build` operating system version.
///
/// Ordering is lexicographic over the fields in declaration order, so an
/// absent build (stored as 0) sorts before every numbered build of the same
/// `major.minor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OsVersion {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
}

impl OsVersion {
    pub const fn new(major: u32, minor: u32, build: u32) -> Self {
        Self {
            major,
            minor,
            build,
        }
    }

    /// Version with no build number, e.g. the shipped `6.1` of a release line
    pub const fn release(major: u32, minor: u32) -> Self {
        Self::new(major, minor, 0)
    }

    /// Parse a dotted version string reported by the host.
    ///
    /// At least three components are required and every component must be
    /// plain ASCII digits. Components past the build number (such as a
    /// revision) are validated but otherwise ignored.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let parts: Vec<&str> = input.trim().split('.').collect();
        if parts.len() < 3 {
            return Err(ParseError::new(
                input,
                format!("expected 3 components, found {}", parts.len()),
            ));
        }

        if let Some(part) = parts
            .iter()
            .find(|part| part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(ParseError::new(
                input,
                format!("component {part:?} is not a number"),
            ));
        }

        let component = |name: &str, part: &str| {
            part.parse::<u32>()
                .map_err(|_| ParseError::new(input, format!("{name} {part} is out of range")))
        };

        Ok(Self {
            major: component("major", parts[0])?,
            minor: component("minor", parts[1])?,
            build: component("build", parts[2])?,
        })
    }
}

impl fmt::Display for OsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.build)
    }
}

impl FromStr for OsVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for OsVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for OsVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("10.0.19045", OsVersion::new(10, 0, 19045))]
    #[case("6.1.7601", OsVersion::new(6, 1, 7601))]
    #[case("  5.1.2600\r\n", OsVersion::new(5, 1, 2600))]
    #[case("10.0.19045.3803", OsVersion::new(10, 0, 19045))] // revision ignored
    fn parse_accepts_three_or_more_components(#[case] input: &str, #[case] expected: OsVersion) {
        assert_eq!(OsVersion::parse(input), Ok(expected));
    }

    #[rstest]
    #[case("10.0")]
    #[case("10")]
    #[case("")]
    #[case("10.0.abc")]
    #[case("ten.0.1")]
    #[case("10..19045")]
    #[case("-1.0.0")]
    #[case("+10.0.1")]
    #[case("10.0.+1")]
    #[case("10.0.19045.abc")]
    #[case("10.0.19045.")]
    #[case("10.0.1 9045")]
    fn parse_rejects_malformed_input(#[case] input: &str) {
        let err = OsVersion::parse(input).unwrap_err();
        assert_eq!(err.input, input);
    }

    #[test]
    fn parse_reports_overflowing_component_as_out_of_range() {
        let err = OsVersion::parse("10.0.99999999999").unwrap_err();

        assert_eq!(err.reason, "build 99999999999 is out of range");
    }

    #[test]
    fn parse_reports_non_numeric_component() {
        let err = OsVersion::parse("10.0.19045.abc").unwrap_err();

        assert_eq!(err.reason, "component \"abc\" is not a number");
    }

    #[rstest]
    #[case(OsVersion::new(5, 1, 0), OsVersion::new(5, 2, 0))]
    #[case(OsVersion::new(6, 1, 0), OsVersion::new(6, 1, 7600))]
    #[case(OsVersion::new(6, 3, 9600), OsVersion::new(10, 0, 0))]
    #[case(OsVersion::new(6, 0, 6002), OsVersion::new(6, 1, 0))]
    fn ordering_is_lexicographic(#[case] lower: OsVersion, #[case] higher: OsVersion) {
        assert!(lower < higher);
        assert!(higher > lower);
    }

    #[test]
    fn release_has_zero_build() {
        assert_eq!(OsVersion::release(6, 1), OsVersion::new(6, 1, 0));
    }

    #[test]
    fn display_renders_dotted_triple() {
        assert_eq!(OsVersion::new(10, 0, 22631).to_string(), "10.0.22631");
    }

    #[test]
    fn deserializes_from_string() {
        let version: OsVersion = serde_json::from_str("\"6.2.9200\"").unwrap();
        assert_eq!(version, OsVersion::new(6, 2, 9200));
        assert!(serde_json::from_str::<OsVersion>("\"6.2\"").is_err());
    }
}
