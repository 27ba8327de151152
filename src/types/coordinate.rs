//! Grid coordinate types
//!
//! Delivery destinations are expressed relative to the depot at the origin,
//! e.g. `N11W5` — 11 grid units north, 5 units west. Direction carries the
//! compass sign; magnitudes are always non-negative.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static COORDINATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([nNsS])(\d+)([eEwW])(\d+)$").expect("valid coordinate pattern"));

/// North-south half of a grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LatitudeDirection {
    North,
    South,
}

impl LatitudeDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            LatitudeDirection::North => "N",
            LatitudeDirection::South => "S",
        }
    }
}

/// East-west half of a grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LongitudeDirection {
    East,
    West,
}

impl LongitudeDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            LongitudeDirection::East => "E",
            LongitudeDirection::West => "W",
        }
    }
}

/// Grid position of a delivery destination relative to the depot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCoordinate {
    pub latitude_direction: LatitudeDirection,
    /// Grid units north or south of the depot.
    pub latitude_blocks: u32,
    pub longitude_direction: LongitudeDirection,
    /// Grid units east or west of the depot.
    pub longitude_blocks: u32,
}

/// Failure to parse a textual grid coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCoordinateError {
    #[error("coordinate does not match [NnSs]<digits>[EeWw]<digits>: {0}")]
    Pattern(String),
    #[error("axis magnitude out of range in coordinate: {0}")]
    MagnitudeOverflow(String),
}

impl FromStr for GridCoordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = COORDINATE_RE
            .captures(s)
            .ok_or_else(|| ParseCoordinateError::Pattern(s.to_string()))?;

        let latitude_direction = match &captures[1] {
            "n" | "N" => LatitudeDirection::North,
            _ => LatitudeDirection::South,
        };
        let longitude_direction = match &captures[3] {
            "e" | "E" => LongitudeDirection::East,
            _ => LongitudeDirection::West,
        };

        let latitude_blocks: u32 = captures[2]
            .parse()
            .map_err(|_| ParseCoordinateError::MagnitudeOverflow(s.to_string()))?;
        let longitude_blocks: u32 = captures[4]
            .parse()
            .map_err(|_| ParseCoordinateError::MagnitudeOverflow(s.to_string()))?;

        Ok(Self {
            latitude_direction,
            latitude_blocks,
            longitude_direction,
            longitude_blocks,
        })
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.latitude_direction.as_str(),
            self.latitude_blocks,
            self.longitude_direction.as_str(),
            self.longitude_blocks
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_coordinate() {
        let coord: GridCoordinate = "N11W5".parse().unwrap();
        assert_eq!(coord.latitude_direction, LatitudeDirection::North);
        assert_eq!(coord.latitude_blocks, 11);
        assert_eq!(coord.longitude_direction, LongitudeDirection::West);
        assert_eq!(coord.longitude_blocks, 5);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let lower: GridCoordinate = "s3e7".parse().unwrap();
        assert_eq!(lower.latitude_direction, LatitudeDirection::South);
        assert_eq!(lower.longitude_direction, LongitudeDirection::East);
        assert_eq!(lower.latitude_blocks, 3);
        assert_eq!(lower.longitude_blocks, 7);
    }

    #[test]
    fn test_parse_rejects_bad_patterns() {
        for raw in ["", "N1", "X1W2", "N1X2", "W5N11", "N-1W5", "N1W2 "] {
            assert!(
                raw.parse::<GridCoordinate>().is_err(),
                "expected rejection: {raw:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_oversized_magnitude() {
        let err = "N99999999999W5".parse::<GridCoordinate>().unwrap_err();
        assert!(matches!(err, ParseCoordinateError::MagnitudeOverflow(_)));
    }

    #[test]
    fn test_display_is_canonical_uppercase() {
        let coord: GridCoordinate = "n11w5".parse().unwrap();
        assert_eq!(coord.to_string(), "N11W5");
    }

    #[test]
    fn test_zero_magnitudes_are_valid() {
        let coord: GridCoordinate = "N0E0".parse().unwrap();
        assert_eq!(coord.latitude_blocks, 0);
        assert_eq!(coord.longitude_blocks, 0);
    }
}
