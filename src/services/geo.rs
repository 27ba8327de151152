//! Flight distance calculations

use crate::types::GridCoordinate;

/// Straight-line distance from the depot (origin) to a grid position.
///
/// Compass direction carries no sign here; both axes enter as plain
/// Cartesian magnitudes.
pub fn depot_distance(coordinate: &GridCoordinate) -> f64 {
    f64::from(coordinate.latitude_blocks).hypot(f64::from(coordinate.longitude_blocks))
}

/// Round-trip flight distance: there and back along the straight line.
pub fn round_trip_distance(coordinate: &GridCoordinate) -> f64 {
    2.0 * depot_distance(coordinate)
}

/// Round-trip flight time in whole minutes.
///
/// One grid unit of distance costs one minute of flight. Ties round half
/// away from zero, so 2.5 becomes 3.
pub fn round_trip_minutes(distance: f64) -> i64 {
    distance.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use crate::types::{LatitudeDirection, LongitudeDirection};

    fn coord(
        latitude_direction: LatitudeDirection,
        latitude_blocks: u32,
        longitude_direction: LongitudeDirection,
        longitude_blocks: u32,
    ) -> GridCoordinate {
        GridCoordinate {
            latitude_direction,
            latitude_blocks,
            longitude_direction,
            longitude_blocks,
        }
    }

    #[test]
    fn test_round_trip_pythagorean_triple() {
        // 3-4-5 triangle: hypotenuse 5, round trip 10.
        let distance = round_trip_distance(&"N3E4".parse().unwrap());
        assert_eq!(distance, 10.0);
    }

    #[test]
    fn test_round_trip_zero_only_at_depot() {
        assert_eq!(round_trip_distance(&"N0E0".parse().unwrap()), 0.0);
        assert!(round_trip_distance(&"N0E1".parse().unwrap()) > 0.0);
        assert!(round_trip_distance(&"N1E0".parse().unwrap()) > 0.0);
    }

    #[test]
    fn test_round_trip_diagonal_unit() {
        let distance = round_trip_distance(&"N1E1".parse().unwrap());
        assert!((distance - 2.0 * std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn test_round_trip_minutes_rounds_half_up() {
        assert_eq!(round_trip_minutes(2.5), 3);
        assert_eq!(round_trip_minutes(2.4), 2);
        assert_eq!(round_trip_minutes(0.0), 0);
        assert_eq!(round_trip_minutes(10.0), 10);
    }

    proptest! {
        // N1E2, S1E2, N1W2, S1W2 all fly the same distance.
        #[test]
        fn prop_distance_symmetric_under_sign_flips(lat in 0u32..=10_000, lng in 0u32..=10_000) {
            let reference = round_trip_distance(&coord(
                LatitudeDirection::North, lat, LongitudeDirection::East, lng,
            ));
            for latitude_direction in [LatitudeDirection::North, LatitudeDirection::South] {
                for longitude_direction in [LongitudeDirection::East, LongitudeDirection::West] {
                    let flipped = round_trip_distance(&coord(
                        latitude_direction, lat, longitude_direction, lng,
                    ));
                    prop_assert_eq!(flipped, reference);
                }
            }
        }
    }
}
