//! Directional combined return series for a two-pair position.

use fxvar_core::Direction;

use crate::error::{RiskError, RiskResult};

/// One leg of a two-pair position: its daily changes, weight and direction.
#[derive(Debug, Clone, Copy)]
pub struct Leg<'a> {
    /// Daily fractional bid changes of the pair.
    pub changes: &'a [f64],
    /// Portfolio weight of the pair.
    pub weight: f64,
    /// Position direction in the pair.
    pub direction: Direction,
}

impl<'a> Leg<'a> {
    /// Creates a leg.
    #[must_use]
    pub fn new(changes: &'a [f64], weight: f64, direction: Direction) -> Self {
        Self {
            changes,
            weight,
            direction,
        }
    }
}

/// Weighted, direction-signed sum of the two pairs' changes for one day.
///
/// A short leg gains when its price falls, so its contribution is negated.
#[must_use]
pub fn combine_changes(
    change_a: f64,
    change_b: f64,
    weight_a: f64,
    weight_b: f64,
    direction_a: Direction,
    direction_b: Direction,
) -> f64 {
    match (direction_a, direction_b) {
        (Direction::Long, Direction::Long) => weight_a * change_a + weight_b * change_b,
        (Direction::Long, Direction::Short) => weight_a * change_a - weight_b * change_b,
        (Direction::Short, Direction::Long) => -weight_a * change_a + weight_b * change_b,
        (Direction::Short, Direction::Short) => -weight_a * change_a - weight_b * change_b,
    }
}

/// Builds the combined daily series of a two-pair position.
///
/// Row `i` of the result combines row `i` of both legs. Missing days stay
/// missing (`NaN`).
///
/// # Errors
///
/// Returns `RiskError::Validation` if the legs are not the same length.
pub fn combined_series(leg_a: &Leg<'_>, leg_b: &Leg<'_>) -> RiskResult<Vec<f64>> {
    if leg_a.changes.len() != leg_b.changes.len() {
        return Err(RiskError::Validation(format!(
            "daily change series differ in length: {} vs {}",
            leg_a.changes.len(),
            leg_b.changes.len()
        )));
    }

    Ok(leg_a
        .changes
        .iter()
        .zip(leg_b.changes)
        .map(|(&a, &b)| {
            combine_changes(a, b, leg_a.weight, leg_b.weight, leg_a.direction, leg_b.direction)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    const ALL_DIRECTIONS: [(Direction, Direction); 4] = [
        (Direction::Long, Direction::Long),
        (Direction::Long, Direction::Short),
        (Direction::Short, Direction::Long),
        (Direction::Short, Direction::Short),
    ];

    #[test]
    fn test_each_direction_combination() {
        let (a, b, wa, wb) = (0.004, -0.002, 0.6, 0.4);
        let expected = [
            0.6 * 0.004 + 0.4 * -0.002,
            0.6 * 0.004 - 0.4 * -0.002,
            -0.6 * 0.004 + 0.4 * -0.002,
            -0.6 * 0.004 - 0.4 * -0.002,
        ];
        for ((da, db), want) in ALL_DIRECTIONS.iter().zip(expected) {
            assert_relative_eq!(combine_changes(a, b, wa, wb, *da, *db), want, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_combined_series_row_by_row() {
        let a = [0.01, -0.02, 0.0];
        let b = [0.005, 0.01, -0.01];
        let series = combined_series(
            &Leg::new(&a, 0.5, Direction::Long),
            &Leg::new(&b, 0.5, Direction::Short),
        )
        .unwrap();

        assert_eq!(series.len(), 3);
        assert_relative_eq!(series[0], 0.0025, epsilon = 1e-15);
        assert_relative_eq!(series[1], -0.015, epsilon = 1e-15);
        assert_relative_eq!(series[2], 0.005, epsilon = 1e-15);
    }

    #[test]
    fn test_missing_day_stays_missing() {
        let a = [f64::NAN, 0.01];
        let b = [0.002, 0.01];
        let series = combined_series(
            &Leg::new(&a, 0.5, Direction::Long),
            &Leg::new(&b, 0.5, Direction::Long),
        )
        .unwrap();
        assert!(series[0].is_nan());
        assert_relative_eq!(series[1], 0.01);
    }

    #[test]
    fn test_length_mismatch() {
        let result = combined_series(
            &Leg::new(&[0.01], 0.5, Direction::Long),
            &Leg::new(&[0.01, 0.02], 0.5, Direction::Long),
        );
        assert!(matches!(result, Err(RiskError::Validation(_))));
    }

    proptest! {
        #[test]
        fn prop_combination_is_linear(
            a in -0.05f64..0.05,
            b in -0.05f64..0.05,
            wa in 0.0f64..1.0,
            wb in 0.0f64..1.0,
            k in -10.0f64..10.0,
            idx in 0usize..4,
        ) {
            let (da, db) = ALL_DIRECTIONS[idx];
            let base = combine_changes(a, b, wa, wb, da, db);
            let scaled = combine_changes(k * a, k * b, wa, wb, da, db);
            prop_assert!((scaled - k * base).abs() < 1e-12);
        }

        #[test]
        fn prop_short_flips_contribution(
            a in -0.05f64..0.05,
            wa in 0.0f64..1.0,
        ) {
            let long = combine_changes(a, 0.0, wa, 0.0, Direction::Long, Direction::Long);
            let short = combine_changes(a, 0.0, wa, 0.0, Direction::Short, Direction::Long);
            prop_assert_eq!(long, -short);
        }
    }
}
