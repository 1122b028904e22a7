// ABOUTME: Distance, mean speed, and calorie formulas per workout kind
// ABOUTME: Pure arithmetic over validated readings, one function per activity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Formula catalog
//!
//! Every kind shares the step-based distance and the distance/duration mean
//! speed, except swimming which derives speed from pool length and lap count.
//! Calorie formulas differ per kind:
//!
//! | Kind | Calories |
//! |------|----------|
//! | Running | `(18 x speed - 20) x weight / 1000 x minutes` |
//! | Sports walking | `(0.035 x weight + floor(speed^2 / height) x 0.029 x weight) x minutes` |
//! | Swimming | `(speed + 1.1) x 2 x weight` |

use workout_core::constants::{running, swimming, units, walking};
use workout_core::models::WorkoutKind;

/// Distance in kilometers covered by `action` steps or strokes
#[must_use]
pub fn distance_km(kind: WorkoutKind, action: u32) -> f64 {
    f64::from(action) * kind.step_length_meters() / units::METERS_PER_KILOMETER
}

/// Mean speed in km/h from distance and duration
#[must_use]
pub fn mean_speed_kmh(distance_km: f64, duration_hours: f64) -> f64 {
    distance_km / duration_hours
}

/// Swimming mean speed in km/h from pool length and number of lengths
#[must_use]
pub fn swimming_mean_speed_kmh(pool_length_m: f64, pool_count: u32, duration_hours: f64) -> f64 {
    pool_length_m * f64::from(pool_count) / units::METERS_PER_KILOMETER / duration_hours
}

/// Running calories
///
/// Formula: `(18 x speed - 20) x weight / 1000 x (duration x 60)`
#[must_use]
pub fn running_calories(mean_speed_kmh: f64, weight_kg: f64, duration_hours: f64) -> f64 {
    let speed_term = running::SPEED_MULTIPLIER * mean_speed_kmh - running::SPEED_SHIFT;
    speed_term * weight_kg / units::METERS_PER_KILOMETER * duration_minutes(duration_hours)
}

/// Sports walking calories
///
/// Formula: `(0.035 x weight + floor(speed^2 / height) x 0.029 x weight) x (duration x 60)`
///
/// The speed/height quotient is floor-divided, so for typical walking speeds
/// only the weight term contributes.
#[must_use]
pub fn walking_calories(
    mean_speed_kmh: f64,
    weight_kg: f64,
    height: f64,
    duration_hours: f64,
) -> f64 {
    let speed_over_height = (mean_speed_kmh.powi(walking::SPEED_EXPONENT) / height).floor();
    let base_term = walking::WEIGHT_MULTIPLIER * weight_kg;
    let speed_term = speed_over_height * walking::SPEED_HEIGHT_MULTIPLIER * weight_kg;
    (base_term + speed_term) * duration_minutes(duration_hours)
}

/// Swimming calories
///
/// Formula: `(speed + 1.1) x 2 x weight`
#[must_use]
pub fn swimming_calories(mean_speed_kmh: f64, weight_kg: f64) -> f64 {
    (mean_speed_kmh + swimming::SPEED_SHIFT) * swimming::WEIGHT_MULTIPLIER * weight_kg
}

/// Calorie formula as a string
#[must_use]
pub const fn formula(kind: WorkoutKind) -> &'static str {
    match kind {
        WorkoutKind::Running => "calories = (18 x speed - 20) x weight / 1000 x (duration x 60)",
        WorkoutKind::SportsWalking => {
            "calories = (0.035 x weight + floor(speed^2 / height) x 0.029 x weight) x (duration x 60)"
        }
        WorkoutKind::Swimming => "calories = (speed + 1.1) x 2 x weight",
    }
}

fn duration_minutes(duration_hours: f64) -> f64 {
    duration_hours * units::MINUTES_PER_HOUR
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_step_distance() {
        assert!((distance_km(WorkoutKind::Running, 15000) - 9.75).abs() < TOLERANCE);
        assert!((distance_km(WorkoutKind::Swimming, 720) - 0.9936).abs() < TOLERANCE);
    }

    #[test]
    fn test_running_calories() {
        let calories = running_calories(9.75, 75.0, 1.0);
        assert!((calories - 699.75).abs() < TOLERANCE);
    }

    #[test]
    fn test_walking_floor_division() {
        // 5.85^2 / 180 = 0.19 floors to zero, leaving only the weight term
        let calories = walking_calories(5.85, 75.0, 180.0, 1.0);
        assert!((calories - 157.5).abs() < TOLERANCE);

        // 15^2 / 100 = 2.25 floors to 2
        let brisk = walking_calories(15.0, 70.0, 100.0, 0.5);
        let expected = (0.035 * 70.0 + 2.0 * 0.029 * 70.0) * 30.0;
        assert!((brisk - expected).abs() < TOLERANCE);
    }

    #[test]
    fn test_swimming_speed_and_calories() {
        let speed = swimming_mean_speed_kmh(25.0, 40, 1.0);
        assert!((speed - 1.0).abs() < TOLERANCE);
        assert!((swimming_calories(speed, 80.0) - 336.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_slow_running_goes_negative() {
        // Below 20/18 km/h the running formula yields negative calories; it is not clamped
        assert!(running_calories(1.0, 70.0, 1.0) < 0.0);
    }
}
