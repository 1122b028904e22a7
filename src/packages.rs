// ABOUTME: Sensor package reader turning raw (code, readings) tuples into typed workouts
// ABOUTME: Validates kind code, reading count, and value ranges before construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Sensor Packages
//!
//! Devices report a three-letter code followed by positional readings:
//!
//! | Code | Readings |
//! |------|----------|
//! | `RUN` | action, duration (h), weight (kg) |
//! | `WLK` | action, duration (h), weight (kg), height |
//! | `SWM` | action, duration (h), weight (kg), pool length (m), pool count |
//!
//! On the command line a package is written as `CODE:v1,v2,...`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::models::{Running, SportsWalking, Swimming, Workout, WorkoutBase, WorkoutKind};

/// Raw package as received from a sensor; the code is not yet validated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    /// Three-letter workout code
    pub code: String,
    /// Positional readings
    pub readings: Vec<f64>,
}

impl SensorPackage {
    /// Create a package from a code and readings
    pub fn new(code: impl Into<String>, readings: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            readings: readings.into(),
        }
    }
}

impl FromStr for SensorPackage {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (code, values) = s.split_once(':').ok_or_else(|| {
            AppError::invalid_format(format!("Expected CODE:v1,v2,... but got '{s}'"))
        })?;

        let readings = values
            .split(',')
            .map(str::trim)
            .map(|value| {
                value.parse::<f64>().map_err(|e| {
                    AppError::invalid_format(format!("Reading '{value}' is not a number"))
                        .with_source(e)
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self::new(code.trim(), readings))
    }
}

impl fmt::Display for SensorPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.code)?;
        for (index, value) in self.readings.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// The three sample workouts the report runs when no packages are given
#[must_use]
pub fn sample_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", [15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Build a typed workout from a sensor package
///
/// # Errors
///
/// - `UnknownWorkoutType` if the code is not `SWM`, `RUN` or `WLK`
/// - `MissingRequiredField` if there are fewer readings than the kind needs
/// - `InvalidInput` if there are more readings than the kind needs
/// - `ValueOutOfRange` if a count is not a whole non-negative number, or a
///   duration, weight, height or pool length is not finite and positive
pub fn read_package(package: &SensorPackage) -> AppResult<Workout> {
    let kind = WorkoutKind::from_code(&package.code)?;
    let readings = Readings::for_kind(kind, &package.readings)?;

    let base = WorkoutBase::new(
        readings.count(0)?,
        readings.value(1),
        readings.value(2),
    )?;

    let workout = match kind {
        WorkoutKind::Running => Workout::from(Running { base }),
        WorkoutKind::SportsWalking => Workout::from(SportsWalking::new(base, readings.value(3))?),
        WorkoutKind::Swimming => Workout::from(Swimming::new(
            base,
            readings.value(3),
            readings.count(4)?,
        )?),
    };

    debug!(workout.code = %package.code, workout.kind = %kind, "Sensor package read");
    Ok(workout)
}

/// Readings checked against the arity of a kind
struct Readings<'a> {
    kind: WorkoutKind,
    values: &'a [f64],
}

impl<'a> Readings<'a> {
    fn for_kind(kind: WorkoutKind, values: &'a [f64]) -> AppResult<Self> {
        let names = kind.reading_names();
        if let Some(missing) = names.get(values.len()) {
            return Err(AppError::missing_field(missing));
        }
        if values.len() > names.len() {
            return Err(AppError::invalid_input(format!(
                "{} package takes {} readings, got {}",
                kind.code(),
                names.len(),
                values.len()
            )));
        }
        Ok(Self { kind, values })
    }

    fn value(&self, index: usize) -> f64 {
        self.values[index]
    }

    fn count(&self, index: usize) -> AppResult<u32> {
        let value = self.values[index];
        if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX)
        {
            return Err(AppError::out_of_range(format!(
                "{} must be a whole non-negative number, got {value}",
                self.kind.reading_names()[index]
            )));
        }
        Ok(value as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_sample_packages_all_read() {
        let kinds: Vec<_> = sample_packages()
            .iter()
            .map(|package| read_package(package).unwrap().kind())
            .collect();
        assert_eq!(
            kinds,
            [
                WorkoutKind::Swimming,
                WorkoutKind::Running,
                WorkoutKind::SportsWalking
            ]
        );
    }

    #[test]
    fn test_unknown_code() {
        let err = read_package(&SensorPackage::new("XYZ", [1.0, 1.0, 1.0])).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownWorkoutType);
    }

    #[test]
    fn test_missing_reading_names_field() {
        let err = read_package(&SensorPackage::new("SWM", [720.0, 1.0, 80.0, 25.0])).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingRequiredField);
        assert!(err.message.contains("pool_count"));
    }

    #[test]
    fn test_extra_reading_rejected() {
        let err = read_package(&SensorPackage::new("RUN", [15000.0, 1.0, 75.0, 180.0])).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_fractional_action_rejected() {
        let err = read_package(&SensorPackage::new("RUN", [150.5, 1.0, 75.0])).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert!(err.message.contains("action"));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let err = read_package(&SensorPackage::new("RUN", [15000.0, 0.0, 75.0])).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_parse_cli_form() {
        let package: SensorPackage = "WLK: 9000, 1, 75, 180".parse().unwrap();
        assert_eq!(package.code, "WLK");
        assert_eq!(package.readings, vec![9000.0, 1.0, 75.0, 180.0]);
        assert_eq!(package.to_string(), "WLK:9000,1,75,180");
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        let no_colon = "RUN 15000,1,75".parse::<SensorPackage>().unwrap_err();
        assert_eq!(no_colon.code, ErrorCode::InvalidFormat);

        let not_number = "RUN:15000,fast,75".parse::<SensorPackage>().unwrap_err();
        assert_eq!(not_number.code, ErrorCode::InvalidFormat);
    }
}
