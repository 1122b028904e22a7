// ABOUTME: Workout kind enumeration for sensor packages
// ABOUTME: Maps the three-letter device codes to kinds with display names and step lengths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{codes, step_length};
use crate::errors::AppError;

/// Activity category reported by a sensor package
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutKind {
    /// Pool swimming, counted in strokes
    Swimming,
    /// Running, counted in steps
    Running,
    /// Sports walking, counted in steps
    SportsWalking,
}

impl WorkoutKind {
    /// All supported kinds, in code table order
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    /// Look up a kind by its sensor code (`SWM`, `RUN`, `WLK`)
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::UnknownWorkoutType` for any other code
    pub fn from_code(code: &str) -> Result<Self, AppError> {
        match code.trim() {
            codes::SWIMMING => Ok(Self::Swimming),
            codes::RUNNING => Ok(Self::Running),
            codes::SPORTS_WALKING => Ok(Self::SportsWalking),
            other => Err(AppError::unknown_workout(other)),
        }
    }

    /// Three-letter sensor code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Swimming => codes::SWIMMING,
            Self::Running => codes::RUNNING,
            Self::SportsWalking => codes::SPORTS_WALKING,
        }
    }

    /// Training type name shown in summary messages
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Swimming => "Swimming",
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
        }
    }

    /// Meters covered per counted action
    #[must_use]
    pub const fn step_length_meters(&self) -> f64 {
        match self {
            Self::Swimming => step_length::STROKE_METERS,
            Self::Running | Self::SportsWalking => step_length::STEP_METERS,
        }
    }

    /// Names of the positional readings a package of this kind carries
    #[must_use]
    pub const fn reading_names(&self) -> &'static [&'static str] {
        match self {
            Self::Swimming => &[
                "action",
                "duration_hours",
                "weight_kg",
                "pool_length_m",
                "pool_count",
            ],
            Self::Running => &["action", "duration_hours", "weight_kg"],
            Self::SportsWalking => &["action", "duration_hours", "weight_kg", "height"],
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_codes_round_trip() {
        for kind in WorkoutKind::ALL {
            assert_eq!(WorkoutKind::from_code(kind.code()).unwrap(), kind);
        }
    }

    #[test]
    fn test_code_lookup_trims_but_keeps_case() {
        assert_eq!(" RUN ".parse::<WorkoutKind>().unwrap(), WorkoutKind::Running);
        let err = WorkoutKind::from_code("run").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownWorkoutType);
    }

    #[test]
    fn test_unknown_code() {
        let err = WorkoutKind::from_code("XYZ").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownWorkoutType);
        assert!(err.message.contains("XYZ"));
    }

    #[test]
    fn test_step_lengths() {
        assert!((WorkoutKind::Swimming.step_length_meters() - 1.38).abs() < f64::EPSILON);
        assert!((WorkoutKind::Running.step_length_meters() - 0.65).abs() < f64::EPSILON);
        assert!((WorkoutKind::SportsWalking.step_length_meters() - 0.65).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reading_arity() {
        assert_eq!(WorkoutKind::Running.reading_names().len(), 3);
        assert_eq!(WorkoutKind::SportsWalking.reading_names().len(), 4);
        assert_eq!(WorkoutKind::Swimming.reading_names().len(), 5);
    }
}
