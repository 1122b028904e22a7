// ABOUTME: Typed workout records built from validated sensor readings
// ABOUTME: Enum of per-activity structs sharing a common action/duration/weight base
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use workout_core::errors::{AppError, AppResult};
use workout_core::models::WorkoutKind;

/// Readings every workout carries
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkoutBase {
    action: u32,
    duration_hours: f64,
    weight_kg: f64,
}

impl WorkoutBase {
    /// Create a validated base record
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ValueOutOfRange` if the duration or weight is not
    /// a finite positive number
    pub fn new(action: u32, duration_hours: f64, weight_kg: f64) -> AppResult<Self> {
        require_positive("duration_hours", duration_hours)?;
        require_positive("weight_kg", weight_kg)?;
        Ok(Self {
            action,
            duration_hours,
            weight_kg,
        })
    }

    /// Counted steps or strokes
    #[must_use]
    pub const fn action(&self) -> u32 {
        self.action
    }

    /// Workout duration in hours, always > 0
    #[must_use]
    pub const fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    /// Athlete weight in kilograms
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

/// Running workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Running {
    /// Shared readings
    pub base: WorkoutBase,
}

/// Sports walking workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SportsWalking {
    /// Shared readings
    pub base: WorkoutBase,
    height: f64,
}

impl SportsWalking {
    /// Create a walking workout
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ValueOutOfRange` if the height is not a finite positive number
    pub fn new(base: WorkoutBase, height: f64) -> AppResult<Self> {
        require_positive("height", height)?;
        Ok(Self { base, height })
    }

    /// Athlete height, in the unit the device reports (centimeters in practice)
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }
}

/// Pool swimming workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Swimming {
    /// Shared readings
    pub base: WorkoutBase,
    pool_length_m: f64,
    pool_count: u32,
}

impl Swimming {
    /// Create a swimming workout
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ValueOutOfRange` if the pool length is not a finite positive number
    pub fn new(base: WorkoutBase, pool_length_m: f64, pool_count: u32) -> AppResult<Self> {
        require_positive("pool_length_m", pool_length_m)?;
        Ok(Self {
            base,
            pool_length_m,
            pool_count,
        })
    }

    /// Pool length in meters
    #[must_use]
    pub const fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    /// Number of pool lengths swum
    #[must_use]
    pub const fn pool_count(&self) -> u32 {
        self.pool_count
    }
}

/// A workout of any supported kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Workout {
    /// Pool swimming
    Swimming(Swimming),
    /// Running
    Running(Running),
    /// Sports walking
    SportsWalking(SportsWalking),
}

impl Workout {
    /// Activity kind of this workout
    #[must_use]
    pub const fn kind(&self) -> WorkoutKind {
        match self {
            Self::Swimming(_) => WorkoutKind::Swimming,
            Self::Running(_) => WorkoutKind::Running,
            Self::SportsWalking(_) => WorkoutKind::SportsWalking,
        }
    }

    /// Readings shared by all kinds
    #[must_use]
    pub const fn base(&self) -> &WorkoutBase {
        match self {
            Self::Swimming(swim) => &swim.base,
            Self::Running(run) => &run.base,
            Self::SportsWalking(walk) => &walk.base,
        }
    }
}

impl From<Running> for Workout {
    fn from(run: Running) -> Self {
        Self::Running(run)
    }
}

impl From<SportsWalking> for Workout {
    fn from(walk: SportsWalking) -> Self {
        Self::SportsWalking(walk)
    }
}

impl From<Swimming> for Workout {
    fn from(swim: Swimming) -> Self {
        Self::Swimming(swim)
    }
}

fn require_positive(field: &str, value: f64) -> AppResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::out_of_range(format!(
            "{field} must be a finite positive number, got {value}"
        )));
    }
    Ok(())
}
