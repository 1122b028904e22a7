// ABOUTME: Workout metrics calculation producing immutable training summaries
// ABOUTME: Dispatches each workout kind to its distance, speed, and calorie formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout metrics calculation

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::intelligence::algorithms::calories;
use crate::models::{Workout, WorkoutKind};

/// Derived statistics for one workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingSummary {
    /// Activity kind
    pub kind: WorkoutKind,
    /// Duration in hours
    pub duration_hours: f64,
    /// Distance in kilometers
    pub distance_km: f64,
    /// Mean speed in km/h
    pub mean_speed_kmh: f64,
    /// Calories burned (kcal)
    pub calories: f64,
}

impl TrainingSummary {
    /// Training type name used in messages
    #[must_use]
    pub const fn training_type(&self) -> &'static str {
        self.kind.display_name()
    }
}

/// Stateless calculator over workout records
pub struct MetricsCalculator;

impl MetricsCalculator {
    /// Distance in kilometers
    #[must_use]
    pub fn distance_km(workout: &Workout) -> f64 {
        calories::distance_km(workout.kind(), workout.base().action())
    }

    /// Mean speed in km/h
    #[must_use]
    pub fn mean_speed_kmh(workout: &Workout) -> f64 {
        match workout {
            Workout::Swimming(swim) => calories::swimming_mean_speed_kmh(
                swim.pool_length_m(),
                swim.pool_count(),
                swim.base.duration_hours(),
            ),
            Workout::Running(_) | Workout::SportsWalking(_) => calories::mean_speed_kmh(
                Self::distance_km(workout),
                workout.base().duration_hours(),
            ),
        }
    }

    /// Calories burned
    #[must_use]
    pub fn spent_calories(workout: &Workout) -> f64 {
        let speed = Self::mean_speed_kmh(workout);
        match workout {
            Workout::Running(run) => {
                calories::running_calories(speed, run.base.weight_kg(), run.base.duration_hours())
            }
            Workout::SportsWalking(walk) => calories::walking_calories(
                speed,
                walk.base.weight_kg(),
                walk.height(),
                walk.base.duration_hours(),
            ),
            Workout::Swimming(swim) => calories::swimming_calories(speed, swim.base.weight_kg()),
        }
    }

    /// Compute every derived field for a workout
    #[must_use]
    pub fn summarize(workout: &Workout) -> TrainingSummary {
        let summary = TrainingSummary {
            kind: workout.kind(),
            duration_hours: workout.base().duration_hours(),
            distance_km: Self::distance_km(workout),
            mean_speed_kmh: Self::mean_speed_kmh(workout),
            calories: Self::spent_calories(workout),
        };

        debug!(
            workout.kind = %summary.kind,
            workout.distance_km = summary.distance_km,
            workout.mean_speed_kmh = summary.mean_speed_kmh,
            workout.calories = summary.calories,
            formula = calories::formula(summary.kind),
            "Workout summarized"
        );

        summary
    }
}
