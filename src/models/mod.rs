// ABOUTME: Workout data models and core model re-exports
// ABOUTME: Re-exports WorkoutKind from workout-core alongside the typed workout records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `WorkoutKind`: swimming, running or sports walking
//! - `Workout`: enum of per-kind records built from validated readings
//! - `WorkoutBase`: action count, duration and weight shared by every kind

/// Typed workout records
pub mod workout;

pub use workout::{Running, SportsWalking, Swimming, Workout, WorkoutBase};
pub use workout_core::models::*;
