// ABOUTME: Core data models shared across the workspace
// ABOUTME: Re-exports WorkoutKind and its code parsing

/// Workout kind enumeration and sensor code mapping
pub mod workout_kind;

pub use workout_kind::WorkoutKind;
