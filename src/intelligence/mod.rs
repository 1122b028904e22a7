// ABOUTME: Workout intelligence module with formula catalog and metrics calculator
// ABOUTME: Turns typed workouts into training summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! - `algorithms`: per-kind distance, speed and calorie formulas
//! - `metrics`: `MetricsCalculator` and the `TrainingSummary` it produces

/// Per-kind formula catalog
pub mod algorithms;

/// Metrics calculator and training summary
pub mod metrics;

pub use metrics::{MetricsCalculator, TrainingSummary};
