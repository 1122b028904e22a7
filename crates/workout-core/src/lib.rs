// ABOUTME: Core types and constants for the workout metrics calculator
// ABOUTME: Foundation crate with error handling, unit constants, and workout kinds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Core
//!
//! Foundation crate providing shared types and constants for the workout
//! metrics calculator. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Unit conversions and per-kind formula coefficients
//! - **models**: `WorkoutKind` and its three-letter sensor codes

/// Unified error handling system with standard error codes
pub mod errors;

/// Unit conversions and formula coefficients organized by activity
pub mod constants;

/// Core data models (`WorkoutKind`)
pub mod models;
