// ABOUTME: Configuration module for the workout report
// ABOUTME: Environment-only configuration with command-line overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! Formula constants are fixed per activity and live in
//! `workout_core::constants`; only the program surface is configurable.

/// Environment configuration
pub mod environment;

pub use environment::{LogLevel, ReportConfig};
