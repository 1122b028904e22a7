// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversions and per-activity formula coefficients for workout metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain. The formula coefficients are fixed per
//! activity kind and are not configurable at runtime.

/// Unit conversion constants
pub mod units {
    /// Meters per kilometer
    pub const METERS_PER_KILOMETER: f64 = 1000.0;
    /// Minutes per hour
    pub const MINUTES_PER_HOUR: f64 = 60.0;
}

/// Distance covered per counted action (step or stroke), in meters
pub mod step_length {
    /// Step length for running and sports walking
    pub const STEP_METERS: f64 = 0.65;
    /// Stroke length for swimming
    pub const STROKE_METERS: f64 = 1.38;
}

/// Running calorie coefficients
pub mod running {
    /// Multiplier applied to mean speed
    pub const SPEED_MULTIPLIER: f64 = 18.0;
    /// Offset subtracted from the scaled speed
    pub const SPEED_SHIFT: f64 = 20.0;
}

/// Sports walking calorie coefficients
pub mod walking {
    /// Weight coefficient of the base term
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    /// Weight coefficient of the speed/height term
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    /// Exponent applied to mean speed before the height division
    pub const SPEED_EXPONENT: i32 = 2;
}

/// Swimming calorie coefficients
pub mod swimming {
    /// Offset added to mean speed
    pub const SPEED_SHIFT: f64 = 1.1;
    /// Multiplier applied to the shifted speed
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}

/// Sensor package codes
pub mod codes {
    /// Swimming package code
    pub const SWIMMING: &str = "SWM";
    /// Running package code
    pub const RUNNING: &str = "RUN";
    /// Sports walking package code
    pub const SPORTS_WALKING: &str = "WLK";
}
