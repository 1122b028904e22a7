// ABOUTME: Error handling re-exported from workout-core
// ABOUTME: Keeps crate::errors paths stable for the library and binary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! `AppError`, `ErrorCode` and `AppResult` live in the foundation crate so the
//! workout kind parser there can return them too.

pub use workout_core::errors::*;
