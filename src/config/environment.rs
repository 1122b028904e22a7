// ABOUTME: Environment configuration for the workout report
// ABOUTME: Reads output format and log level from environment variables with CLI overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use serde::{Deserialize, Serialize};
use std::env;
use tracing::info;

use crate::errors::{AppError, AppResult};
use crate::formatters::OutputFormat;

/// Environment variable names
pub mod env_config {
    /// Default output format (`text` or `json`)
    pub const OUTPUT_FORMAT: &str = "WORKOUT_OUTPUT_FORMAT";
    /// Log level when `RUST_LOG` is not set
    pub const LOG_LEVEL: &str = "WORKOUT_LOG_LEVEL";
}

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors; keeps stdout reserved for report lines
    #[default]
    Warn,
    /// Informational events
    Info,
    /// Per-workout detail
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "info" => Self::Info,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Warn,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Report configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportConfig {
    /// Output format for report lines
    pub output_format: OutputFormat,
    /// Log level
    pub log_level: LogLevel,
}

impl ReportConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if `WORKOUT_OUTPUT_FORMAT` is set to
    /// something other than `text` or `json`
    pub fn from_env() -> AppResult<Self> {
        let output_format = match env::var(env_config::OUTPUT_FORMAT) {
            Ok(value) => value.parse::<OutputFormat>().map_err(|e| {
                AppError::config(format!(
                    "{} is invalid: {}",
                    env_config::OUTPUT_FORMAT,
                    e.message
                ))
            })?,
            Err(_) => OutputFormat::default(),
        };

        let log_level = env::var(env_config::LOG_LEVEL)
            .map(|value| LogLevel::from_str_or_default(&value))
            .unwrap_or_default();

        Ok(Self {
            output_format,
            log_level,
        })
    }

    /// Apply command-line overrides on top of the environment values
    #[must_use]
    pub fn with_overrides(mut self, output_format: Option<OutputFormat>, verbose: bool) -> Self {
        if let Some(format) = output_format {
            self.output_format = format;
        }
        if verbose {
            self.log_level = LogLevel::Debug;
        }
        self
    }

    /// Log a configuration summary
    pub fn log_summary(&self) {
        info!(
            report.output_format = %self.output_format,
            log.level = %self.log_level,
            "Report configuration loaded"
        );
    }
}
