// ABOUTME: Output formatting for training summaries
// ABOUTME: Renders the fixed human-readable message or a single-line JSON object
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! ## Supported Formats
//!
//! - **Text**: Default, the fixed summary message with three decimals per number
//! - **JSON**: One `TrainingSummary` object per line
//!
//! ## Usage
//!
//! ```rust,ignore
//! use workout_metrics::formatters::{format_summary, OutputFormat};
//!
//! let output = format_summary(&summary, OutputFormat::Text)?;
//! println!("{}", output.data);
//! ```

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::errors::AppError;
use crate::intelligence::TrainingSummary;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable summary message (default)
    #[default]
    Text,
    /// Single-line JSON object
    Json,
}

impl OutputFormat {
    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::invalid_format(format!(
                "Unknown output format: '{other}'. Valid options: text, json"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The rendered line, without trailing newline
    pub data: String,
    /// The format used for rendering
    pub format: OutputFormat,
}

/// Error type for formatting operations
#[derive(Debug, Clone, Error)]
#[error("Format error ({format}): {message}")]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl From<FormatError> for AppError {
    fn from(error: FormatError) -> Self {
        Self::serialization(error.message.clone()).with_source(error)
    }
}

/// Fixed human-readable message for a training summary
#[must_use]
pub fn info_message(summary: &TrainingSummary) -> String {
    format!(
        "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; Mean speed: {:.3} km/h; Calories burned: {:.3}.",
        summary.training_type(),
        summary.duration_hours,
        summary.distance_km,
        summary.mean_speed_kmh,
        summary.calories,
    )
}

/// Render a training summary in the requested format
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails
pub fn format_summary(
    summary: &TrainingSummary,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Text => info_message(summary),
        OutputFormat::Json => serde_json::to_string(summary).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
    };

    Ok(FormattedOutput { data, format })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkoutKind;

    fn swim_summary() -> TrainingSummary {
        TrainingSummary {
            kind: WorkoutKind::Swimming,
            duration_hours: 1.0,
            distance_km: 0.9936,
            mean_speed_kmh: 1.0,
            calories: 336.0,
        }
    }

    #[test]
    fn test_text_message_template() {
        assert_eq!(
            info_message(&swim_summary()),
            "Training type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; \
             Mean speed: 1.000 km/h; Calories burned: 336.000."
        );
    }

    #[test]
    fn test_json_output_is_single_line() {
        let output = format_summary(&swim_summary(), OutputFormat::Json).unwrap();
        assert!(!output.data.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&output.data).unwrap();
        assert_eq!(value["kind"], "swimming");
        assert_eq!(value["calories"], 336.0);
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(" text ".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("toon".parse::<OutputFormat>().is_err());
    }
}
