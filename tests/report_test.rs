// ABOUTME: End-to-end tests for the workout report driver and the workout-report binary
// ABOUTME: Verifies line order, error lines for bad packages, and JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::process::Command;

use workout_metrics::formatters::OutputFormat;
use workout_metrics::packages::{sample_packages, SensorPackage};
use workout_metrics::report::{run_report, ReportOutcome, INPUT_ERROR_MESSAGE};

const SAMPLE_LINES: [&str; 3] = [
    "Training type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; Mean speed: 1.000 km/h; Calories burned: 336.000.",
    "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; Mean speed: 9.750 km/h; Calories burned: 699.750.",
    "Training type: SportsWalking; Duration: 1.000 h.; Distance: 5.850 km; Mean speed: 5.850 km/h; Calories burned: 157.500.",
];

fn report_to_string(packages: &[SensorPackage], format: OutputFormat) -> (ReportOutcome, String) {
    let mut buffer = Vec::new();
    let outcome = run_report(packages, format, &mut buffer).unwrap();
    (outcome, String::from_utf8(buffer).unwrap())
}

#[test]
fn test_mixed_packages_keep_input_order() {
    let packages = vec![
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("XYZ", vec![1.0, 2.0, 3.0]),
        SensorPackage::new("RUN", vec![15000.0, 0.0, 75.0]),
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
    ];

    let (outcome, output) = report_to_string(&packages, OutputFormat::Text);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(outcome, ReportOutcome { processed: 2, skipped: 2 });
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], SAMPLE_LINES[1]);
    assert_eq!(lines[1], INPUT_ERROR_MESSAGE);
    assert_eq!(lines[2], INPUT_ERROR_MESSAGE);
    assert_eq!(lines[3], SAMPLE_LINES[0]);
}

#[test]
fn test_json_report() {
    let (outcome, output) = report_to_string(&sample_packages(), OutputFormat::Json);
    assert_eq!(outcome.processed, 3);

    let kinds: Vec<String> = output
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            value["kind"].as_str().unwrap().to_owned()
        })
        .collect();
    assert_eq!(kinds, ["swimming", "running", "sports_walking"]);
}

#[test]
fn test_binary_prints_sample_workouts() {
    let output = Command::new(env!("CARGO_BIN_EXE_workout-report"))
        .env_remove("WORKOUT_OUTPUT_FORMAT")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run workout-report");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, SAMPLE_LINES);
}

#[test]
fn test_binary_reports_unknown_code_and_succeeds() {
    let output = Command::new(env!("CARGO_BIN_EXE_workout-report"))
        .env_remove("WORKOUT_OUTPUT_FORMAT")
        .args(["--package", "XYZ:1,2,3", "--package", "RUN:15000,1,75"])
        .output()
        .expect("failed to run workout-report");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, [INPUT_ERROR_MESSAGE, SAMPLE_LINES[1]]);
}

#[test]
fn test_binary_rejects_malformed_package_argument() {
    let output = Command::new(env!("CARGO_BIN_EXE_workout-report"))
        .args(["--package", "RUN 15000"])
        .output()
        .expect("failed to run workout-report");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_binary_rejects_invalid_format_environment() {
    let output = Command::new(env!("CARGO_BIN_EXE_workout-report"))
        .env("WORKOUT_OUTPUT_FORMAT", "xml")
        .output()
        .expect("failed to run workout-report");

    assert!(!output.status.success());
}
