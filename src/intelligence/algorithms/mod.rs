// ABOUTME: Formula catalog for workout metrics
// ABOUTME: Pure per-activity distance, speed, and calorie functions

//! Algorithm Module
//!
//! Each activity kind has one calorie function; distance and mean speed are
//! shared except for the swimming speed override. Functions take validated
//! readings and never fail.

pub mod calories;

pub use calories::{
    distance_km, formula, mean_speed_kmh, running_calories, swimming_calories,
    swimming_mean_speed_kmh, walking_calories,
};
