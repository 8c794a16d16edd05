//! # Pulse Common
//!
//! Shared types, errors, and planning constants for the Pulse delivery fleet planner.
//!
//! ## Core Types
//!
//! - [`Shift`]: operating window (lunch or dinner) with its fixed duration
//! - [`Scenario`]: A-D efficiency grade derived from time to customer
//! - [`ScenarioThresholds`]: inclusive upper bounds used by the classifier
//! - [`EstimateRequest`]/[`EstimateResult`]: estimator input and output records
//!
//! ## Fleet Formula
//!
//! ```text
//! return    = km / 39.6 × 60
//! cycle     = production + delivery + stop + return
//! drivers   = ⌈orders / (shift_minutes / cycle × orders_per_trip)⌉
//! ```

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ComparisonError, ErrorKind, EstimateError, PulseError, Result};
pub use types::{
    estimate::{EstimateRequest, EstimateResult},
    scenario::{classify, Scenario, ScenarioThresholds},
    shift::Shift,
};

/// Pulse version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Average return-leg speed in km/h
///
/// The way back is assumed ~10% faster than the outbound leg.
pub const RETURN_SPEED_KMH: f64 = 39.6;

/// Orders bundled into a single delivery run
pub const ORDERS_PER_TRIP: f64 = 2.0;

/// Lunch shift duration (11:40 - 17:59)
pub const LUNCH_SHIFT_MINUTES: f64 = 379.0;

/// Dinner shift duration (18:00 - 23:00)
pub const DINNER_SHIFT_MINUTES: f64 = 300.0;

/// Upper bound (inclusive) of time to customer for grade A, in minutes
pub const GRADE_A_MAX_MINUTES: f64 = 50.0;

/// Upper bound (inclusive) of time to customer for grade B, in minutes
pub const GRADE_B_MAX_MINUTES: f64 = 60.0;

/// Upper bound (inclusive) of time to customer for grade C, in minutes
pub const GRADE_C_MAX_MINUTES: f64 = 70.0;
