//! Estimate records - what goes into and comes out of the driver estimator
//!
//! Both records are plain values. A result carries the inputs and the
//! constants it was computed with, so renderers and exporters never need to
//! re-derive anything.

use serde::{Deserialize, Serialize};

use crate::error::EstimateError;
use crate::types::{
    scenario::{Scenario, ScenarioThresholds},
    shift::Shift,
};

/// Operational parameters for one shift
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// Operating window
    pub shift: Shift,

    /// Orders expected during the shift
    pub estimated_orders: u32,

    /// Average one-way travel time to the customer (minutes)
    pub delivery_time: f64,

    /// Average one-way delivery distance (km)
    pub average_km: f64,

    /// Kitchen preparation/release time (minutes)
    pub production_time: f64,

    /// Time spent at the customer's door (minutes)
    pub stop_time: f64,
}

impl EstimateRequest {
    pub fn new(
        shift: Shift,
        estimated_orders: u32,
        delivery_time: f64,
        average_km: f64,
        production_time: f64,
        stop_time: f64,
    ) -> Self {
        Self {
            shift,
            estimated_orders,
            delivery_time,
            average_km,
            production_time,
            stop_time,
        }
    }

    /// Check every field before any arithmetic happens
    pub fn validate(&self) -> Result<(), EstimateError> {
        if self.estimated_orders == 0 {
            return Err(EstimateError::NoOrders);
        }
        EstimateError::check_positive("delivery_time", self.delivery_time)?;
        EstimateError::check_positive("average_km", self.average_km)?;
        EstimateError::check_positive("production_time", self.production_time)?;
        EstimateError::check_positive("stop_time", self.stop_time)?;
        Ok(())
    }
}

/// Driver estimate with every derived quantity, unrounded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    /// Inputs the estimate was computed from
    pub request: EstimateRequest,

    /// Shift duration used (minutes)
    pub shift_minutes: f64,

    /// Orders bundled per delivery run
    pub orders_per_trip: f64,

    /// Return leg duration (minutes)
    pub return_time: f64,

    /// Production + outbound delivery (minutes)
    pub total_time_to_customer: f64,

    /// Full round trip including stop and return (minutes)
    pub total_cycle_time: f64,

    /// Round trips one driver completes in the shift
    pub cycles_per_driver: f64,

    /// Orders one driver delivers in the shift
    pub orders_per_driver: f64,

    /// Drivers needed to cover the expected orders
    pub required_drivers: u32,

    /// Efficiency grade from time to customer
    pub scenario: Scenario,

    /// Grade bounds the scenario was classified with
    pub thresholds: ScenarioThresholds,
}

impl EstimateResult {
    pub fn stop_time(&self) -> f64 {
        self.request.stop_time
    }
}
