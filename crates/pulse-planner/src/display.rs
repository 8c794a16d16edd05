//! Rounded figures for rendering an estimate
//!
//! The estimator keeps exact values; rounding only happens here.

use pulse_common::{EstimateResult, Scenario, ScenarioThresholds};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFigures {
    pub required_drivers: String,
    pub cycles_per_driver: String,
    pub orders_per_driver: String,
    pub stop_time: String,
    pub return_time: String,
    pub total_time_to_customer: String,
    pub total_cycle_time: String,
    pub scenario_badge: String,
}

impl From<&EstimateResult> for DisplayFigures {
    fn from(result: &EstimateResult) -> Self {
        Self {
            required_drivers: result.required_drivers.to_string(),
            cycles_per_driver: format!("{:.2}", result.cycles_per_driver),
            orders_per_driver: format!("{:.2}", result.orders_per_driver),
            stop_time: minutes(result.stop_time()),
            return_time: minutes(result.return_time),
            total_time_to_customer: minutes(result.total_time_to_customer),
            total_cycle_time: minutes(result.total_cycle_time),
            scenario_badge: badge(result.scenario, &result.thresholds),
        }
    }
}

fn minutes(value: f64) -> String {
    format!("{:.1} min", value)
}

/// "Scenario B – Regular efficiency: 51 to 60 minutes"
pub fn badge(scenario: Scenario, thresholds: &ScenarioThresholds) -> String {
    format!(
        "Scenario {} – {}: {}",
        scenario,
        scenario.label(),
        thresholds.band(scenario)
    )
}
