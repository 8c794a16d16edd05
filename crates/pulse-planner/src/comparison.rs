//! Ideal-vs-actual comparison
//!
//! Measures how far a period's average timings sit from the reference
//! targets and turns positive gaps into concrete reductions.

use chrono::NaiveDate;
use pulse_common::{
    ComparisonError, EstimateError, PulseError, Result, Scenario, ScenarioThresholds,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Reference timings, in minutes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdealTargets {
    pub production: f64,
    pub delivery: f64,
    pub stop: f64,
    pub total: f64,
}

impl Default for IdealTargets {
    fn default() -> Self {
        Self {
            production: 25.0,
            delivery: 25.0,
            stop: 5.0,
            total: 50.0,
        }
    }
}

impl IdealTargets {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("ideal.production", self.production),
            ("ideal.delivery", self.delivery),
            ("ideal.stop", self.stop),
            ("ideal.total", self.total),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(PulseError::Config(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// A period's observed averages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRequest {
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub total_orders: u32,
    pub average_km: f64,
    pub production_time: f64,
    pub delivery_time: f64,
    pub stop_time: f64,
}

impl ComparisonRequest {
    pub fn validate(&self) -> std::result::Result<(), ComparisonError> {
        if self.period_start > self.period_end {
            return Err(ComparisonError::InvalidPeriod {
                start: self.period_start.to_string(),
                end: self.period_end.to_string(),
            });
        }
        EstimateError::check_positive("production_time", self.production_time)?;
        EstimateError::check_positive("delivery_time", self.delivery_time)?;
        EstimateError::check_positive("stop_time", self.stop_time)?;
        if !self.average_km.is_finite() {
            return Err(EstimateError::NonFinite { field: "average_km" }.into());
        }
        if self.average_km < 0.0 {
            return Err(ComparisonError::Negative {
                field: "average_km",
                value: self.average_km,
            });
        }
        Ok(())
    }

    /// Number of calendar days covered, both ends included
    pub fn period_days(&self) -> i64 {
        (self.period_end - self.period_start).num_days() + 1
    }
}

/// Standing of one indicator against its target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "minutes", rename_all = "snake_case")]
pub enum IndicatorStatus {
    OnTarget,
    Reduce(f64),
}

impl IndicatorStatus {
    fn from_gap(gap: f64) -> Self {
        if gap <= 0.0 {
            IndicatorStatus::OnTarget
        } else {
            IndicatorStatus::Reduce(gap)
        }
    }
}

/// Gap analysis for a period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub period_days: i64,
    pub total_orders: u32,
    pub total_time_to_customer: f64,
    pub scenario: Scenario,
    pub ideal: IdealTargets,
    pub production_gap: f64,
    pub delivery_gap: f64,
    pub stop_gap: f64,
    pub total_gap: f64,
    pub production: IndicatorStatus,
    pub delivery: IndicatorStatus,
    pub stop: IndicatorStatus,
    pub total: IndicatorStatus,
    pub suggestions: Vec<String>,
}

/// Compare a period against the ideal targets
#[instrument(
    skip(ideal, thresholds),
    fields(start = %request.period_start, end = %request.period_end)
)]
pub fn compare(
    request: &ComparisonRequest,
    ideal: &IdealTargets,
    thresholds: &ScenarioThresholds,
) -> std::result::Result<ComparisonReport, ComparisonError> {
    request.validate()?;

    let total_time_to_customer = request.production_time + request.delivery_time;
    let scenario = thresholds.classify(total_time_to_customer);

    let production_gap = request.production_time - ideal.production;
    let delivery_gap = request.delivery_time - ideal.delivery;
    let stop_gap = request.stop_time - ideal.stop;
    let total_gap = total_time_to_customer - ideal.total;

    let suggestions = suggestions(scenario, production_gap, delivery_gap, stop_gap);

    debug!(scenario = %scenario, total_gap, "Comparison computed");

    Ok(ComparisonReport {
        period_start: request.period_start,
        period_end: request.period_end,
        period_days: request.period_days(),
        total_orders: request.total_orders,
        total_time_to_customer,
        scenario,
        ideal: *ideal,
        production_gap,
        delivery_gap,
        stop_gap,
        total_gap,
        production: IndicatorStatus::from_gap(production_gap),
        delivery: IndicatorStatus::from_gap(delivery_gap),
        stop: IndicatorStatus::from_gap(stop_gap),
        total: IndicatorStatus::from_gap(total_gap),
        suggestions,
    })
}

fn suggestions(
    scenario: Scenario,
    production_gap: f64,
    delivery_gap: f64,
    stop_gap: f64,
) -> Vec<String> {
    if scenario == Scenario::A {
        return Vec::new();
    }

    let mut out: Vec<String> = [
        (production_gap, "production"),
        (delivery_gap, "delivery"),
        (stop_gap, "the customer stop"),
    ]
    .into_iter()
    .filter(|(gap, _)| *gap > 0.0)
    .map(|(gap, stage)| format!("Cut {} minutes from {}.", gap, stage))
    .collect();

    if !out.is_empty() {
        out.push("Apply these improvements to reach Scenario A.".to_string());
    }
    out
}
