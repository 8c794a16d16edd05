//! # Pulse Planner
//!
//! Driver estimation and efficiency analysis for restaurant delivery shifts.
//!
//! ## Driver Formula
//!
//! ```text
//! return          = km / speed × 60
//! to_customer     = production + delivery
//! cycle           = to_customer + stop + return
//! orders/driver   = shift_minutes / cycle × orders_per_trip
//! drivers         = ⌈orders / orders_per_driver⌉
//! ```
//!
//! The grade (A-D) only looks at `to_customer`; see [`pulse_common::Scenario`].
//!
//! ## Modules
//!
//! - [`estimator`]: the driver estimator
//! - [`insights`]: per-grade improvement suggestions
//! - [`comparison`]: ideal-vs-actual gap analysis for a period
//! - [`advisory`]: input sanity hints (route speed, delivery window, order volume)
//! - [`display`]: rounded strings for rendering, kept out of the estimator

pub mod advisory;
pub mod comparison;
pub mod display;
pub mod estimator;
pub mod insights;

use pulse_common::{
    EstimateRequest, EstimateResult, PulseError, Result, ScenarioThresholds, DINNER_SHIFT_MINUTES,
    LUNCH_SHIFT_MINUTES, ORDERS_PER_TRIP, RETURN_SPEED_KMH,
};
use serde::{Deserialize, Serialize};

pub use comparison::{ComparisonReport, ComparisonRequest, IdealTargets, IndicatorStatus};
pub use display::DisplayFigures;
pub use estimator::{estimate, estimate_raw, DeliveryEstimator};
pub use insights::{Insight, InsightGenerator, InsightInput};

/// Planner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerSettings {
    /// Average return-leg speed (km/h)
    pub return_speed_kmh: f64,
    /// Orders bundled per delivery run
    pub orders_per_trip: f64,
    /// Lunch shift duration (minutes)
    pub lunch_minutes: f64,
    /// Dinner shift duration (minutes)
    pub dinner_minutes: f64,
    /// Grade boundaries on time to customer
    pub thresholds: ScenarioThresholds,
    /// Reference targets for the comparison view
    pub ideal: IdealTargets,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            return_speed_kmh: RETURN_SPEED_KMH,
            orders_per_trip: ORDERS_PER_TRIP,
            lunch_minutes: LUNCH_SHIFT_MINUTES,
            dinner_minutes: DINNER_SHIFT_MINUTES,
            thresholds: ScenarioThresholds::default(),
            ideal: IdealTargets::default(),
        }
    }
}

impl PlannerSettings {
    /// Reject settings that would make the estimator divide by zero or misgrade
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("return_speed_kmh", self.return_speed_kmh),
            ("orders_per_trip", self.orders_per_trip),
            ("lunch_minutes", self.lunch_minutes),
            ("dinner_minutes", self.dinner_minutes),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(PulseError::Config(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        if !self.thresholds.is_valid() {
            return Err(PulseError::Config(format!(
                "scenario thresholds must be finite and strictly increasing, got {:?}",
                self.thresholds
            )));
        }
        self.ideal.validate()
    }
}

/// Planner service bundling the estimator and its analyses
#[derive(Debug, Clone)]
pub struct DeliveryPlanner {
    estimator: DeliveryEstimator,
    insights: InsightGenerator,
    ideal: IdealTargets,
}

impl Default for DeliveryPlanner {
    fn default() -> Self {
        Self {
            estimator: DeliveryEstimator::default(),
            insights: InsightGenerator,
            ideal: IdealTargets::default(),
        }
    }
}

impl DeliveryPlanner {
    pub fn new(settings: &PlannerSettings) -> Result<Self> {
        Ok(Self {
            estimator: DeliveryEstimator::from_settings(settings)?,
            insights: InsightGenerator,
            ideal: settings.ideal,
        })
    }

    /// Estimate drivers for a shift
    pub fn estimate(&self, request: &EstimateRequest) -> Result<EstimateResult> {
        Ok(self.estimator.estimate(request)?)
    }

    /// Improvement suggestions for an estimate
    pub fn insight(&self, result: &EstimateResult) -> Insight {
        self.insights.generate(&InsightInput::from(result))
    }

    /// Compare a period's actual times against the ideal targets
    pub fn compare(&self, request: &ComparisonRequest) -> Result<ComparisonReport> {
        Ok(comparison::compare(
            request,
            &self.ideal,
            self.estimator.thresholds(),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_common::{Scenario, Shift};

    #[test]
    fn test_default_settings_are_valid() {
        assert!(PlannerSettings::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_orders_per_trip() {
        let settings = PlannerSettings {
            orders_per_trip: 0.0,
            ..Default::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("orders_per_trip"));
        assert!(DeliveryPlanner::new(&settings).is_err());
    }

    #[test]
    fn test_rejects_unordered_thresholds() {
        let settings = PlannerSettings {
            thresholds: ScenarioThresholds { a_max: 70.0, b_max: 60.0, c_max: 50.0 },
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(PulseError::Config(_))));
    }

    #[test]
    fn test_planner_end_to_end() {
        let planner = DeliveryPlanner::new(&PlannerSettings::default()).unwrap();
        let request = EstimateRequest::new(Shift::Dinner, 80, 25.0, 8.0, 30.0, 6.0);

        let result = planner.estimate(&request).unwrap();
        assert_eq!(result.scenario, Scenario::B);

        let insight = planner.insight(&result);
        assert_eq!(insight.scenario, Scenario::B);
    }

    #[test]
    fn test_settings_partial_json_uses_defaults() {
        let settings: PlannerSettings =
            serde_json::from_str(r#"{"orders_per_trip": 1.9}"#).unwrap();
        assert_eq!(settings.orders_per_trip, 1.9);
        assert_eq!(settings.lunch_minutes, 379.0);
        assert_eq!(settings.thresholds, ScenarioThresholds::default());
    }
}
