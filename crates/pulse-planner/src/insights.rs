//! Efficiency insights
//!
//! Fixed per-grade advice plus threshold warnings on the individual timings.
//! Presentation only: nothing here feeds back into the estimate.

use pulse_common::{EstimateResult, Scenario};
use serde::{Deserialize, Serialize};

/// Everything the rules look at
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsightInput {
    pub scenario: Scenario,
    pub production_time: f64,
    pub stop_time: f64,
    pub delivery_time: f64,
    pub average_km: f64,
    pub total_time_to_customer: f64,
}

impl From<&EstimateResult> for InsightInput {
    fn from(result: &EstimateResult) -> Self {
        Self {
            scenario: result.scenario,
            production_time: result.request.production_time,
            stop_time: result.request.stop_time,
            delivery_time: result.request.delivery_time,
            average_km: result.request.average_km,
            total_time_to_customer: result.total_time_to_customer,
        }
    }
}

/// Human-readable assessment of a scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub scenario: Scenario,
    pub title: String,
    pub summary: String,
    pub improvements: Vec<String>,
    pub warnings: Vec<String>,
}

/// A warning that fires when its predicate holds
struct WarningRule {
    applies: fn(&InsightInput) -> bool,
    message: &'static str,
}

fn production_over_30(i: &InsightInput) -> bool {
    i.production_time > 30.0
}

fn production_over_40(i: &InsightInput) -> bool {
    i.production_time > 40.0
}

fn production_at_least_45(i: &InsightInput) -> bool {
    i.production_time >= 45.0
}

fn stop_at_least_8(i: &InsightInput) -> bool {
    i.stop_time >= 8.0
}

fn stop_at_least_10(i: &InsightInput) -> bool {
    i.stop_time >= 10.0
}

fn delivery_at_least_30(i: &InsightInput) -> bool {
    i.delivery_time >= 30.0
}

fn distance_over_9(i: &InsightInput) -> bool {
    i.average_km > 9.0
}

fn distance_over_10(i: &InsightInput) -> bool {
    i.average_km > 10.0
}

/// Static content for one grade
struct GradeContent {
    title: &'static str,
    summary: &'static str,
    improvements: &'static [&'static str],
    warnings: &'static [WarningRule],
}

static GRADE_A: GradeContent = GradeContent {
    title: "Scenario A - High efficiency",
    summary: "Your operation is performing with an excellent balance between production time and logistics.",
    improvements: &[
        "Keep monitoring the indicators.",
        "Use this scenario as the reference for ideal performance.",
    ],
    warnings: &[],
};

static GRADE_B: GradeContent = GradeContent {
    title: "Scenario B - Regular efficiency",
    summary: "Your operation is running at the acceptable limit, with clear room for improvement.",
    improvements: &[
        "Strengthen pre-preparation steps to reduce production time.",
        "Review bottlenecks in finishing and assembly.",
        "Train drivers to shorten the stop at the customer.",
    ],
    warnings: &[
        WarningRule {
            applies: production_over_30,
            message: "Production time above 30 minutes may be overloading dispatch.",
        },
        WarningRule {
            applies: stop_at_least_8,
            message: "Stop time is acceptable but can still be optimized.",
        },
    ],
};

static GRADE_C: GradeContent = GradeContent {
    title: "Scenario C - Low efficiency",
    summary: "Your operation has significant bottlenecks affecting the customer experience.",
    improvements: &[
        "Reinforce the team or redistribute production schedules.",
        "Review the coverage area to see whether the delivery radius can shrink.",
        "Reduce driver idle time during the customer stop.",
        "Plan a stronger roster for high-demand days.",
    ],
    warnings: &[
        WarningRule {
            applies: production_over_40,
            message: "Production time above 40 minutes can pile up in the kitchen and cascade into delays.",
        },
        WarningRule {
            applies: distance_over_9,
            message: "Average delivery distance is high, demanding more time and resources.",
        },
        WarningRule {
            applies: stop_at_least_10,
            message: "Stop time at the customer is above ideal and delays the return leg.",
        },
    ],
};

static GRADE_D: GradeContent = GradeContent {
    title: "Scenario D - Critical efficiency",
    summary: "Your operation is at a critical risk point. Efficiency is compromised and the customer experience may suffer.",
    improvements: &[
        "Reinforce the production team immediately.",
        "Activate fleet contingency or redistribute drivers.",
        "Reduce the delivery area during peaks.",
        "Reorganize preparation times to get ahead of bottlenecks.",
    ],
    warnings: &[
        WarningRule {
            applies: production_at_least_45,
            message: "Production time is critical. The line may be stuck at finishing.",
        },
        WarningRule {
            applies: delivery_at_least_30,
            message: "Delivery time is high. Re-evaluate logistics and service radius.",
        },
        WarningRule {
            applies: distance_over_10,
            message: "Average distance is above normal. Consider adjusting geographic coverage.",
        },
    ],
};

/// Rule-based insight generator
#[derive(Debug, Clone, Copy, Default)]
pub struct InsightGenerator;

impl InsightGenerator {
    pub fn generate(&self, input: &InsightInput) -> Insight {
        let content = match input.scenario {
            Scenario::A => &GRADE_A,
            Scenario::B => &GRADE_B,
            Scenario::C => &GRADE_C,
            Scenario::D => &GRADE_D,
        };

        Insight {
            scenario: input.scenario,
            title: content.title.to_string(),
            summary: content.summary.to_string(),
            improvements: content.improvements.iter().map(|s| s.to_string()).collect(),
            warnings: content
                .warnings
                .iter()
                .filter(|rule| (rule.applies)(input))
                .map(|rule| rule.message.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(scenario: Scenario) -> InsightInput {
        InsightInput {
            scenario,
            production_time: 20.0,
            stop_time: 5.0,
            delivery_time: 20.0,
            average_km: 5.0,
            total_time_to_customer: 40.0,
        }
    }

    #[test]
    fn test_grade_a_has_no_warnings() {
        let mut i = input(Scenario::A);
        i.production_time = 90.0;
        let insight = InsightGenerator.generate(&i);
        assert!(insight.title.contains("High efficiency"));
        assert_eq!(insight.improvements.len(), 2);
        assert!(insight.warnings.is_empty());
    }

    #[test]
    fn test_grade_b_production_warning() {
        let mut i = input(Scenario::B);
        i.production_time = 30.0;
        assert!(InsightGenerator.generate(&i).warnings.is_empty());

        i.production_time = 30.5;
        let insight = InsightGenerator.generate(&i);
        assert_eq!(insight.warnings.len(), 1);
        assert!(insight.warnings[0].contains("above 30 minutes"));
    }

    #[test]
    fn test_grade_b_stop_warning_is_inclusive() {
        let mut i = input(Scenario::B);
        i.stop_time = 8.0;
        let insight = InsightGenerator.generate(&i);
        assert_eq!(insight.warnings.len(), 1);
        assert_eq!(insight.improvements.len(), 3);
    }

    #[test]
    fn test_grade_c_all_warnings() {
        let mut i = input(Scenario::C);
        i.production_time = 41.0;
        i.average_km = 9.5;
        i.stop_time = 10.0;
        let insight = InsightGenerator.generate(&i);
        assert_eq!(insight.warnings.len(), 3);
        assert_eq!(insight.improvements.len(), 4);
    }

    #[test]
    fn test_grade_d_boundaries() {
        let mut i = input(Scenario::D);
        i.production_time = 45.0;
        i.delivery_time = 29.9;
        i.average_km = 10.0;
        let insight = InsightGenerator.generate(&i);
        assert_eq!(insight.warnings.len(), 1);
        assert!(insight.warnings[0].contains("critical"));
    }

    #[test]
    fn test_from_estimate_result() {
        let result =
            crate::estimate(pulse_common::Shift::Lunch, 100, 15.0, 6.0, 20.0, 5.0).unwrap();
        let i = InsightInput::from(&result);
        assert_eq!(i.scenario, Scenario::A);
        assert_eq!(i.total_time_to_customer, 35.0);
        assert_eq!(i.average_km, 6.0);
    }
}
