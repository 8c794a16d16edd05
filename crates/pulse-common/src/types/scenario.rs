//! Scenario - Efficiency grade from customer-facing latency
//!
//! The grade only looks at production + one-way delivery time. Stop and
//! return legs affect throughput, not what the customer waits for.
//!
//! | time to customer | grade |
//! |------------------|-------|
//! | ≤ 50 min         | A     |
//! | ≤ 60 min         | B     |
//! | ≤ 70 min         | C     |
//! | > 70 min         | D     |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{GRADE_A_MAX_MINUTES, GRADE_B_MAX_MINUTES, GRADE_C_MAX_MINUTES};

/// Ordinal efficiency grade. `A < B < C < D`, so a larger value is a worse grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Scenario {
    /// High efficiency
    A,
    /// Regular efficiency
    B,
    /// Low efficiency
    C,
    /// Critical efficiency
    D,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [Scenario::A, Scenario::B, Scenario::C, Scenario::D];

    /// Short efficiency label
    pub fn label(&self) -> &'static str {
        match self {
            Scenario::A => "High efficiency",
            Scenario::B => "Regular efficiency",
            Scenario::C => "Low efficiency",
            Scenario::D => "Critical efficiency",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::A => "A",
            Scenario::B => "B",
            Scenario::C => "C",
            Scenario::D => "D",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive upper bounds, in minutes, for grades A, B and C
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioThresholds {
    pub a_max: f64,
    pub b_max: f64,
    pub c_max: f64,
}

impl Default for ScenarioThresholds {
    fn default() -> Self {
        Self {
            a_max: GRADE_A_MAX_MINUTES,
            b_max: GRADE_B_MAX_MINUTES,
            c_max: GRADE_C_MAX_MINUTES,
        }
    }
}

impl ScenarioThresholds {
    /// Thresholds must be finite and strictly increasing
    pub fn is_valid(&self) -> bool {
        [self.a_max, self.b_max, self.c_max].iter().all(|t| t.is_finite())
            && self.a_max < self.b_max
            && self.b_max < self.c_max
    }

    /// Step function over time to customer. Ties resolve to the better grade.
    ///
    /// NaN compares false against every bound and lands in D.
    #[inline]
    pub fn classify(&self, total_time_to_customer: f64) -> Scenario {
        if total_time_to_customer <= self.a_max {
            Scenario::A
        } else if total_time_to_customer <= self.b_max {
            Scenario::B
        } else if total_time_to_customer <= self.c_max {
            Scenario::C
        } else {
            Scenario::D
        }
    }

    /// Time band a grade covers under these thresholds, e.g. "51 to 60 minutes"
    pub fn band(&self, scenario: Scenario) -> String {
        match scenario {
            Scenario::A => format!("up to {} minutes", self.a_max),
            Scenario::B => between(self.a_max, self.b_max),
            Scenario::C => between(self.b_max, self.c_max),
            Scenario::D => format!("over {} minutes", self.c_max),
        }
    }
}

/// Band above an exclusive lower bound. Whole-minute bounds read as the next minute.
fn between(lower: f64, upper: f64) -> String {
    if lower.fract() == 0.0 {
        format!("{} to {} minutes", lower + 1.0, upper)
    } else {
        format!("over {} up to {} minutes", lower, upper)
    }
}

/// Classify with the default 50/60/70 thresholds
#[inline]
pub fn classify(total_time_to_customer: f64) -> Scenario {
    ScenarioThresholds::default().classify(total_time_to_customer)
}
