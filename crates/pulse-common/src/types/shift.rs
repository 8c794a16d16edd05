//! Shift - Operating window with a fixed duration
//!
//! Only two windows exist. Anything else arriving as text is rejected
//! rather than defaulted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EstimateError;
use crate::{DINNER_SHIFT_MINUTES, LUNCH_SHIFT_MINUTES};

/// Restaurant operating window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shift {
    /// 11:40 - 17:59, peak between 12h and 14h
    Lunch,
    /// 18:00 - 23:00, peak between 19h and 21h
    Dinner,
}

impl Shift {
    /// Default duration of this shift in minutes
    pub fn duration_minutes(&self) -> f64 {
        match self {
            Shift::Lunch => LUNCH_SHIFT_MINUTES,
            Shift::Dinner => DINNER_SHIFT_MINUTES,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Shift::Lunch => "lunch",
            Shift::Dinner => "dinner",
        }
    }
}

impl FromStr for Shift {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lunch" => Ok(Shift::Lunch),
            "dinner" => Ok(Shift::Dinner),
            _ => Err(EstimateError::UnknownShift(s.to_string())),
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_durations() {
        assert_eq!(Shift::Lunch.duration_minutes(), 379.0);
        assert_eq!(Shift::Dinner.duration_minutes(), 300.0);
    }

    #[test]
    fn test_parse_shift() {
        assert_eq!("lunch".parse::<Shift>(), Ok(Shift::Lunch));
        assert_eq!(" Dinner ".parse::<Shift>(), Ok(Shift::Dinner));
    }

    #[test]
    fn test_unknown_shift_is_rejected() {
        let err = "brunch".parse::<Shift>().unwrap_err();
        assert_eq!(err, EstimateError::UnknownShift("brunch".to_string()));
        assert!("".parse::<Shift>().is_err());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Shift::Lunch).unwrap(), "\"lunch\"");
        let parsed: Shift = serde_json::from_str("\"dinner\"").unwrap();
        assert_eq!(parsed, Shift::Dinner);
        assert!(serde_json::from_str::<Shift>("\"breakfast\"").is_err());
    }
}
