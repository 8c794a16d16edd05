//! Planning advisories
//!
//! Sanity hints shown while the inputs are being collected. None of these
//! values flow into the estimator.

use std::fmt;
use std::str::FromStr;

use pulse_common::Shift;
use serde::{Deserialize, Serialize};

/// Below this outbound speed (km/h) traffic or extra stops are likely
pub const SLOW_ROUTE_KMH: f64 = 15.0;

/// Above this outbound speed (km/h) the inputs are probably wrong
pub const FAST_ROUTE_KMH: f64 = 40.0;

/// Upper and lower urban delivery speeds used for the delivery time window
const WINDOW_FAST_KMH: f64 = 25.0;
const WINDOW_SLOW_KMH: f64 = 15.0;

/// Outbound speed implied by distance and delivery time, in km/h
pub fn route_speed(average_km: f64, delivery_time: f64) -> Option<f64> {
    if average_km > 0.0 && delivery_time > 0.0 {
        Some(average_km / (delivery_time / 60.0))
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedAssessment {
    Slow,
    Adequate,
    Fast,
}

impl SpeedAssessment {
    pub fn message(&self) -> &'static str {
        match self {
            SpeedAssessment::Slow => "Low speed - may indicate heavy traffic or many stops",
            SpeedAssessment::Adequate => "Speed is adequate for urban delivery",
            SpeedAssessment::Fast => "High speed - check that the inputs are correct",
        }
    }
}

pub fn assess_speed(speed_kmh: f64) -> SpeedAssessment {
    if speed_kmh < SLOW_ROUTE_KMH {
        SpeedAssessment::Slow
    } else if speed_kmh > FAST_ROUTE_KMH {
        SpeedAssessment::Fast
    } else {
        SpeedAssessment::Adequate
    }
}

/// Expected one-way delivery time range, in whole minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub min: u32,
    pub max: u32,
}

pub fn delivery_time_window(average_km: f64) -> Option<TimeWindow> {
    if !(average_km.is_finite() && average_km > 0.0) {
        return None;
    }
    Some(TimeWindow {
        min: (average_km / WINDOW_FAST_KMH * 60.0).round() as u32,
        max: (average_km / WINDOW_SLOW_KMH * 60.0).round() as u32,
    })
}

/// Combined route check for a distance and delivery time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteAdvice {
    pub speed_kmh: f64,
    pub assessment: SpeedAssessment,
    pub window: TimeWindow,
}

pub fn route_advice(average_km: f64, delivery_time: f64) -> Option<RouteAdvice> {
    let speed_kmh = route_speed(average_km, delivery_time)?;
    Some(RouteAdvice {
        speed_kmh,
        assessment: assess_speed(speed_kmh),
        window: delivery_time_window(average_km)?,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemandLevel {
    Medium,
    High,
    VeryHigh,
}

impl Weekday {
    pub fn demand(&self) -> DemandLevel {
        match self {
            Weekday::Monday | Weekday::Tuesday | Weekday::Wednesday => DemandLevel::Medium,
            Weekday::Thursday | Weekday::Friday | Weekday::Sunday => DemandLevel::High,
            Weekday::Saturday => DemandLevel::VeryHigh,
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownWeekday(pub String);

impl fmt::Display for UnknownWeekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized weekday '{}'", self.0)
    }
}

impl std::error::Error for UnknownWeekday {}

impl FromStr for Weekday {
    type Err = UnknownWeekday;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // chrono accepts full names and three-letter abbreviations
        s.trim()
            .parse::<chrono::Weekday>()
            .map(Weekday::from)
            .map_err(|_| UnknownWeekday(s.to_string()))
    }
}

/// Typical order volume for a weekday and shift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderVolumeHint {
    pub demand: DemandLevel,
    pub min: u32,
    pub avg: u32,
    pub max: u32,
}

pub fn order_volume_hint(weekday: Weekday, shift: Shift) -> OrderVolumeHint {
    let demand = weekday.demand();
    let mut base: f64 = match demand {
        DemandLevel::Medium => 50.0,
        DemandLevel::High => 80.0,
        DemandLevel::VeryHigh => 120.0,
    };
    if shift == Shift::Dinner {
        base = (base * 1.4).round();
    }
    OrderVolumeHint {
        demand,
        min: (base * 0.7).round() as u32,
        avg: base as u32,
        max: (base * 1.3).round() as u32,
    }
}

/// Typical range for an input, in minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceRange {
    pub label: &'static str,
    pub min: u32,
    pub max: u32,
}

pub const PRODUCTION_REFERENCE: [ReferenceRange; 3] = [
    ReferenceRange { label: "Fast food / snacks", min: 8, max: 15 },
    ReferenceRange { label: "Executive dishes", min: 15, max: 25 },
    ReferenceRange { label: "Elaborate dishes", min: 25, max: 40 },
];

pub const STOP_REFERENCE: [ReferenceRange; 3] = [
    ReferenceRange { label: "Residential", min: 2, max: 5 },
    ReferenceRange { label: "Commercial / offices", min: 3, max: 8 },
    ReferenceRange { label: "Condominiums / buildings", min: 5, max: 12 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_speed() {
        assert_eq!(route_speed(6.0, 15.0), Some(24.0));
        assert_eq!(route_speed(0.0, 15.0), None);
        assert_eq!(route_speed(6.0, 0.0), None);
    }

    #[test]
    fn test_speed_bands() {
        assert_eq!(assess_speed(14.9), SpeedAssessment::Slow);
        assert_eq!(assess_speed(15.0), SpeedAssessment::Adequate);
        assert_eq!(assess_speed(40.0), SpeedAssessment::Adequate);
        assert_eq!(assess_speed(40.1), SpeedAssessment::Fast);
    }

    #[test]
    fn test_delivery_time_window() {
        // 6 km: 14.4 → 14 min at 25 km/h, 24 min at 15 km/h
        assert_eq!(delivery_time_window(6.0), Some(TimeWindow { min: 14, max: 24 }));
        assert_eq!(delivery_time_window(-1.0), None);
    }

    #[test]
    fn test_route_advice() {
        let advice = route_advice(10.0, 12.0).unwrap();
        assert_eq!(advice.speed_kmh, 50.0);
        assert_eq!(advice.assessment, SpeedAssessment::Fast);
        assert_eq!(advice.window, TimeWindow { min: 24, max: 40 });
    }

    #[test]
    fn test_order_volume_hints() {
        let tue_lunch = order_volume_hint(Weekday::Tuesday, Shift::Lunch);
        assert_eq!((tue_lunch.min, tue_lunch.avg, tue_lunch.max), (35, 50, 65));

        let fri_dinner = order_volume_hint(Weekday::Friday, Shift::Dinner);
        assert_eq!(fri_dinner.demand, DemandLevel::High);
        assert_eq!((fri_dinner.min, fri_dinner.avg, fri_dinner.max), (78, 112, 146));

        let sat_dinner = order_volume_hint(Weekday::Saturday, Shift::Dinner);
        assert_eq!((sat_dinner.min, sat_dinner.avg, sat_dinner.max), (118, 168, 218));
    }

    #[test]
    fn test_parse_weekday() {
        assert_eq!("saturday".parse::<Weekday>(), Ok(Weekday::Saturday));
        assert_eq!("Thu".parse::<Weekday>(), Ok(Weekday::Thursday));
        assert!("someday".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_reference_ranges_are_ordered() {
        for range in PRODUCTION_REFERENCE.iter().chain(STOP_REFERENCE.iter()) {
            assert!(range.min < range.max, "{}", range.label);
        }
    }
}
