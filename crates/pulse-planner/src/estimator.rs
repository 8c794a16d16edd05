//! Driver estimator
//!
//! Turns six operational inputs into a driver count and an efficiency grade.
//! Pure: no clock, no randomness, no shared state. Identical requests give
//! bit-identical results.

use pulse_common::{
    EstimateError, EstimateRequest, EstimateResult, PulseError, Result, ScenarioThresholds, Shift,
    DINNER_SHIFT_MINUTES, LUNCH_SHIFT_MINUTES, ORDERS_PER_TRIP, RETURN_SPEED_KMH,
};
use tracing::{debug, instrument, warn};

use crate::PlannerSettings;

/// Driver estimator with its formula constants
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryEstimator {
    return_speed_kmh: f64,
    orders_per_trip: f64,
    lunch_minutes: f64,
    dinner_minutes: f64,
    thresholds: ScenarioThresholds,
}

impl Default for DeliveryEstimator {
    fn default() -> Self {
        Self {
            return_speed_kmh: RETURN_SPEED_KMH,
            orders_per_trip: ORDERS_PER_TRIP,
            lunch_minutes: LUNCH_SHIFT_MINUTES,
            dinner_minutes: DINNER_SHIFT_MINUTES,
            thresholds: ScenarioThresholds::default(),
        }
    }
}

impl DeliveryEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from validated settings
    pub fn from_settings(settings: &PlannerSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            return_speed_kmh: settings.return_speed_kmh,
            orders_per_trip: settings.orders_per_trip,
            lunch_minutes: settings.lunch_minutes,
            dinner_minutes: settings.dinner_minutes,
            thresholds: settings.thresholds,
        })
    }

    pub fn thresholds(&self) -> &ScenarioThresholds {
        &self.thresholds
    }

    /// Shift duration in minutes
    pub fn shift_minutes(&self, shift: Shift) -> f64 {
        match shift {
            Shift::Lunch => self.lunch_minutes,
            Shift::Dinner => self.dinner_minutes,
        }
    }

    /// Return leg duration in minutes, linear in distance
    #[inline]
    pub fn return_time(&self, average_km: f64) -> f64 {
        (average_km / self.return_speed_kmh) * 60.0
    }

    /// Estimate drivers for a shift
    #[instrument(skip(self), fields(shift = %request.shift, orders = request.estimated_orders))]
    pub fn estimate(
        &self,
        request: &EstimateRequest,
    ) -> std::result::Result<EstimateResult, EstimateError> {
        if let Err(e) = request.validate() {
            warn!(error = %e, "Rejected estimate request");
            return Err(e);
        }

        let shift_minutes = self.shift_minutes(request.shift);
        let return_time = self.return_time(request.average_km);
        let total_time_to_customer = request.production_time + request.delivery_time;
        let total_cycle_time = total_time_to_customer + request.stop_time + return_time;

        if !(total_cycle_time.is_finite() && total_cycle_time > 0.0) {
            warn!(total_cycle_time, "Degenerate cycle time");
            return Err(EstimateError::DegenerateCycle {
                minutes: total_cycle_time,
            });
        }

        let cycles_per_driver = shift_minutes / total_cycle_time;
        let orders_per_driver = cycles_per_driver * self.orders_per_trip;

        if !(orders_per_driver.is_finite() && orders_per_driver > 0.0) {
            warn!(orders_per_driver, "Degenerate per-driver capacity");
            return Err(EstimateError::DegenerateCycle {
                minutes: total_cycle_time,
            });
        }

        // Ceiling so the fleet is never short by a fractional driver
        let drivers = (request.estimated_orders as f64 / orders_per_driver).ceil();
        if !(drivers.is_finite() && drivers <= u32::MAX as f64) {
            return Err(EstimateError::CapacityOverflow {
                orders: request.estimated_orders,
                orders_per_driver,
            });
        }
        let required_drivers = drivers as u32;

        let scenario = self.thresholds.classify(total_time_to_customer);

        debug!(
            total_cycle_time,
            orders_per_driver,
            required_drivers,
            scenario = %scenario,
            "Estimate computed"
        );

        Ok(EstimateResult {
            request: *request,
            shift_minutes,
            orders_per_trip: self.orders_per_trip,
            return_time,
            total_time_to_customer,
            total_cycle_time,
            cycles_per_driver,
            orders_per_driver,
            required_drivers,
            scenario,
            thresholds: self.thresholds,
        })
    }
}

/// Estimate with the default constants
pub fn estimate(
    shift: Shift,
    estimated_orders: u32,
    delivery_time: f64,
    average_km: f64,
    production_time: f64,
    stop_time: f64,
) -> std::result::Result<EstimateResult, EstimateError> {
    let request = EstimateRequest::new(
        shift,
        estimated_orders,
        delivery_time,
        average_km,
        production_time,
        stop_time,
    );
    DeliveryEstimator::default().estimate(&request)
}

/// Estimate from an unparsed shift name, as received from a form or query string
pub fn estimate_raw(
    shift: &str,
    estimated_orders: u32,
    delivery_time: f64,
    average_km: f64,
    production_time: f64,
    stop_time: f64,
) -> Result<EstimateResult> {
    let shift: Shift = shift.parse().map_err(PulseError::from)?;
    Ok(estimate(
        shift,
        estimated_orders,
        delivery_time,
        average_km,
        production_time,
        stop_time,
    )?)
}
