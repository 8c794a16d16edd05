//! Property tests for the driver estimator

use proptest::prelude::*;
use pulse_common::{classify, ErrorKind, EstimateRequest, Scenario, Shift};
use pulse_planner::{estimate, DeliveryEstimator};

fn arb_shift() -> impl Strategy<Value = Shift> {
    prop_oneof![Just(Shift::Lunch), Just(Shift::Dinner)]
}

fn arb_request() -> impl Strategy<Value = EstimateRequest> {
    (
        arb_shift(),
        1u32..5_000,
        1.0f64..90.0,
        0.5f64..30.0,
        1.0f64..90.0,
        0.5f64..20.0,
    )
        .prop_map(|(shift, orders, delivery, km, production, stop)| {
            EstimateRequest::new(shift, orders, delivery, km, production, stop)
        })
}

proptest! {
    #[test]
    fn drivers_is_ceiling_of_demand_over_capacity(req in arb_request()) {
        let result = DeliveryEstimator::new().estimate(&req).unwrap();
        let expected = (req.estimated_orders as f64 / result.orders_per_driver).ceil();
        prop_assert!(result.required_drivers >= 1);
        prop_assert_eq!(result.required_drivers as f64, expected);
    }

    #[test]
    fn outputs_are_finite(req in arb_request()) {
        let r = DeliveryEstimator::new().estimate(&req).unwrap();
        for v in [
            r.return_time,
            r.total_time_to_customer,
            r.total_cycle_time,
            r.cycles_per_driver,
            r.orders_per_driver,
        ] {
            prop_assert!(v.is_finite() && v > 0.0);
        }
    }

    #[test]
    fn return_time_is_linear_in_distance(km in 0.1f64..50.0) {
        let estimator = DeliveryEstimator::new();
        let expected = km * (60.0 / 39.6);
        prop_assert!((estimator.return_time(km) - expected).abs() < 1e-9);
    }

    #[test]
    fn longer_timings_never_reduce_cycle_or_drivers(
        req in arb_request(),
        field in 0usize..4,
        extra in 0.0f64..30.0,
    ) {
        let mut longer = req;
        match field {
            0 => longer.production_time += extra,
            1 => longer.delivery_time += extra,
            2 => longer.stop_time += extra,
            _ => longer.average_km += extra,
        }
        let estimator = DeliveryEstimator::new();
        let base = estimator.estimate(&req).unwrap();
        let worse = estimator.estimate(&longer).unwrap();
        prop_assert!(worse.total_cycle_time >= base.total_cycle_time);
        prop_assert!(worse.required_drivers >= base.required_drivers);
        prop_assert!(worse.scenario >= base.scenario);
    }

    #[test]
    fn grade_matches_classifier(req in arb_request()) {
        let r = DeliveryEstimator::new().estimate(&req).unwrap();
        prop_assert_eq!(r.scenario, classify(req.production_time + req.delivery_time));
    }

    #[test]
    fn estimate_is_idempotent(req in arb_request()) {
        let estimator = DeliveryEstimator::new();
        prop_assert_eq!(estimator.estimate(&req).unwrap(), estimator.estimate(&req).unwrap());
    }

    #[test]
    fn non_positive_timing_is_invalid_input(
        req in arb_request(),
        field in 0usize..4,
        bad in -50.0f64..=0.0,
    ) {
        let mut broken = req;
        match field {
            0 => broken.production_time = bad,
            1 => broken.delivery_time = bad,
            2 => broken.stop_time = bad,
            _ => broken.average_km = bad,
        }
        let err = DeliveryEstimator::new().estimate(&broken).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}

#[test]
fn reference_scenario() {
    let r = estimate(Shift::Lunch, 100, 15.0, 6.0, 20.0, 5.0).unwrap();
    assert!((r.return_time - 9.09).abs() < 0.01);
    assert_eq!(r.total_time_to_customer, 35.0);
    assert!((r.total_cycle_time - 49.09).abs() < 0.01);
    assert!((r.cycles_per_driver - 7.72).abs() < 0.01);
    assert!((r.orders_per_driver - 15.44).abs() < 0.01);
    assert_eq!(r.required_drivers, 7);
    assert_eq!(r.scenario, Scenario::A);
}

#[test]
fn single_order_with_realistic_timings() {
    for shift in [Shift::Lunch, Shift::Dinner] {
        let r = estimate(shift, 1, 25.0, 8.0, 30.0, 6.0).unwrap();
        assert_eq!(r.required_drivers, 1);
    }
}

#[test]
fn zero_delivery_time_produces_no_result() {
    let err = estimate(Shift::Lunch, 100, 0.0, 6.0, 20.0, 5.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn grade_boundaries() {
    let grades: Vec<Scenario> = [50.0, 50.01, 60.0, 60.01, 70.0, 70.01]
        .into_iter()
        .map(classify)
        .collect();
    assert_eq!(
        grades,
        vec![Scenario::A, Scenario::B, Scenario::B, Scenario::C, Scenario::C, Scenario::D]
    );
}
