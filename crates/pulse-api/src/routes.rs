//! REST routes for the planner

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::{header, Method},
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use pulse_common::{EstimateRequest, EstimateResult, Shift, VERSION};
use pulse_planner::{
    advisory::{
        order_volume_hint, route_advice, OrderVolumeHint, RouteAdvice, UnknownWeekday, Weekday,
        PRODUCTION_REFERENCE, STOP_REFERENCE,
    },
    ComparisonReport, ComparisonRequest, DeliveryPlanner, DisplayFigures, Insight,
};
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use uuid::Uuid;

use crate::error::ApiError;

type ApiResult<T> = std::result::Result<Json<T>, ApiError>;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub planner: Arc<DeliveryPlanner>,
}

impl AppState {
    pub fn new(planner: DeliveryPlanner) -> Self {
        Self {
            planner: Arc::new(planner),
        }
    }
}

/// Estimate form as submitted. The shift stays a string so an unknown
/// value surfaces as a validation error instead of a decode failure.
#[derive(Debug, Clone, Deserialize)]
pub struct EstimateBody {
    pub shift: String,
    pub estimated_orders: u32,
    pub delivery_time: f64,
    pub average_km: f64,
    pub production_time: f64,
    pub stop_time: f64,
}

impl TryFrom<EstimateBody> for EstimateRequest {
    type Error = ApiError;

    fn try_from(body: EstimateBody) -> Result<Self, Self::Error> {
        let shift: Shift = body.shift.parse()?;
        Ok(EstimateRequest::new(
            shift,
            body.estimated_orders,
            body.delivery_time,
            body.average_km,
            body.production_time,
            body.stop_time,
        ))
    }
}

/// Estimate with everything a result view or exporter needs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateReport {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub result: EstimateResult,
    pub display: DisplayFigures,
    pub insight: Insight,
}

#[derive(Debug, Deserialize)]
pub struct SpeedQuery {
    pub average_km: f64,
    pub delivery_time: f64,
}

#[derive(Debug, Deserialize)]
pub struct OrdersQuery {
    pub weekday: String,
    pub shift: String,
}

/// Build the REST router
pub fn router(state: AppState) -> Router {
    // CORS layer to allow frontend connections from any origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(health))
        .route("/api/v1/version", get(version))
        .route("/api/v1/estimate", post(estimate))
        .route("/api/v1/insights", post(insights))
        .route("/api/v1/compare", post(compare))
        .route("/api/v1/advisory/speed", get(speed_advisory))
        .route("/api/v1/advisory/orders", get(order_advisory))
        .route("/api/v1/advisory/reference", get(reference_ranges))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "healthy"}))
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "pulse-api",
        "version": VERSION,
        "description": "Delivery fleet planner",
    }))
}

async fn estimate(
    State(state): State<AppState>,
    payload: Result<Json<EstimateBody>, JsonRejection>,
) -> ApiResult<EstimateReport> {
    let Json(body) = payload?;
    let request = EstimateRequest::try_from(body)?;
    let result = state.planner.estimate(&request)?;

    info!(
        shift = %request.shift,
        orders = request.estimated_orders,
        drivers = result.required_drivers,
        scenario = %result.scenario,
        "Estimate served"
    );

    Ok(Json(EstimateReport {
        report_id: Uuid::now_v7(),
        generated_at: Utc::now(),
        display: DisplayFigures::from(&result),
        insight: state.planner.insight(&result),
        result,
    }))
}

async fn insights(
    State(state): State<AppState>,
    payload: Result<Json<EstimateBody>, JsonRejection>,
) -> ApiResult<Insight> {
    let Json(body) = payload?;
    let request = EstimateRequest::try_from(body)?;
    let result = state.planner.estimate(&request)?;
    Ok(Json(state.planner.insight(&result)))
}

async fn compare(
    State(state): State<AppState>,
    payload: Result<Json<ComparisonRequest>, JsonRejection>,
) -> ApiResult<ComparisonReport> {
    let Json(request) = payload?;
    let report = state.planner.compare(&request)?;

    info!(
        days = report.period_days,
        scenario = %report.scenario,
        total_gap = report.total_gap,
        "Comparison served"
    );

    Ok(Json(report))
}

async fn speed_advisory(
    query: Result<Query<SpeedQuery>, QueryRejection>,
) -> ApiResult<RouteAdvice> {
    let Query(q) = query?;
    route_advice(q.average_km, q.delivery_time)
        .map(Json)
        .ok_or_else(|| {
            ApiError::Malformed("average_km and delivery_time must be positive".to_string())
        })
}

async fn order_advisory(
    query: Result<Query<OrdersQuery>, QueryRejection>,
) -> ApiResult<OrderVolumeHint> {
    let Query(q) = query?;
    let weekday: Weekday = q
        .weekday
        .parse()
        .map_err(|e: UnknownWeekday| ApiError::Malformed(e.to_string()))?;
    let shift: Shift = q.shift.parse()?;
    Ok(Json(order_volume_hint(weekday, shift)))
}

async fn reference_ranges() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "production": PRODUCTION_REFERENCE,
        "stop": STOP_REFERENCE,
    }))
}
