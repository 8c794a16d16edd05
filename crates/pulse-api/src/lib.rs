//! # Pulse API
//!
//! JSON over HTTP for the delivery fleet planner.
//!
//! ## Endpoints
//!
//! - `GET  /health`
//! - `GET  /api/v1/version`
//! - `POST /api/v1/estimate`: driver estimate, display figures and insight
//! - `POST /api/v1/insights`: insight only
//! - `POST /api/v1/compare`: ideal-vs-actual gaps for a period
//! - `GET  /api/v1/advisory/speed?average_km=&delivery_time=`
//! - `GET  /api/v1/advisory/orders?weekday=&shift=`
//! - `GET  /api/v1/advisory/reference`
//!
//! Validation failures answer `422` with `{"error": <kind>, "message": ...}`.

pub mod config;
pub mod error;
pub mod routes;

pub use config::PulseConfig;
pub use error::ApiError;
pub use routes::{router, AppState};
