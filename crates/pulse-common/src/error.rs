//! Error types for Pulse
//!
//! Provides a unified error type and domain-specific error variants

use thiserror::Error;

/// Result type alias using PulseError
pub type Result<T> = std::result::Result<T, PulseError>;

/// Coarse error taxonomy exposed to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A caller-supplied value was rejected before any computation
    InvalidInput,
    /// The computed cycle or per-driver capacity was not a finite positive number
    DegenerateCycle,
}

/// Unified error type for Pulse operations
#[derive(Debug, Error)]
pub enum PulseError {
    // Estimator errors
    #[error("Estimate error: {0}")]
    Estimate(#[from] EstimateError),

    // Comparison errors
    #[error("Comparison error: {0}")]
    Comparison(#[from] ComparisonError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    // Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PulseError {
    /// Error kind, when the error stems from validation or computation
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            PulseError::Estimate(e) => Some(e.kind()),
            PulseError::Comparison(e) => Some(e.kind()),
            PulseError::Config(_) => Some(ErrorKind::InvalidInput),
            PulseError::Serialization(_) | PulseError::Internal(_) => None,
        }
    }
}

/// Driver estimate errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    #[error("Invalid input: {field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("Invalid input: {field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("Invalid input: estimated orders must be at least 1")]
    NoOrders,

    #[error("Invalid input: unrecognized shift '{0}' (expected lunch or dinner)")]
    UnknownShift(String),

    #[error("Degenerate cycle: total cycle time {minutes} min is not a positive finite value")]
    DegenerateCycle { minutes: f64 },

    #[error("Degenerate cycle: per-driver capacity {orders_per_driver} cannot cover {orders} orders")]
    CapacityOverflow { orders: u32, orders_per_driver: f64 },
}

impl EstimateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EstimateError::NonPositive { .. }
            | EstimateError::NonFinite { .. }
            | EstimateError::NoOrders
            | EstimateError::UnknownShift(_) => ErrorKind::InvalidInput,
            EstimateError::DegenerateCycle { .. } | EstimateError::CapacityOverflow { .. } => {
                ErrorKind::DegenerateCycle
            }
        }
    }

    /// Reject NaN, infinities, zero and negatives for a named field
    pub fn check_positive(field: &'static str, value: f64) -> std::result::Result<f64, Self> {
        if !value.is_finite() {
            return Err(EstimateError::NonFinite { field });
        }
        if value <= 0.0 {
            return Err(EstimateError::NonPositive { field, value });
        }
        Ok(value)
    }
}

/// Ideal-vs-actual comparison errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComparisonError {
    #[error("Invalid period: start {start} is after end {end}")]
    InvalidPeriod { start: String, end: String },

    #[error("Invalid input: {field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{0}")]
    Input(#[from] EstimateError),
}

impl ComparisonError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ComparisonError::Input(e) => e.kind(),
            ComparisonError::InvalidPeriod { .. } | ComparisonError::Negative { .. } => {
                ErrorKind::InvalidInput
            }
        }
    }
}

// Implement From for common external error types
impl From<serde_json::Error> for PulseError {
    fn from(err: serde_json::Error) -> Self {
        PulseError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for PulseError {
    fn from(err: std::io::Error) -> Self {
        PulseError::Internal(err.to_string())
    }
}

impl From<anyhow::Error> for PulseError {
    fn from(err: anyhow::Error) -> Self {
        PulseError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PulseError::Estimate(EstimateError::NonPositive {
            field: "delivery_time",
            value: 0.0,
        });
        assert!(err.to_string().contains("delivery_time"));
    }

    #[test]
    fn test_error_kinds_are_distinct() {
        assert_eq!(EstimateError::NoOrders.kind(), ErrorKind::InvalidInput);
        assert_eq!(
            EstimateError::UnknownShift("brunch".into()).kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            EstimateError::DegenerateCycle { minutes: 0.0 }.kind(),
            ErrorKind::DegenerateCycle
        );
    }

    #[test]
    fn test_check_positive() {
        assert_eq!(EstimateError::check_positive("x", 1.5), Ok(1.5));
        assert_eq!(
            EstimateError::check_positive("x", -2.0),
            Err(EstimateError::NonPositive { field: "x", value: -2.0 })
        );
        assert_eq!(
            EstimateError::check_positive("x", f64::NAN),
            Err(EstimateError::NonFinite { field: "x" })
        );
        assert_eq!(
            EstimateError::check_positive("x", f64::INFINITY),
            Err(EstimateError::NonFinite { field: "x" })
        );
    }

    #[test]
    fn test_comparison_wraps_input_kind() {
        let err = ComparisonError::from(EstimateError::DegenerateCycle { minutes: -1.0 });
        assert_eq!(err.kind(), ErrorKind::DegenerateCycle);
        assert_eq!(PulseError::from(err).kind(), Some(ErrorKind::DegenerateCycle));
    }
}
