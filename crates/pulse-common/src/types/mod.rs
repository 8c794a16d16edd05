//! Core data types for the Pulse planner

pub mod estimate;
pub mod scenario;
pub mod shift;
