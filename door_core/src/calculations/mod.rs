//! # Door Calculations
//!
//! Calculations follow the pattern:
//!
//! - An input record (JSON-serializable)
//! - A `*Result` record (JSON-serializable)
//! - `calculate(input) -> Result<*Result, DoorError>` - pure calculation function
//!
//! ## Available Calculations
//!
//! - [`door`] - Manufacturing dimensions for a door order

pub mod door;

// Re-export commonly used types
pub use door::{calculate, CalculationResult, LeafEntry, ReinforcementCalculation};
