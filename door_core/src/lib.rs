//! # door_core - Door Manufacturing Dimension Engine
//!
//! `door_core` turns a structured door order into the dimensions a workshop
//! cuts to: the trimmed vertical frame height, per-leaf horizontal
//! segmentation counts, and reinforcement bar lengths and quantities.
//! All inputs and outputs are JSON-serializable, so the engine drops into
//! any transport (HTTP, CLI, message queue) without adapter glue.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: a pure function that takes an order and returns a result
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use door_core::{calculate, OrderInput};
//!
//! let order: OrderInput = serde_json::from_str(r#"{
//!     "horizontal": { "leaf": "994 Leaf" },
//!     "vertical": { "oa_frame": "2100", "leaf": "2040" }
//! }"#).unwrap();
//!
//! let result = calculate(&order).unwrap();
//! assert_eq!(result.vertical_adjusted, 2070);
//! ```
//!
//! ## Modules
//!
//! - [`order`] - Order input record and door-quantity resolution
//! - [`calculations`] - The dimension calculation itself
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod order;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, CalculationResult, LeafEntry, ReinforcementCalculation};
pub use errors::{DoorError, DoorResult};
pub use order::OrderInput;
