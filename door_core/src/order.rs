//! # Order Input
//!
//! The external order record handed to the calculator. Orders arrive as
//! loosely structured JSON exported from the sales system, so the sections
//! are kept as raw maps: the calculator validates the handful of keys it
//! reads and passes everything else through untouched.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "general": { "customer": "Acme Joinery" },
//!   "job": { "qty": "2" },
//!   "hardware": { "hinges": "3x stainless" },
//!   "horizontal": { "leaf": ["900 Leaf", "600 Leaf"] },
//!   "vertical": { "oa_frame": "2100", "leaf": "2040" }
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A door order as received from the caller.
///
/// `general`, `job`, and `hardware` are optional pass-through sections;
/// unknown keys anywhere are accepted and ignored. `horizontal` and
/// `vertical` are required, but their contents are validated by the
/// calculator itself so failures can name the offending field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OrderInput {
    /// General order metadata (unused by the calculation)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general: Option<Map<String, Value>>,

    /// Job section; the calculation reads `qty` as the door quantity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<Map<String, Value>>,

    /// Hardware schedule (unused by the calculation)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware: Option<Map<String, Value>>,

    /// Horizontal dimensions; holds the `leaf` descriptor(s)
    pub horizontal: Map<String, Value>,

    /// Vertical dimensions; holds `oa_frame` and `leaf` heights
    pub vertical: Map<String, Value>,
}

impl OrderInput {
    /// Resolve the number of doors in the order from `job.qty`.
    ///
    /// Lenient by contract: an integer JSON number or an integer string is
    /// used as-is, and anything else (missing section, missing key,
    /// non-numeric text, fractional number) falls back to a quantity of 1.
    /// This is a deliberate asymmetry with the dimension fields, which fail
    /// validation instead of defaulting.
    pub fn door_quantity(&self) -> i64 {
        self.job
            .as_ref()
            .and_then(|job| job.get("qty"))
            .and_then(|qty| match qty {
                Value::Number(n) => n.as_i64(),
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            })
            .unwrap_or(1)
    }
}
