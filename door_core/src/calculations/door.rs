//! # Door Dimension Calculation
//!
//! Derives manufacturing dimensions from a door order:
//!
//! 1. Trimmed vertical frame height (overall frame minus the 30 mm trim
//!    allowance)
//! 2. Horizontal segmentation count per leaf (leaf width divided into
//!    300 mm intervals, rounded down)
//! 3. Order totals scaled by the door quantity
//! 4. Reinforcement bar length (leaf height minus 30 mm) and counts
//!
//! ## Example
//!
//! ```rust
//! use door_core::calculations::door::calculate;
//! use door_core::order::OrderInput;
//!
//! let order: OrderInput = serde_json::from_str(r#"{
//!     "horizontal": { "leaf": "994 Leaf" },
//!     "vertical": { "oa_frame": "2100", "leaf": "2040" }
//! }"#).unwrap();
//!
//! let result = calculate(&order).unwrap();
//! assert_eq!(result.horizontal_quantities[0].quantity, 3);
//! assert_eq!(result.reinforcement.reinforcement_length, 2010);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{DoorError, DoorResult};
use crate::order::OrderInput;

/// Millimeters trimmed from raw frame and leaf heights
pub const TRIM_ALLOWANCE_MM: i64 = 30;

/// Spacing interval used to derive counts from a linear dimension
pub const SEGMENT_INTERVAL_MM: i64 = 300;

/// Segmentation result for a single leaf descriptor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeafEntry {
    /// Leaf width in millimeters, parsed from the descriptor's leading token
    pub leaf_size: i64,

    /// Original descriptor string, preserved verbatim (e.g. "994 Leaf")
    pub leaf_description: String,

    /// Segmentation count: leaf_size / 300, rounded down
    pub quantity: i64,
}

/// Reinforcement bar length and counts for the order.
///
/// ## JSON Example
///
/// ```json
/// {
///   "reinforcement_length": 2010,
///   "reinforcements_per_leaf": 3,
///   "total_reinforcements_per_door": 3,
///   "total_reinforcements_all_doors": 6
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReinforcementCalculation {
    /// Length of each reinforcement bar in mm (leaf height - 30)
    pub reinforcement_length: i64,

    /// Reinforcement bars needed per leaf
    pub reinforcements_per_leaf: i64,

    /// Total reinforcements needed per door
    pub total_reinforcements_per_door: i64,

    /// Total reinforcements across every door in the order
    pub total_reinforcements_all_doors: i64,
}

/// Results of the door dimension calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "vertical_adjusted": 2070,
///   "horizontal_quantities": [
///     { "leaf_size": 994, "leaf_description": "994 Leaf", "quantity": 3 }
///   ],
///   "total_horizontal_quantity": 3,
///   "door_quantity": 1,
///   "reinforcement": { ... }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculationResult {
    /// Overall frame height minus the 30 mm trim allowance
    pub vertical_adjusted: i64,

    /// Per-leaf segmentation, in input order
    pub horizontal_quantities: Vec<LeafEntry>,

    /// Sum of leaf quantities multiplied by the door quantity
    pub total_horizontal_quantity: i64,

    /// Resolved door quantity for the order
    pub door_quantity: i64,

    /// Reinforcement bar length and counts
    pub reinforcement: ReinforcementCalculation,
}

/// Calculate manufacturing dimensions for a door order.
///
/// Pure function over the order plus the fixed trim and segmentation
/// constants: identical input yields identical output.
///
/// # Arguments
///
/// * `order` - The door order record
///
/// # Returns
///
/// * `Ok(CalculationResult)` - Derived dimensions and counts
/// * `Err(DoorError)` - Validation failure naming the offending field or
///   descriptor; computation halts at the first failure
pub fn calculate(order: &OrderInput) -> DoorResult<CalculationResult> {
    // Lenient by contract: a bad quantity defaults to 1, it never fails.
    let door_quantity = order.door_quantity();

    let oa_frame = vertical_mm(&order.vertical, "oa_frame")?;
    // No lower bound: a frame shorter than the trim allowance goes negative
    // and is passed through as-is.
    let vertical_adjusted = oa_frame - TRIM_ALLOWANCE_MM;

    let mut horizontal_quantities = Vec::new();
    let mut total_leaf_quantity = 0;
    for descriptor in leaf_descriptors(&order.horizontal)? {
        let leaf_size = parse_leaf_size(&descriptor)?;
        let quantity = leaf_size / SEGMENT_INTERVAL_MM;
        total_leaf_quantity += quantity;
        horizontal_quantities.push(LeafEntry {
            leaf_size,
            leaf_description: descriptor,
            quantity,
        });
    }

    let total_horizontal_quantity = total_leaf_quantity * door_quantity;

    let leaf_height = vertical_mm(&order.vertical, "leaf")?;

    // Bars run every 300 mm across the leaf width, the same interval as the
    // horizontal segmentation, so the counts reuse that total rather than
    // deriving independently.
    let reinforcement = ReinforcementCalculation {
        reinforcement_length: leaf_height - TRIM_ALLOWANCE_MM,
        reinforcements_per_leaf: total_leaf_quantity,
        total_reinforcements_per_door: total_leaf_quantity,
        total_reinforcements_all_doors: total_leaf_quantity * door_quantity,
    };

    Ok(CalculationResult {
        vertical_adjusted,
        horizontal_quantities,
        total_horizontal_quantity,
        door_quantity,
        reinforcement,
    })
}

/// Read a vertical dimension field as whole millimeters.
///
/// Dimensions arrive as numeric strings; a missing key, a non-string value,
/// or non-numeric text is a validation failure naming the field.
fn vertical_mm(vertical: &Map<String, Value>, field: &str) -> DoorResult<i64> {
    let qualified = format!("vertical.{field}");
    match vertical.get(field) {
        None => Err(DoorError::missing_field(qualified)),
        Some(Value::String(raw)) => raw.trim().parse().map_err(|_| {
            DoorError::invalid_input(qualified, raw.as_str(), "expected a whole number of millimeters")
        }),
        Some(other) => Err(DoorError::invalid_input(
            qualified,
            other.to_string(),
            "expected a numeric string",
        )),
    }
}

/// Normalize `horizontal.leaf` to an ordered list of descriptor strings.
///
/// A single string becomes a one-element list, an array of strings is used
/// as-is, and an absent key means no leaves. Any other shape fails
/// validation naming the field.
fn leaf_descriptors(horizontal: &Map<String, Value>) -> DoorResult<Vec<String>> {
    match horizontal.get("leaf") {
        None => Ok(Vec::new()),
        Some(Value::String(descriptor)) => Ok(vec![descriptor.clone()]),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(descriptor) => Ok(descriptor.clone()),
                other => Err(DoorError::invalid_input(
                    "horizontal.leaf",
                    other.to_string(),
                    "leaf entries must be descriptor strings",
                )),
            })
            .collect(),
        Some(other) => Err(DoorError::invalid_input(
            "horizontal.leaf",
            other.to_string(),
            "expected a descriptor string or an array of descriptor strings",
        )),
    }
}

/// Parse the leaf width from a descriptor like "994 Leaf".
///
/// Only the leading whitespace-delimited token is read; trailing label text
/// is ignored.
fn parse_leaf_size(descriptor: &str) -> DoorResult<i64> {
    descriptor
        .split_whitespace()
        .next()
        .and_then(|token| token.parse().ok())
        .ok_or_else(|| DoorError::malformed_leaf(descriptor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order(value: Value) -> OrderInput {
        serde_json::from_value(value).unwrap()
    }

    fn single_leaf_order() -> OrderInput {
        order(json!({
            "horizontal": { "leaf": "994 Leaf" },
            "vertical": { "oa_frame": "2100", "leaf": "2040" }
        }))
    }

    #[test]
    fn test_single_leaf_order() {
        let result = calculate(&single_leaf_order()).unwrap();

        assert_eq!(result.vertical_adjusted, 2070);
        assert_eq!(result.door_quantity, 1);
        assert_eq!(result.horizontal_quantities.len(), 1);
        assert_eq!(result.horizontal_quantities[0].leaf_size, 994);
        assert_eq!(result.horizontal_quantities[0].leaf_description, "994 Leaf");
        assert_eq!(result.horizontal_quantities[0].quantity, 3);
        assert_eq!(result.total_horizontal_quantity, 3);
        assert_eq!(result.reinforcement.reinforcement_length, 2010);
        assert_eq!(result.reinforcement.reinforcements_per_leaf, 3);
        assert_eq!(result.reinforcement.total_reinforcements_all_doors, 3);
    }

    #[test]
    fn test_door_quantity_scales_totals() {
        let result = calculate(&order(json!({
            "job": { "qty": "2" },
            "horizontal": { "leaf": "994 Leaf" },
            "vertical": { "oa_frame": "2100", "leaf": "2040" }
        })))
        .unwrap();

        assert_eq!(result.door_quantity, 2);
        assert_eq!(result.total_horizontal_quantity, 6);
        // Per-leaf counts are per single door and do not scale.
        assert_eq!(result.horizontal_quantities[0].quantity, 3);
        assert_eq!(result.reinforcement.total_reinforcements_per_door, 3);
        assert_eq!(result.reinforcement.total_reinforcements_all_doors, 6);
    }

    #[test]
    fn test_multiple_leaves_preserve_order() {
        let result = calculate(&order(json!({
            "horizontal": { "leaf": ["900 Leaf", "600 Leaf"] },
            "vertical": { "oa_frame": "2100", "leaf": "2040" }
        })))
        .unwrap();

        let quantities: Vec<i64> = result
            .horizontal_quantities
            .iter()
            .map(|entry| entry.quantity)
            .collect();
        assert_eq!(quantities, vec![3, 2]);
        assert_eq!(result.horizontal_quantities[0].leaf_description, "900 Leaf");
        assert_eq!(result.horizontal_quantities[1].leaf_description, "600 Leaf");
        assert_eq!(result.total_horizontal_quantity, 5);
    }

    #[test]
    fn test_missing_oa_frame() {
        let error = calculate(&order(json!({
            "horizontal": { "leaf": "994 Leaf" },
            "vertical": { "leaf": "2040" }
        })))
        .unwrap_err();

        assert_eq!(error, DoorError::missing_field("vertical.oa_frame"));
        assert!(error.is_client_fault());
    }

    #[test]
    fn test_non_numeric_oa_frame() {
        let error = calculate(&order(json!({
            "horizontal": { "leaf": "994 Leaf" },
            "vertical": { "oa_frame": "tall", "leaf": "2040" }
        })))
        .unwrap_err();

        assert!(error.to_string().contains("oa_frame"));
        assert_eq!(error.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_wrong_type_leaf_height() {
        let error = calculate(&order(json!({
            "horizontal": { "leaf": "994 Leaf" },
            "vertical": { "oa_frame": "2100", "leaf": 2040 }
        })))
        .unwrap_err();

        assert!(error.to_string().contains("vertical.leaf"));
    }

    #[test]
    fn test_malformed_leaf_descriptor() {
        let error = calculate(&order(json!({
            "horizontal": { "leaf": "abc" },
            "vertical": { "oa_frame": "2100", "leaf": "2040" }
        })))
        .unwrap_err();

        assert_eq!(error, DoorError::malformed_leaf("abc"));
    }

    #[test]
    fn test_empty_leaf_descriptor() {
        let error = calculate(&order(json!({
            "horizontal": { "leaf": "" },
            "vertical": { "oa_frame": "2100", "leaf": "2040" }
        })))
        .unwrap_err();

        assert_eq!(error.error_code(), "MALFORMED_LEAF");
    }

    #[test]
    fn test_leaf_shape_rejected() {
        // A bare number or a mapping is not a valid leaf field.
        for leaf in [json!(994), json!({ "size": 994 })] {
            let error = calculate(&order(json!({
                "horizontal": { "leaf": leaf },
                "vertical": { "oa_frame": "2100", "leaf": "2040" }
            })))
            .unwrap_err();
            assert!(error.to_string().contains("horizontal.leaf"));
        }
    }

    #[test]
    fn test_non_string_leaf_entry_rejected() {
        let error = calculate(&order(json!({
            "horizontal": { "leaf": ["900 Leaf", 600] },
            "vertical": { "oa_frame": "2100", "leaf": "2040" }
        })))
        .unwrap_err();

        assert_eq!(error.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_absent_leaf_key_yields_empty_order() {
        let result = calculate(&order(json!({
            "horizontal": {},
            "vertical": { "oa_frame": "2100", "leaf": "2040" }
        })))
        .unwrap();

        assert!(result.horizontal_quantities.is_empty());
        assert_eq!(result.total_horizontal_quantity, 0);
        assert_eq!(result.reinforcement.total_reinforcements_all_doors, 0);
    }

    #[test]
    fn test_invalid_job_qty_defaults_to_one() {
        // The quantity field is deliberately lenient: it never fails the
        // order, unlike the dimension fields.
        let result = calculate(&order(json!({
            "job": { "qty": "not-a-number" },
            "horizontal": { "leaf": "994 Leaf" },
            "vertical": { "oa_frame": "2100", "leaf": "2040" }
        })))
        .unwrap();

        assert_eq!(result.door_quantity, 1);
        assert_eq!(result.total_horizontal_quantity, 3);
    }

    #[test]
    fn test_zero_door_quantity() {
        let result = calculate(&order(json!({
            "job": { "qty": "0" },
            "horizontal": { "leaf": "994 Leaf" },
            "vertical": { "oa_frame": "2100", "leaf": "2040" }
        })))
        .unwrap();

        assert_eq!(result.door_quantity, 0);
        assert_eq!(result.total_horizontal_quantity, 0);
        assert_eq!(result.reinforcement.reinforcements_per_leaf, 3);
        assert_eq!(result.reinforcement.total_reinforcements_all_doors, 0);
    }

    #[test]
    fn test_short_frame_goes_negative() {
        let result = calculate(&order(json!({
            "horizontal": { "leaf": "994 Leaf" },
            "vertical": { "oa_frame": "20", "leaf": "2040" }
        })))
        .unwrap();

        assert_eq!(result.vertical_adjusted, -10);
    }

    #[test]
    fn test_only_leading_token_is_parsed() {
        let result = calculate(&order(json!({
            "horizontal": { "leaf": "450 Leaf RH glazed" },
            "vertical": { "oa_frame": "2100", "leaf": "2040" }
        })))
        .unwrap();

        assert_eq!(result.horizontal_quantities[0].leaf_size, 450);
        assert_eq!(result.horizontal_quantities[0].quantity, 1);
        assert_eq!(
            result.horizontal_quantities[0].leaf_description,
            "450 Leaf RH glazed"
        );
    }

    #[test]
    fn test_reinforcement_reuses_segmentation_total() {
        // Open question carried over from the shop sheets: the per-door
        // reinforcement count is defined as the horizontal segmentation
        // total, not an independent width-based derivation. Keep the two in
        // lockstep until the workshop says otherwise.
        let result = calculate(&order(json!({
            "job": { "qty": "4" },
            "horizontal": { "leaf": ["900 Leaf", "600 Leaf"] },
            "vertical": { "oa_frame": "2100", "leaf": "2040" }
        })))
        .unwrap();

        let per_door_total: i64 = result
            .horizontal_quantities
            .iter()
            .map(|entry| entry.quantity)
            .sum();
        assert_eq!(result.reinforcement.reinforcements_per_leaf, per_door_total);
        assert_eq!(result.reinforcement.total_reinforcements_per_door, per_door_total);
        assert_eq!(
            result.reinforcement.total_reinforcements_all_doors,
            per_door_total * 4
        );
    }

    #[test]
    fn test_calculation_is_deterministic() {
        let input = single_leaf_order();
        assert_eq!(calculate(&input).unwrap(), calculate(&input).unwrap());
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&single_leaf_order()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        let roundtrip: CalculationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
