//! HTTP routes for the door calculator.
//!
//! This layer only registers routes and maps errors onto response classes;
//! the calculation itself lives in `door_core` and takes the deserialized
//! order unchanged. Client faults come back as 400 with a detail naming the
//! offending field, internal faults as 500 with an opaque message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use door_core::{calculate, CalculationResult, DoorError, OrderInput};

/// Build the service router. Free of shared state, so tests can drive it
/// directly with `tower::ServiceExt::oneshot`.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/calculate", post(calculate_order))
}

/// Liveness probe
async fn root() -> Json<Value> {
    Json(json!({ "message": "Door Calculator API is running" }))
}

/// Health probe
async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// `POST /calculate` - run the dimension calculation for one order
async fn calculate_order(
    Json(order): Json<OrderInput>,
) -> Result<Json<CalculationResult>, ApiError> {
    let result = calculate(&order)?;
    tracing::info!(
        doors = result.door_quantity,
        leaves = result.horizontal_quantities.len(),
        total_segments = result.total_horizontal_quantity,
        "order calculated"
    );
    Ok(Json(result))
}

/// Response wrapper for calculation failures.
struct ApiError(DoorError);

impl From<DoorError> for ApiError {
    fn from(error: DoorError) -> Self {
        ApiError(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_fault() {
            tracing::warn!(code = self.0.error_code(), "rejected order: {}", self.0);
            StatusCode::BAD_REQUEST
        } else {
            tracing::error!(code = self.0.error_code(), "calculation failed: {}", self.0);
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = json!({
            "error": self.0.error_code(),
            "detail": self.0.to_string(),
        });
        (status, Json(body)).into_response()
    }
}
