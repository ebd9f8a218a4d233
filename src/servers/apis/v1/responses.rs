//! Common responses for the API v1 shared by all the contexts.
//!
//! Every error response is a JSON object with an `error` message:
//!
//! ```json
//! {
//!     "error": "vehicle KNDJ23AU4N7000009 not found",
//!     "vehicle_id": "KNDJ23AU4N7000009"
//! }
//! ```
//!
//! Some errors carry extra details. Refer to [`core_error_response`].
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use vehicle_control_primitives::CommandResult;

use super::context::vehicle::resources::Vehicle;
use crate::core::error::{Error, InitializationError};

/// Body of the responses to a remote command accepted by the vehicle cloud.
///
/// The `result` is the raw value returned by the cloud.
#[derive(Serialize, Debug)]
pub struct CommandAccepted {
    pub status: String,
    pub result: CommandResult,
}

/// `200` response for a remote command accepted by the vehicle cloud.
#[must_use]
pub fn command_accepted_response(status: &str, result: CommandResult) -> Response {
    (
        StatusCode::OK,
        Json(CommandAccepted {
            status: status.to_owned(),
            result,
        }),
    )
        .into_response()
}

// Error responses

#[must_use]
pub fn bad_request_response(error: &str) -> Response {
    error_response(StatusCode::BAD_REQUEST, json!({ "error": error }))
}

#[must_use]
pub fn invalid_body_response(reason: &str) -> Response {
    bad_request_response(&format!("invalid request body: {reason}"))
}

/// `403` error response.
#[must_use]
pub fn forbidden_response(error: &str) -> Response {
    error_response(StatusCode::FORBIDDEN, json!({ "error": error }))
}

/// It maps the core errors to responses.
///
/// Error | Status | Details
/// ---|---|---
/// `NotReady` | `500` | `missing_fields` when the credentials are not configured
/// `Refresh` | `500` |
/// `VehicleNotFound` | `404` | `vehicle_id`
/// `InvalidTemperature` | `400` |
/// `PreconditionFailed` | `400` | `violations` and the `vehicle` state that was evaluated
/// `CommandFailed` | `500` | `command`
/// `ClimateRejected` | `500` | the `request` and the `primary` and `fallback` errors
#[must_use]
pub fn core_error_response(err: &Error) -> Response {
    let message = err.to_string();

    match err {
        Error::NotReady { source } => match source {
            InitializationError::MissingCredentials { fields } => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": message, "missing_fields": fields }),
            ),
            InitializationError::NoVehicles { .. } | InitializationError::Unreachable { .. } => {
                error_response(StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": message }))
            }
        },
        Error::Refresh { .. } => error_response(StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": message })),
        Error::VehicleNotFound { vehicle_id } => {
            error_response(StatusCode::NOT_FOUND, json!({ "error": message, "vehicle_id": vehicle_id }))
        }
        Error::InvalidTemperature { .. } => bad_request_response(&message),
        Error::PreconditionFailed { violations, snapshot } => error_response(
            StatusCode::BAD_REQUEST,
            json!({
                "error": message,
                "violations": violations.iter().map(ToString::to_string).collect::<Vec<_>>(),
                "vehicle": Vehicle::from(snapshot.as_ref().clone()),
            }),
        ),
        Error::CommandFailed { command, .. } => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "error": message, "command": command }),
        ),
        Error::ClimateRejected {
            request,
            primary,
            fallback,
        } => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({
                "error": message,
                "request": request,
                "primary": primary.to_string(),
                "fallback": fallback.to_string(),
            }),
        ),
    }
}

fn error_response(status: StatusCode, body: Value) -> Response {
    (status, Json(body)).into_response()
}
