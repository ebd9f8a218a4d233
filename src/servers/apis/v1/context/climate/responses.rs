//! API responses for the [`climate`](crate::servers::apis::v1::context::climate)
//! API context.
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use vehicle_control_primitives::climate::ClimateOptions;
use vehicle_control_primitives::CommandResult;

use crate::core::commands::{Attempt, ClimateStarted};

#[derive(Serialize, Debug)]
pub struct ClimateStartedResource {
    pub status: String,
    pub vehicle_id: String,
    /// `primary` or `fallback`.
    pub attempt: Attempt,
    /// The options of the accepted attempt.
    pub options: ClimateOptions,
    pub result: CommandResult,
}

/// `200` response for a climate start accepted by the vehicle cloud.
#[must_use]
pub fn climate_started_response(started: ClimateStarted) -> Response {
    started_response("Climate started".to_string(), started)
}

/// `200` response for the heating preset. The status includes the
/// temperature.
#[must_use]
pub fn heating_started_response(started: ClimateStarted) -> Response {
    started_response(format!("Heating started ({})", started.options.temperature), started)
}

fn started_response(status: String, started: ClimateStarted) -> Response {
    Json(ClimateStartedResource {
        status,
        vehicle_id: started.vehicle_id.to_string(),
        attempt: started.attempt,
        options: started.options,
        result: started.result,
    })
    .into_response()
}
