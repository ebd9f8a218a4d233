//! API responses for the [`vehicle`](crate::servers::apis::v1::context::vehicle)
//! API context.
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use vehicle_control_primitives::vehicle::VehicleSnapshot;
use vehicle_control_primitives::CommandResult;

use super::resources::{LegacyStatus, Vehicle};

#[derive(Serialize, Debug)]
pub struct TrunkOpened {
    pub status: String,
    pub results: Vec<CommandResult>,
}

/// `200` response that contains the [`Vehicle`] resource as json.
#[must_use]
pub fn vehicle_response(snapshot: VehicleSnapshot) -> Json<Vehicle> {
    Json(Vehicle::from(snapshot))
}

/// `200` response that contains an array of [`Vehicle`] resources as json.
#[must_use]
pub fn vehicles_response(snapshots: Vec<VehicleSnapshot>) -> Json<Vec<Vehicle>> {
    Json(snapshots.into_iter().map(Vehicle::from).collect())
}

/// `200` response that contains the [`LegacyStatus`] resource as json.
#[must_use]
pub fn legacy_status_response(snapshot: &VehicleSnapshot) -> Json<LegacyStatus> {
    Json(LegacyStatus::from(snapshot))
}

/// `200` response with the raw result of every unlock pulse.
#[must_use]
pub fn trunk_opened_response(results: Vec<CommandResult>) -> Response {
    Json(TrunkOpened {
        status: "Aftermarket trunk opened".to_string(),
        results,
    })
    .into_response()
}
