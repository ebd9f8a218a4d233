//! API handlers for the [`vehicle`](crate::servers::apis::v1::context::vehicle)
//! API context.
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use vehicle_control_primitives::vehicle::VehicleId;

use super::responses::{legacy_status_response, trunk_opened_response, vehicle_response, vehicles_response};
use crate::core::Controller;
use crate::servers::apis::v1::responses::{command_accepted_response, core_error_response};

/// Query parameters of the status endpoints.
#[derive(Deserialize, Debug, Default)]
pub struct StatusQueryParams {
    pub vehicle_id: Option<String>,
}

impl StatusQueryParams {
    fn vehicle_id(&self) -> Option<VehicleId> {
        self.vehicle_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(VehicleId::new)
    }
}

/// It handles the request to get the state of a vehicle.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::vehicle#get-vehicle-status)
/// for more information about this endpoint.
pub async fn get_vehicle_status_handler(
    State(controller): State<Arc<Controller>>,
    Query(params): Query<StatusQueryParams>,
) -> Response {
    match controller.status(params.vehicle_id().as_ref()).await {
        Ok(snapshot) => vehicle_response(snapshot).into_response(),
        Err(err) => core_error_response(&err),
    }
}

/// It handles the request of the first version of the service to get the
/// state of the default vehicle.
pub async fn get_legacy_status_handler(
    State(controller): State<Arc<Controller>>,
    Query(params): Query<StatusQueryParams>,
) -> Response {
    match controller.status(params.vehicle_id().as_ref()).await {
        Ok(snapshot) => legacy_status_response(&snapshot).into_response(),
        Err(err) => core_error_response(&err),
    }
}

/// It handles the request to list the vehicles in the account.
pub async fn get_vehicles_handler(State(controller): State<Arc<Controller>>) -> Response {
    match controller.vehicles().await {
        Ok(snapshots) => vehicles_response(snapshots).into_response(),
        Err(err) => core_error_response(&err),
    }
}

pub async fn lock_handler(State(controller): State<Arc<Controller>>) -> Response {
    match controller.lock().await {
        Ok(result) => command_accepted_response("Car locked", result),
        Err(err) => core_error_response(&err),
    }
}

pub async fn unlock_handler(State(controller): State<Arc<Controller>>) -> Response {
    match controller.unlock().await {
        Ok(result) => command_accepted_response("Car unlocked", result),
        Err(err) => core_error_response(&err),
    }
}

pub async fn open_trunk_handler(State(controller): State<Arc<Controller>>) -> Response {
    match controller.open_trunk().await {
        Ok(results) => trunk_opened_response(results),
        Err(err) => core_error_response(&err),
    }
}
