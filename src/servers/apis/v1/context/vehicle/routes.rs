//! API routes for the [`vehicle`](crate::servers::apis::v1::context::vehicle) API context.
//!
//! - `GET /vehicle/status`
//! - `GET /vehicles`
//! - `POST /vehicle/lock`
//! - `POST /vehicle/unlock`
//! - `POST /vehicle/trunk`
//!
//! Refer to the [API endpoint documentation](crate::servers::apis::v1::context::vehicle).
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    get_legacy_status_handler, get_vehicle_status_handler, get_vehicles_handler, lock_handler, open_trunk_handler,
    unlock_handler,
};
use crate::core::Controller;

/// It adds the routes to the router for the [`vehicle`](crate::servers::apis::v1::context::vehicle) API context.
pub fn add(prefix: &str, router: Router, controller: Arc<Controller>) -> Router {
    router
        .route(
            &format!("{prefix}/vehicle/status"),
            get(get_vehicle_status_handler).with_state(controller.clone()),
        )
        .route(&format!("{prefix}/vehicles"), get(get_vehicles_handler).with_state(controller.clone()))
        // Commands
        .route(&format!("{prefix}/vehicle/lock"), post(lock_handler).with_state(controller.clone()))
        .route(&format!("{prefix}/vehicle/unlock"), post(unlock_handler).with_state(controller.clone()))
        .route(&format!("{prefix}/vehicle/trunk"), post(open_trunk_handler).with_state(controller))
}

/// It adds the routes of the first version of the service.
pub fn add_legacy(router: Router, controller: Arc<Controller>) -> Router {
    router
        .route("/vehicle_status", get(get_legacy_status_handler).with_state(controller.clone()))
        .route("/lock_car", post(lock_handler).with_state(controller.clone()))
        .route("/unlock_car", post(unlock_handler).with_state(controller.clone()))
        .route("/aftermarket_trunk", post(open_trunk_handler).with_state(controller))
}
