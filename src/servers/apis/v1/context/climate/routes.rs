//! API routes for the [`climate`](crate::servers::apis::v1::context::climate) API context.
//!
//! - `POST /climate/start`
//! - `POST /climate/heating`
//! - `POST /climate/stop`
//!
//! Refer to the [API endpoint documentation](crate::servers::apis::v1::context::climate).
use std::sync::Arc;

use axum::routing::post;
use axum::Router;

use super::handlers::{start_climate_handler, start_heating_handler, stop_climate_handler};
use crate::core::Controller;

/// It adds the routes to the router for the [`climate`](crate::servers::apis::v1::context::climate) API context.
pub fn add(prefix: &str, router: Router, controller: Arc<Controller>) -> Router {
    let prefix = format!("{prefix}/climate");

    router
        .route(&format!("{prefix}/start"), post(start_climate_handler).with_state(controller.clone()))
        .route(&format!("{prefix}/heating"), post(start_heating_handler).with_state(controller.clone()))
        .route(&format!("{prefix}/stop"), post(stop_climate_handler).with_state(controller))
}

/// It adds the routes of the first version of the service.
pub fn add_legacy(router: Router, controller: Arc<Controller>) -> Router {
    router
        .route("/start_climate", post(start_climate_handler).with_state(controller.clone()))
        .route("/start_heating", post(start_heating_handler).with_state(controller.clone()))
        .route("/stop_climate", post(stop_climate_handler).with_state(controller))
}
