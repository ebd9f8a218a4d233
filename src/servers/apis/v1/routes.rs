//! Route initialization for the v1 API.
use std::sync::Arc;

use axum::Router;

use super::context::{climate, session, vehicle};
use crate::core::Controller;

/// Add the routes for the v1 API.
pub fn add(prefix: &str, router: Router, controller: Arc<Controller>) -> Router {
    let v1_prefix = format!("{prefix}/v1");

    let router = vehicle::routes::add(&v1_prefix, router, controller.clone());
    let router = climate::routes::add(&v1_prefix, router, controller.clone());
    session::routes::add(&v1_prefix, router, controller)
}

/// Add the routes of the first version of the service.
///
/// > **NOTICE**: they are kept for backward compatibility with the existing
/// > clients (home automation scripts and phone shortcuts). New clients
/// > should use the `/api/v1` endpoints.
pub fn add_legacy(router: Router, controller: Arc<Controller>) -> Router {
    let router = vehicle::routes::add_legacy(router, controller.clone());
    climate::routes::add_legacy(router, controller)
}
