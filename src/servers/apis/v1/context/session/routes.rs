//! API routes for the [`session`](crate::servers::apis::v1::context::session) API context.
//!
//! - `GET /session`
//! - `POST /session/reinitialize`
//!
//! Refer to the [API endpoint documentation](crate::servers::apis::v1::context::session).
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{get_session_handler, reinitialize_session_handler};
use crate::core::Controller;

/// It adds the routes to the router for the [`session`](crate::servers::apis::v1::context::session) API context.
pub fn add(prefix: &str, router: Router, controller: Arc<Controller>) -> Router {
    router
        .route(&format!("{prefix}/session"), get(get_session_handler).with_state(controller.clone()))
        .route(
            &format!("{prefix}/session/reinitialize"),
            post(reinitialize_session_handler).with_state(controller),
        )
}
