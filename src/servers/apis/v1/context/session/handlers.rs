//! API handlers for the [`session`](crate::servers::apis::v1::context::session)
//! API context.
use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Json, Response};

use super::resources::Session;
use crate::core::error::Error;
use crate::core::session::Readiness;
use crate::core::Controller;
use crate::servers::apis::v1::responses::core_error_response;

pub async fn get_session_handler(State(controller): State<Arc<Controller>>) -> Response {
    readiness_response(controller.readiness().await).await
}

pub async fn reinitialize_session_handler(State(controller): State<Arc<Controller>>) -> Response {
    readiness_response(controller.reinitialize().await).await
}

async fn readiness_response(readiness: Readiness) -> Response {
    match readiness {
        Readiness::Ready(handle) => Json(Session::from_handle(&handle).await).into_response(),
        Readiness::Failed(source) => core_error_response(&Error::NotReady { source }),
    }
}
