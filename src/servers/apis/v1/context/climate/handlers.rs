//! API handlers for the [`climate`](crate::servers::apis::v1::context::climate)
//! API context.
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::response::Response;

use super::forms::ClimateForm;
use super::responses::{climate_started_response, heating_started_response};
use crate::core::{ClimateParameters, Controller};
use crate::servers::apis::v1::responses::{command_accepted_response, core_error_response, invalid_body_response};

/// It handles the request to start the climate control.
///
/// The body is parsed by the handler, not by the `Json` extractor, so
/// requests without a body or without a `Content-Type` header are accepted.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::climate#start-the-climate-control)
/// for more information about this endpoint.
pub async fn start_climate_handler(State(controller): State<Arc<Controller>>, body: Bytes) -> Response {
    let form = match ClimateForm::parse(&body) {
        Ok(form) => form,
        Err(err) => return invalid_body_response(&err.to_string()),
    };

    match controller.start_climate(&ClimateParameters::from(form)).await {
        Ok(started) => climate_started_response(started),
        Err(err) => core_error_response(&err),
    }
}

pub async fn start_heating_handler(State(controller): State<Arc<Controller>>) -> Response {
    match controller.start_heating().await {
        Ok(started) => heating_started_response(started),
        Err(err) => core_error_response(&err),
    }
}

pub async fn stop_climate_handler(State(controller): State<Arc<Controller>>) -> Response {
    match controller.stop_climate().await {
        Ok(result) => command_accepted_response("Climate stopped", result),
        Err(err) => core_error_response(&err),
    }
}
