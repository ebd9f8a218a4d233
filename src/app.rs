//! Vehicle Control application.
//!
//! The application is a container for the jobs started from the global
//! configuration.
//!
//! Jobs executed always:
//!
//! - Vehicle REST API.
//!
//! Optional jobs:
//!
//! - Session warm-up: it opens the vehicle cloud session when the service
//!   starts instead of with the first request.
use std::sync::Arc;

use tokio::task::JoinHandle;
use vehicle_control_configuration::Configuration;

use crate::bootstrap::jobs::{session_warm_up, vehicle_api};
use crate::core::Controller;
use crate::servers;

/// It starts the application jobs.
///
/// # Panics
///
/// Will panic if the API server can not be started.
pub async fn start(config: &Configuration, controller: Arc<Controller>) -> Vec<JoinHandle<()>> {
    let mut jobs: Vec<JoinHandle<()>> = Vec::new();

    // Open the vehicle cloud session in the background
    if config.session.warm_up {
        jobs.push(session_warm_up::start_job(&controller));
    }

    // Start the vehicle API
    jobs.push(vehicle_api::start_job(&config.http_api, controller, servers::apis::Version::V1).await);

    jobs
}
