//! Vehicle API job starter.
//!
//! The [`vehicle_api::start_job`](crate::bootstrap::jobs::vehicle_api::start_job)
//! function starts the vehicle control REST API.
//!
//! > **NOTICE**: that even thought there is only one job the API has different
//! > versions. API consumers can choose which version to use. The API version
//! > is part of the URL, for example: `http://localhost:8080/api/v1/vehicle/status`.
//!
//! The [`vehicle_api::start_job`](crate::bootstrap::jobs::vehicle_api::start_job)
//! function spawns a new asynchronous task, that tasks is the "**launcher**".
//! The "**launcher**" starts the actual server and sends a message back
//! to the main application.
//!
//! Refer to the [configuration documentation](https://docs.rs/vehicle-control-configuration)
//! for the API configuration options.
use std::net::SocketAddr;
use std::sync::Arc;

use axum_server::tls_rustls::RustlsConfig;
use tokio::task::JoinHandle;
use vehicle_control_configuration::{AccessTokens, HttpApi};

use super::make_rust_tls;
use crate::core::Controller;
use crate::servers::apis::server::{ApiServer, Launcher};
use crate::servers::apis::Version;

/// This function starts a new API server with the provided configuration.
///
/// The functions starts a new concurrent task that will run the API server.
///
/// # Panics
///
/// It would panic if the TLS configuration is not valid or the server can
/// not be started.
pub async fn start_job(config: &HttpApi, controller: Arc<Controller>, version: Version) -> JoinHandle<()> {
    let bind_to = config.bind_address;

    let tls = make_rust_tls(&config.tsl_config)
        .await
        .map(|tls| tls.expect("it should have a valid vehicle api tls configuration"));

    let access_tokens = Arc::new(config.access_tokens.clone());

    match version {
        Version::V1 => start_v1(bind_to, tls, controller, access_tokens).await,
    }
}

async fn start_v1(
    socket: SocketAddr,
    tls: Option<RustlsConfig>,
    controller: Arc<Controller>,
    access_tokens: Arc<AccessTokens>,
) -> JoinHandle<()> {
    let server = ApiServer::new(Launcher::new(socket, tls))
        .start(controller, access_tokens)
        .await
        .expect("it should be able to start to the vehicle api");

    tokio::spawn(async move {
        assert!(!server.state.halt_task.is_closed(), "Halt channel should be open");
        server.state.task.await.expect("failed to close service");
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use vehicle_control_test_helpers::configuration::ephemeral;

    use crate::bootstrap::app::initialize_with_configuration;
    use crate::bootstrap::jobs::vehicle_api::start_job;
    use crate::servers::apis::Version;

    #[tokio::test]
    async fn it_should_start_the_vehicle_api() {
        let cfg = Arc::new(ephemeral());
        let config = &cfg.http_api;
        let controller = initialize_with_configuration(&cfg);

        let job = start_job(config, controller, Version::V1).await;

        assert!(!job.is_finished());

        job.abort();
    }
}
