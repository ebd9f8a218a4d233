//! Logic to run the HTTP API server.
//!
//! It contains two main structs: `ApiServer` and `Launcher`.
//!
//! The `ApiServer` struct is responsible for:
//!
//! - Starting and stopping the server.
//! - Storing the launcher while the server is stopped.
//!
//! `ApiServer` relies on a launcher to start the actual server.
//!
//! 1. `ApiServer::start` -> spawns new asynchronous task.
//! 2. `Launcher::start` -> binds the socket and starts the server on the
//!    spawned task. It sends the bound address back to `ApiServer::start`.
//!
//! The `Launcher` struct is responsible for:
//!
//! - Knowing how to start the server with graceful shutdown.
//!
//! The server is stopped by sending a [`Halted`] message through the halt
//! channel, or with the process signals (`ctrl_c` and `terminate`).
use std::net::SocketAddr;
use std::sync::Arc;

use axum_server::tls_rustls::RustlsConfig;
use axum_server::Handle;
use derive_more::Constructor;
use futures::future::BoxFuture;
use futures::FutureExt as _;
use thiserror::Error;
use tokio::sync::oneshot::{Receiver, Sender};
use tracing::{error, info};
use vehicle_control_configuration::AccessTokens;

use super::routes::router;
use crate::bootstrap::jobs::Started;
use crate::core::Controller;
use crate::servers::signals::{graceful_shutdown, Halted};

/// Errors that can occur when starting or stopping the API server.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unable to bind the API server to {addr}: {source}")]
    UnableToBind { addr: SocketAddr, source: std::io::Error },

    #[error("the API server did not report its address")]
    NotStarted,

    #[error("unable to send the halt signal to the API server, it is not running")]
    UnableToSendHaltingMessage,

    #[error("the API server task failed: {reason}")]
    TaskFailed { reason: String },
}

/// A stopped API server.
#[allow(clippy::module_name_repetitions)]
pub type StoppedApiServer = ApiServer<Stopped>;

/// A running API server.
#[allow(clippy::module_name_repetitions)]
pub type RunningApiServer = ApiServer<Running>;

/// An API server controller.
///
/// It's a state machine. The server is either `Stopped` or `Running`.
#[allow(clippy::module_name_repetitions)]
pub struct ApiServer<S> {
    pub state: S,
}

/// A stopped API server state.
pub struct Stopped {
    launcher: Launcher,
}

/// A running API server state.
pub struct Running {
    pub binding: SocketAddr,
    pub halt_task: Sender<Halted>,
    pub task: tokio::task::JoinHandle<Launcher>,
}

impl ApiServer<Stopped> {
    #[must_use]
    pub fn new(launcher: Launcher) -> Self {
        Self {
            state: Stopped { launcher },
        }
    }

    /// It starts the server and returns a `ApiServer` controller in `running`
    /// state.
    ///
    /// # Errors
    ///
    /// It would return an error if the socket can not be bound.
    pub async fn start(self, controller: Arc<Controller>, access_tokens: Arc<AccessTokens>) -> Result<ApiServer<Running>, Error> {
        let (tx_start, rx_start) = tokio::sync::oneshot::channel::<Result<Started, Error>>();
        let (tx_halt, rx_halt) = tokio::sync::oneshot::channel::<Halted>();

        let launcher = self.state.launcher;

        let task = tokio::spawn(async move {
            let server = launcher.start(controller, access_tokens, tx_start, rx_halt);

            server.await;

            launcher
        });

        let started = rx_start.await.map_err(|_| Error::NotStarted)??;

        Ok(ApiServer {
            state: Running {
                binding: started.address,
                halt_task: tx_halt,
                task,
            },
        })
    }
}

impl ApiServer<Running> {
    /// It stops the server and returns a `ApiServer` controller in `stopped`
    /// state.
    ///
    /// # Errors
    ///
    /// It would return an error if the channel for the task killer signal was
    /// closed or the server task panicked.
    pub async fn stop(self) -> Result<ApiServer<Stopped>, Error> {
        self.state
            .halt_task
            .send(Halted::Normal)
            .map_err(|_| Error::UnableToSendHaltingMessage)?;

        let launcher = self
            .state
            .task
            .await
            .map_err(|err| Error::TaskFailed { reason: err.to_string() })?;

        Ok(ApiServer {
            state: Stopped { launcher },
        })
    }
}

/// A struct responsible for starting the API server.
#[derive(Constructor, Debug)]
pub struct Launcher {
    bind_to: SocketAddr,
    tls: Option<RustlsConfig>,
}

impl Launcher {
    /// Starts the API server with graceful shutdown.
    ///
    /// The result of binding the socket is sent through `tx_start`. The
    /// returned future resolves when the server stops.
    fn start(
        &self,
        controller: Arc<Controller>,
        access_tokens: Arc<AccessTokens>,
        tx_start: Sender<Result<Started, Error>>,
        rx_halt: Receiver<Halted>,
    ) -> BoxFuture<'static, ()> {
        let bound = std::net::TcpListener::bind(self.bind_to).and_then(|socket| {
            let address = socket.local_addr()?;
            Ok((socket, address))
        });

        let (socket, address) = match bound {
            Ok(bound) => bound,
            Err(source) => {
                error!(target: "API", "Unable to bind to {}: {source}", self.bind_to);
                let _ = tx_start.send(Err(Error::UnableToBind {
                    addr: self.bind_to,
                    source,
                }));
                return futures::future::ready(()).boxed();
            }
        };

        let router = router(controller, access_tokens);

        let handle = Handle::new();

        tokio::task::spawn(graceful_shutdown(
            handle.clone(),
            rx_halt,
            format!("Shutting down API server on socket address: {address}"),
        ));

        let tls = self.tls.clone();
        let protocol = if tls.is_some() { "https" } else { "http" };

        info!(target: "API", "Starting on {protocol}://{address}");

        let running = Box::pin(async move {
            let served = match tls {
                Some(tls) => {
                    axum_server::from_tcp_rustls(socket, tls)
                        .handle(handle)
                        .serve(router.into_make_service_with_connect_info::<SocketAddr>())
                        .await
                }
                None => {
                    axum_server::from_tcp(socket)
                        .handle(handle)
                        .serve(router.into_make_service_with_connect_info::<SocketAddr>())
                        .await
                }
            };

            if let Err(err) = served {
                error!(target: "API", "Server stopped with an error: {err}");
            }
        });

        info!(target: "API", "Started on {protocol}://{address}");

        if tx_start.send(Ok(Started { address })).is_err() {
            error!(target: "API", "Nobody is waiting for the API server to start");
        }

        running
    }
}
