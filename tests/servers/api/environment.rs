use std::net::SocketAddr;
use std::sync::Arc;

use futures::executor::block_on;
use vehicle_control::bootstrap::jobs::make_rust_tls;
use vehicle_control::core::cloud::simulated::SimulatedCloud;
use vehicle_control::core::Controller;
use vehicle_control::servers::apis::server::{ApiServer, Launcher, Running, Stopped};
use vehicle_control_configuration::{Configuration, HttpApi};
use vehicle_control_primitives::vehicle::{VehicleId, VehicleSnapshot};

use super::connection_info::ConnectionInfo;

/// A running or stopped API server backed by a simulated vehicle cloud.
pub struct Environment<S> {
    pub config: Arc<HttpApi>,
    pub cloud: SimulatedCloud,
    pub controller: Arc<Controller>,
    pub server: ApiServer<S>,
}

impl<S> Environment<S> {
    /// It changes the state of a vehicle in the simulated cloud.
    pub async fn set_vehicle(&self, snapshot: VehicleSnapshot) {
        self.cloud.set_vehicle(snapshot).await;
    }

    /// The state of a vehicle in the simulated cloud.
    pub async fn vehicle(&self, vehicle_id: &str) -> VehicleSnapshot {
        self.cloud
            .vehicle(&VehicleId::new(vehicle_id))
            .await
            .expect("the vehicle should be in the simulated cloud")
    }
}

impl Environment<Stopped> {
    pub fn new(configuration: &Arc<Configuration>) -> Self {
        Self::with_cloud(configuration, SimulatedCloud::demo())
    }

    pub fn with_cloud(configuration: &Arc<Configuration>, cloud: SimulatedCloud) -> Self {
        let controller = Arc::new(Controller::new(configuration, Arc::new(cloud.clone())));

        let config = Arc::new(configuration.http_api.clone());

        let bind_to = config.bind_address;

        let tls = block_on(make_rust_tls(&config.tsl_config)).map(|tls| tls.expect("tls config failed"));

        let server = ApiServer::new(Launcher::new(bind_to, tls));

        Self {
            config,
            cloud,
            controller,
            server,
        }
    }

    pub async fn start(self) -> Environment<Running> {
        let access_tokens = Arc::new(self.config.access_tokens.clone());

        Environment {
            config: self.config,
            cloud: self.cloud,
            controller: self.controller.clone(),
            server: self.server.start(self.controller, access_tokens).await.unwrap(),
        }
    }
}

impl Environment<Running> {
    pub async fn new(configuration: &Arc<Configuration>) -> Self {
        Environment::<Stopped>::new(configuration).start().await
    }

    pub async fn with_cloud(configuration: &Arc<Configuration>, cloud: SimulatedCloud) -> Self {
        Environment::<Stopped>::with_cloud(configuration, cloud).start().await
    }

    pub async fn stop(self) -> Environment<Stopped> {
        Environment {
            config: self.config,
            cloud: self.cloud,
            controller: self.controller,
            server: self.server.stop().await.unwrap(),
        }
    }

    pub fn get_connection_info(&self) -> ConnectionInfo {
        ConnectionInfo {
            bind_address: self.server.state.binding.to_string(),
            api_token: self.config.access_tokens.get("admin").cloned(),
        }
    }

    pub fn bind_address(&self) -> SocketAddr {
        self.server.state.binding
    }
}
