//! The seam between the core and the vehicle cloud client.
//!
//! The core never talks to a vehicle cloud directly. It uses two traits:
//!
//! - [`Connector`]: knows the region and brand tables of the client and opens
//!   new sessions for a [`Selector`].
//! - [`Session`]: one authenticated connection to the owner account. It
//!   refreshes the authentication token, reads the state of every vehicle on
//!   the account and sends remote commands.
//!
//! Cloud adapters translate whatever the client library returns into the
//! stable [`VehicleSnapshot`] and take [`ClimateOptions`] as input, so the core
//! never depends on the shape of a particular client version.
//!
//! The only driver is the [`simulated`] cloud. It keeps a fleet in memory and
//! is used both for demos and as the test double of the integration tests.
pub mod selector;
pub mod simulated;

use std::sync::Arc;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;
use vehicle_control_configuration::{Driver, VehicleCloud};
use vehicle_control_primitives::climate::ClimateOptions;
use vehicle_control_primitives::region::Selector;
use vehicle_control_primitives::vehicle::{VehicleId, VehicleSnapshot};
use vehicle_control_primitives::CommandResult;

use self::selector::Catalogue;

/// Errors returned by the vehicle cloud.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CloudError {
    /// The cloud did not accept the credentials or the token expired.
    #[error("authentication failed: {message}")]
    Authentication { message: String },

    /// The cloud could not be reached or it answered with something
    /// unexpected.
    #[error("transport error: {message}")]
    Transport { message: String },

    /// The cloud received the command but refused to execute it.
    #[error("command rejected by the vehicle cloud: {message}")]
    Rejected { message: String },
}

/// Owner account credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub pin: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .field("pin", &"***")
            .finish()
    }
}

impl Credentials {
    /// It builds the credentials from the configuration.
    ///
    /// # Errors
    ///
    /// Will return the names of **all** the missing or empty options.
    pub fn from_config(config: &VehicleCloud) -> Result<Self, Vec<&'static str>> {
        let missing = config.missing_credentials();

        if !missing.is_empty() {
            return Err(missing);
        }

        Ok(Self {
            username: config.username.clone().unwrap_or_default(),
            password: config.password.clone().unwrap_or_default(),
            pin: config.pin.clone().unwrap_or_default(),
        })
    }
}

/// An authenticated connection to the owner account.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Session: Send + Sync {
    /// It authenticates, or refreshes the token when it is about to expire.
    async fn refresh_token(&self) -> Result<(), CloudError>;

    /// It reads the last-known state of all the vehicles on the account, in
    /// the order the cloud lists them.
    async fn refresh_all_vehicle_state(&self) -> Result<Vec<VehicleSnapshot>, CloudError>;

    async fn lock(&self, vehicle_id: &VehicleId) -> Result<CommandResult, CloudError>;

    async fn unlock(&self, vehicle_id: &VehicleId) -> Result<CommandResult, CloudError>;

    async fn start_climate(&self, vehicle_id: &VehicleId, options: ClimateOptions) -> Result<CommandResult, CloudError>;

    async fn stop_climate(&self, vehicle_id: &VehicleId) -> Result<CommandResult, CloudError>;
}

/// Opens sessions against a vehicle cloud.
#[cfg_attr(test, automock)]
pub trait Connector: Send + Sync {
    /// The region and brand name tables known by the client, newest first.
    fn catalogues(&self) -> Vec<Catalogue>;

    /// It builds a new, not yet authenticated, session.
    ///
    /// # Errors
    ///
    /// Will return an error if the client does not support the selector.
    fn connect(&self, credentials: &Credentials, selector: Selector) -> Result<Arc<dyn Session>, CloudError>;
}

/// It builds the connector for the configured driver.
#[must_use]
pub fn connector(config: &VehicleCloud) -> Arc<dyn Connector> {
    match config.driver {
        Driver::Simulated => Arc::new(simulated::SimulatedCloud::demo()),
    }
}
