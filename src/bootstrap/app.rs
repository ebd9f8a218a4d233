//! Setup for the main vehicle control application.
//!
//! The [`setup`] only builds the application and its dependencies but it
//! does not start the application. In fact, there is no such thing as
//! starting the application process. The application is a collection of
//! jobs. Refer to the [`app`](crate::app) module.
//!
//! Setup steps:
//!
//! 1. Load the global application configuration.
//! 2. Initialize logging.
//! 3. Build the vehicle cloud connector for the configured driver.
//! 4. Build the [`Controller`]. The session with the vehicle cloud is not
//!    opened here.
use std::sync::Arc;

use tracing::{info, warn};
use vehicle_control_configuration::Configuration;

use super::config::initialize_configuration;
use crate::bootstrap;
use crate::core::{cloud, Controller};

/// It loads the configuration from the environment and builds the main
/// domain [`Controller`] struct.
#[must_use]
pub fn setup() -> (Arc<Configuration>, Arc<Controller>) {
    let configuration = Arc::new(initialize_configuration());
    let controller = initialize_with_configuration(&configuration);

    (configuration, controller)
}

/// It initializes the application with the given configuration.
///
/// The configuration may be obtained from the environment (via config file
/// or env vars).
#[must_use]
pub fn initialize_with_configuration(configuration: &Arc<Configuration>) -> Arc<Controller> {
    initialize_logging(configuration);
    Arc::new(initialize_controller(configuration))
}

/// It builds the domain [`Controller`] with the connector of the configured
/// vehicle cloud driver.
#[must_use]
pub fn initialize_controller(config: &Arc<Configuration>) -> Controller {
    info!(driver = ?config.vehicle_cloud.driver, "Using vehicle cloud driver");

    if config.vehicle_cloud.driver.is_in_memory() {
        warn!(
            driver = ?config.vehicle_cloud.driver,
            "The vehicle cloud is simulated in memory. Commands are not sent to any real vehicle"
        );
    }

    Controller::new(config, cloud::connector(&config.vehicle_cloud))
}

/// It initializes the log threshold, format and channel.
///
/// See [the logging setup](crate::bootstrap::logging::setup) for more info
/// about logging.
pub fn initialize_logging(config: &Arc<Configuration>) {
    bootstrap::logging::setup(config);
}
