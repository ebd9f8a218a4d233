//! Initialize configuration from file or env var.
//!
//! All environment variables are prefixed with `VEHICLE_CONTROL_`.
use vehicle_control_configuration::{Configuration, Info};

// Default values
pub const DEFAULT_PATH_CONFIG: &str = "./share/default/config/vehicle_control.development.toml";

/// It loads the application configuration from the environment.
///
/// There are two methods to inject the configuration:
///
/// 1. By using a config file: `vehicle_control.toml`.
/// 2. Environment variable: `VEHICLE_CONTROL_CONFIG_TOML`. The variable
///    contains the same contents as the `vehicle_control.toml` file.
///
/// Environment variable has priority over the config file. The owner
/// account credentials are usually injected with the `KIA_USERNAME`,
/// `KIA_PASSWORD`, `KIA_PIN`, `VEHICLE_ID` and `SECRET_KEY` variables.
///
/// Refer to the [configuration documentation](https://docs.rs/vehicle-control-configuration)
/// for the configuration options.
///
/// # Panics
///
/// Will panic if it can't load the configuration from either the file or
/// the env var, or if the configuration is not valid.
#[must_use]
pub fn initialize_configuration() -> Configuration {
    let info = Info::new(DEFAULT_PATH_CONFIG.to_string()).expect("it should load the configuration info");

    Configuration::load(&info).expect("it should load a valid configuration")
}
