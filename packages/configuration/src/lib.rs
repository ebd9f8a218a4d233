//! Configuration data structures for the [Vehicle Control API](https://docs.rs/vehicle-control).
//!
//! This module contains the configuration data structures for the vehicle
//! control service, a small REST API in front of a vehicle telematics cloud.
//!
//! The current version for configuration is [`v1`].
//!
//! # Sources
//!
//! The configuration is merged from these sources, later sources override
//! earlier ones:
//!
//! 1. Default values.
//! 2. A TOML document: the content of the `VEHICLE_CONTROL_CONFIG_TOML`
//!    environment variable if it is set, otherwise the file in
//!    `VEHICLE_CONTROL_CONFIG_TOML_PATH` (or the default path).
//! 3. Environment variables with the `VEHICLE_CONTROL__` prefix, using `__`
//!    to separate sections, for example `VEHICLE_CONTROL__SESSION__MAX_ATTEMPTS=3`.
//! 4. The legacy variables `KIA_USERNAME`, `KIA_PASSWORD`, `KIA_PIN`,
//!    `VEHICLE_ID` and `SECRET_KEY`.
pub mod v1;
pub mod validator;

use std::collections::HashMap;
use std::env;
use std::sync::Arc;

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The whole `vehicle_control.toml` file content. It has priority over the
/// config file.
pub const ENV_VAR_CONFIG_TOML: &str = "VEHICLE_CONTROL_CONFIG_TOML";

/// The `vehicle_control.toml` file location.
pub const ENV_VAR_CONFIG_TOML_PATH: &str = "VEHICLE_CONTROL_CONFIG_TOML_PATH";

/// Prefix for the environment variables overriding single options.
pub const ENV_VAR_PREFIX: &str = "VEHICLE_CONTROL__";

/// Label of the access token loaded from the legacy `SECRET_KEY` variable.
pub const LEGACY_ACCESS_TOKEN_LABEL: &str = "admin";

pub type Configuration = v1::Configuration;
pub type Logging = v1::logging::Logging;
pub type Threshold = v1::logging::Threshold;
pub type HttpApi = v1::vehicle_api::HttpApi;
pub type VehicleCloud = v1::vehicle_cloud::VehicleCloud;
pub type Driver = v1::vehicle_cloud::Driver;
pub type Session = v1::session::Session;
pub type Climate = v1::climate::Climate;
pub type Trunk = v1::trunk::Trunk;

pub type AccessTokens = HashMap<String, String>;

pub type DynError = Arc<dyn std::error::Error + Send + Sync>;

/// Information required for loading config
#[derive(Debug, Default, Clone)]
pub struct Info {
    config_toml: Option<String>,
    config_toml_path: String,
}

impl Info {
    /// Build Configuration Info
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to obtain a configuration.
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(default_config_toml_path: String) -> Result<Self, Error> {
        let config_toml = if let Ok(config_toml) = env::var(ENV_VAR_CONFIG_TOML) {
            println!("Loading configuration from environment variable {ENV_VAR_CONFIG_TOML} ...");
            Some(config_toml)
        } else {
            None
        };

        let config_toml_path = if let Ok(config_toml_path) = env::var(ENV_VAR_CONFIG_TOML_PATH) {
            println!("Loading configuration from file: `{config_toml_path}` ...");
            config_toml_path
        } else {
            println!("Loading configuration from default configuration file: `{default_config_toml_path}` ...");
            default_config_toml_path
        };

        Ok(Self {
            config_toml,
            config_toml_path,
        })
    }

    /// Configuration info with an inline TOML document. Used mostly in tests.
    #[must_use]
    pub fn from_toml(config_toml: &str) -> Self {
        Self {
            config_toml: Some(config_toml.to_owned()),
            config_toml_path: String::new(),
        }
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// Unable to load the configuration from the configuration file.
    #[error("Failed processing the configuration: {source}")]
    ConfigError { source: DynError },

    /// The configuration was loaded but some options are not compatible.
    #[error("Invalid configuration: {source}")]
    InvalidConfiguration {
        #[from]
        source: validator::SemanticValidationError,
    },
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigError { source: Arc::new(err) }
    }
}

/// Paths to the certificate and key used when the API is served over TLS.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct TslConfig {
    /// Path to the SSL certificate file.
    #[serde(default = "TslConfig::default_ssl_cert_path")]
    pub ssl_cert_path: Utf8PathBuf,

    /// Path to the SSL key file.
    #[serde(default = "TslConfig::default_ssl_key_path")]
    pub ssl_key_path: Utf8PathBuf,
}

impl TslConfig {
    fn default_ssl_cert_path() -> Utf8PathBuf {
        Utf8PathBuf::new()
    }

    fn default_ssl_key_path() -> Utf8PathBuf {
        Utf8PathBuf::new()
    }
}
