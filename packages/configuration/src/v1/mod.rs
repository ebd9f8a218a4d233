//! Configuration data structures for the Vehicle Control API.
//!
//! The configuration is loaded from a [TOML](https://toml.io/en/) file
//! `vehicle_control.toml` in the project root folder or from an environment
//! variable with the same content as the file.
//!
//! Configuration can not only be loaded from a file, but also from an
//! environment variable `VEHICLE_CONTROL_CONFIG_TOML`. This is useful when
//! running the service in a Docker container or environments where you do
//! not have a persistent storage or you cannot inject a configuration file.
//!
//! When you run the service without providing the configuration via file or
//! env var, the default configuration is used.
//!
//! # Sections
//!
//! Each section in the toml structure is mapped to a data structure:
//!
//! - [`[logging]`](crate::v1::logging::Logging)
//! - [`[http_api]`](crate::v1::vehicle_api::HttpApi)
//! - [`[vehicle_cloud]`](crate::v1::vehicle_cloud::VehicleCloud)
//! - [`[session]`](crate::v1::session::Session)
//! - [`[climate]`](crate::v1::climate::Climate)
//! - [`[trunk]`](crate::v1::trunk::Trunk)
//!
//! # Secrets
//!
//! The account password, the PIN and the API access tokens are secrets. Use
//! [`Configuration::mask_secrets`] before logging a configuration.
//!
//! Secrets are usually injected with the legacy environment variables, which
//! are read verbatim (a PIN like `0123` keeps its leading zero):
//!
//! Variable | Option
//! ---|---
//! `KIA_USERNAME` | `vehicle_cloud.username`
//! `KIA_PASSWORD` | `vehicle_cloud.password`
//! `KIA_PIN` | `vehicle_cloud.pin`
//! `VEHICLE_ID` | `vehicle_cloud.vehicle_id`
//! `SECRET_KEY` | `http_api.access_tokens.admin`
//!
//! # Default configuration
//!
//! ```toml
//! [logging]
//! threshold = "info"
//!
//! [http_api]
//! bind_address = "0.0.0.0:8080"
//!
//! [http_api.access_tokens]
//!
//! [vehicle_cloud]
//! driver = "simulated"
//! region = "north_america"
//! brand = "kia"
//! temperature_unit = "fahrenheit"
//!
//! [session]
//! max_attempts = 2
//! retry_backoff = 1000
//! warm_up = false
//!
//! [climate]
//! default_duration = 10
//! default_temperature = 62.0
//! heating_temperature = 80.0
//! fallback_duration = 5
//! auto_lock = true
//!
//! [trunk]
//! pulses = 3
//! pulse_interval = 1000
//! ```
pub mod climate;
pub mod logging;
pub mod session;
pub mod trunk;
pub mod vehicle_api;
pub mod vehicle_cloud;

use std::env;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use vehicle_control_primitives::climate::DURATION_RANGE;

use self::climate::Climate;
use self::logging::Logging;
use self::session::Session;
use self::trunk::Trunk;
use self::vehicle_api::HttpApi;
use self::vehicle_cloud::VehicleCloud;
use crate::validator::{SemanticValidationError, Validator};
use crate::{Error, Info, ENV_VAR_PREFIX, LEGACY_ACCESS_TOKEN_LABEL};

/// The whole configuration for the vehicle control service.
#[derive(Serialize, Deserialize, PartialEq, Debug, Default, Clone)]
pub struct Configuration {
    /// Logging configuration
    #[serde(default)]
    pub logging: Logging,

    /// The HTTP API configuration.
    #[serde(default)]
    pub http_api: HttpApi,

    /// Vehicle cloud account and client options.
    #[serde(default)]
    pub vehicle_cloud: VehicleCloud,

    /// Session initialization policy.
    #[serde(default)]
    pub session: Session,

    /// Remote climate defaults and safety options.
    #[serde(default)]
    pub climate: Climate,

    /// Aftermarket trunk release options.
    #[serde(default)]
    pub trunk: Trunk,
}

impl Configuration {
    /// Loads the configuration from the `Info` struct. The whole
    /// configuration in toml format is included in the `info.config_toml`
    /// string, or it is read from `info.config_toml_path`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the configuration can not be parsed or it is not
    /// valid.
    pub fn load(info: &Info) -> Result<Configuration, Error> {
        let figment = if let Some(config_toml) = &info.config_toml {
            Figment::from(Serialized::defaults(Configuration::default())).merge(Toml::string(config_toml))
        } else {
            Figment::from(Serialized::defaults(Configuration::default())).merge(Toml::file(&info.config_toml_path))
        };

        let figment = figment.merge(Env::prefixed(ENV_VAR_PREFIX).split("__"));

        let mut config: Configuration = figment.extract()?;

        config.override_from_legacy_env();

        config.validate()?;

        Ok(config)
    }

    /// Loads the configuration from a TOML file, with the same overrides as
    /// [`Configuration::load`].
    ///
    /// # Errors
    ///
    /// Will return `Err` if `path` does not exist or has a bad configuration.
    pub fn load_from_file(path: &str) -> Result<Configuration, Error> {
        let info = Info {
            config_toml: None,
            config_toml_path: path.to_owned(),
        };

        Self::load(&info)
    }

    /// It applies the environment variables used by the first versions of
    /// the service. They are applied after all the other sources.
    fn override_from_legacy_env(&mut self) {
        if let Ok(username) = env::var("KIA_USERNAME") {
            self.vehicle_cloud.username = Some(username);
        }
        if let Ok(password) = env::var("KIA_PASSWORD") {
            self.vehicle_cloud.password = Some(password);
        }
        if let Ok(pin) = env::var("KIA_PIN") {
            self.vehicle_cloud.pin = Some(pin);
        }
        if let Ok(vehicle_id) = env::var("VEHICLE_ID") {
            self.vehicle_cloud.vehicle_id = Some(vehicle_id);
        }
        if let Ok(secret_key) = env::var("SECRET_KEY") {
            self.http_api.add_token(LEGACY_ACCESS_TOKEN_LABEL, &secret_key);
        }
    }

    /// Masks secrets in the configuration.
    #[must_use]
    pub fn mask_secrets(mut self) -> Self {
        self.http_api.mask_secrets();
        self.vehicle_cloud.mask_secrets();
        self
    }

    /// Encodes the configuration to TOML.
    ///
    /// # Panics
    ///
    /// Will panic if it can't be converted to TOML.
    #[must_use]
    pub fn to_toml(&self) -> String {
        toml::to_string(self).expect("Could not encode TOML value")
    }

    /// Encodes the configuration to JSON.
    ///
    /// # Panics
    ///
    /// Will panic if it can't be converted to JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("Could not encode JSON value")
    }
}

impl Validator for Configuration {
    fn validate(&self) -> Result<(), SemanticValidationError> {
        if self.http_api.access_tokens.is_empty() {
            return Err(SemanticValidationError::MissingAccessToken);
        }

        if let Some((label, _)) = self.http_api.access_tokens.iter().find(|(_, token)| token.is_empty()) {
            return Err(SemanticValidationError::EmptyAccessToken { label: label.clone() });
        }

        if self.session.max_attempts == 0 {
            return Err(SemanticValidationError::NoSessionAttempts);
        }

        for (option, minutes) in [
            ("default_duration", self.climate.default_duration),
            ("fallback_duration", self.climate.fallback_duration),
        ] {
            if !DURATION_RANGE.contains(&minutes) {
                return Err(SemanticValidationError::ClimateDurationOutOfRange { option, minutes });
            }
        }

        let unit = self.vehicle_cloud.temperature_unit;

        for (option, value) in [
            ("default_temperature", self.climate.default_temperature),
            ("heating_temperature", self.climate.heating_temperature),
        ] {
            if !unit.setpoint_range().contains(&value) {
                return Err(SemanticValidationError::ClimateTemperatureOutOfRange { option, value, unit });
            }
        }

        if self.trunk.pulses == 0 {
            return Err(SemanticValidationError::NoTrunkPulses);
        }

        Ok(())
    }
}
