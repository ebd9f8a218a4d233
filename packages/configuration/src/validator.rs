//! Trait to validate semantic errors.
//!
//! Errors could involve more than one configuration option. Some configuration
//! combinations can be incompatible.
use thiserror::Error;
use vehicle_control_primitives::temperature::TemperatureUnit;

/// Errors that can occur validating the configuration.
#[derive(Error, Debug, PartialEq)]
pub enum SemanticValidationError {
    #[error("At least one non-empty access token is required in the `http_api.access_tokens` section (or the `SECRET_KEY` env var).")]
    MissingAccessToken,

    #[error("The access token `{label}` is empty.")]
    EmptyAccessToken { label: String },

    #[error("`session.max_attempts` must be at least 1.")]
    NoSessionAttempts,

    #[error("`climate.{option}` must be between 1 and 30 minutes, got {minutes}.")]
    ClimateDurationOutOfRange { option: &'static str, minutes: u8 },

    #[error("`climate.{option}` must be a valid setpoint in {unit:?}, got {value}.")]
    ClimateTemperatureOutOfRange {
        option: &'static str,
        value: f64,
        unit: TemperatureUnit,
    },

    #[error("`trunk.pulses` must be at least 1.")]
    NoTrunkPulses,
}

pub trait Validator {
    /// # Errors
    ///
    /// Will return an error if the configuration is invalid.
    fn validate(&self) -> Result<(), SemanticValidationError>;
}
