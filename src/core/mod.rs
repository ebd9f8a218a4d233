//! The core of the vehicle control service. It is independent of the delivery
//! layer (the HTTP API).
//!
//! ```text
//! Delivery layer     Domain layer
//!
//!                    Controller
//! HTTP API        |>   SessionGate      --> cloud::Connector --> cloud::Session
//!                      CommandExecutor  --> cloud::Session
//! ```
//!
//! # Controller
//!
//! The [`Controller`] is built once by the application bootstrap and shared
//! by all the request handlers. Every operation asks the [`SessionGate`] for a
//! ready session and then runs the command with the [`CommandExecutor`]:
//!
//! Operation | Command
//! ---|---
//! [`status`](Controller::status) | Last-known state of one vehicle
//! [`vehicles`](Controller::vehicles) | Last-known state of every vehicle in the account
//! [`lock`](Controller::lock) / [`unlock`](Controller::unlock) | Door lock commands
//! [`start_climate`](Controller::start_climate) | Remote start with safety checks and fallback
//! [`start_heating`](Controller::start_heating) | Remote start preset at the heating temperature
//! [`stop_climate`](Controller::stop_climate) | Stops the climate control
//! [`open_trunk`](Controller::open_trunk) | Aftermarket trunk release
//! [`readiness`](Controller::readiness) | Initializes the session if needed and reports it
//! [`reinitialize`](Controller::reinitialize) | Discards the session and opens a new one
//!
//! # Session
//!
//! The session is opened lazily by the [`session`] gate, unless the
//! `session.warm_up` option is enabled. Refer to the [`session`] module for the
//! initialization and retry policy.
//!
//! # Vehicle cloud
//!
//! The core talks to the vehicle cloud through the traits in the [`cloud`]
//! module. See [`cloud::simulated`] for the in-memory cloud.
pub mod cloud;
pub mod commands;
pub mod error;
pub mod preconditions;
pub mod session;

use std::sync::Arc;

use vehicle_control_configuration::{Climate, Configuration};
use vehicle_control_primitives::climate::ClimateCommandRequest;
use vehicle_control_primitives::temperature::{Temperature, TemperatureUnit};
use vehicle_control_primitives::vehicle::{VehicleId, VehicleSnapshot};
use vehicle_control_primitives::CommandResult;

use self::cloud::Connector;
use self::commands::{ClimateStarted, CommandExecutor};
use self::error::Error;
use self::session::{Readiness, SessionGate, SessionHandle};

/// Optional parameters of a remote climate start. Missing values are taken
/// from the `climate` configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClimateParameters {
    /// Minutes. It is clamped to the accepted range.
    pub duration: Option<i64>,
    pub defrost: Option<bool>,
    pub temperature: Option<f64>,
    /// Unit of `temperature`. The configured unit is used when it is not set.
    pub unit: Option<TemperatureUnit>,
    pub force: Option<bool>,
}

/// The vehicle controller. It owns the session gate and runs the commands.
pub struct Controller {
    gate: SessionGate,
    executor: CommandExecutor,
    climate: Climate,
    temperature_unit: TemperatureUnit,
}

impl Controller {
    #[must_use]
    pub fn new(config: &Configuration, connector: Arc<dyn Connector>) -> Self {
        Self {
            gate: SessionGate::new(connector, &config.vehicle_cloud, &config.session),
            executor: CommandExecutor::new(&config.climate, &config.trunk),
            climate: config.climate.clone(),
            temperature_unit: config.vehicle_cloud.temperature_unit,
        }
    }

    async fn ready(&self) -> Result<Arc<SessionHandle>, Error> {
        self.gate
            .ensure_ready()
            .await
            .into_result()
            .map_err(|source| Error::NotReady { source })
    }

    /// A request that is not valid by itself is rejected before the session
    /// is opened.
    fn validated(request: ClimateCommandRequest) -> Result<ClimateCommandRequest, Error> {
        request
            .temperature
            .as_setpoint()
            .map_err(|source| Error::InvalidTemperature { source })?;

        Ok(request)
    }

    /// It builds the climate request applying the configured defaults.
    #[must_use]
    pub fn climate_request(&self, parameters: &ClimateParameters) -> ClimateCommandRequest {
        let temperature = match parameters.temperature {
            Some(value) => Temperature::new(value, parameters.unit.unwrap_or(self.temperature_unit)),
            None => Temperature::new(self.climate.default_temperature, self.temperature_unit),
        };

        ClimateCommandRequest::new(
            parameters.duration.unwrap_or(i64::from(self.climate.default_duration)),
            parameters.defrost.unwrap_or(false),
            temperature,
            parameters.force.unwrap_or(false),
        )
    }

    /// The last-known state of a vehicle. The default vehicle if `vehicle_id`
    /// is `None`.
    ///
    /// # Errors
    ///
    /// Will return an error if the session is not ready, the state can not be
    /// refreshed or the vehicle is not in the account.
    pub async fn status(&self, vehicle_id: Option<&VehicleId>) -> Result<VehicleSnapshot, Error> {
        let handle = self.ready().await?;

        self.executor.get_status(&handle, vehicle_id).await
    }

    /// # Errors
    ///
    /// Will return an error if the session is not ready or the state can not
    /// be refreshed.
    pub async fn vehicles(&self) -> Result<Vec<VehicleSnapshot>, Error> {
        let handle = self.ready().await?;

        self.executor.vehicles(&handle).await
    }

    /// # Errors
    ///
    /// Will return an error if the session is not ready or the command fails.
    pub async fn lock(&self) -> Result<CommandResult, Error> {
        let handle = self.ready().await?;

        self.executor.lock(&handle).await
    }

    /// # Errors
    ///
    /// Will return an error if the session is not ready or the command fails.
    pub async fn unlock(&self) -> Result<CommandResult, Error> {
        let handle = self.ready().await?;

        self.executor.unlock(&handle).await
    }

    /// # Errors
    ///
    /// Will return an error if the session is not ready, the temperature is
    /// not valid, the vehicle is not in a safe state or the cloud rejects
    /// both attempts.
    pub async fn start_climate(&self, parameters: &ClimateParameters) -> Result<ClimateStarted, Error> {
        let request = Self::validated(self.climate_request(parameters))?;

        let handle = self.ready().await?;

        self.executor.start_climate(&handle, request, false).await
    }

    /// Remote start at the configured heating temperature.
    ///
    /// # Errors
    ///
    /// See [`Controller::start_climate`].
    pub async fn start_heating(&self) -> Result<ClimateStarted, Error> {
        let request = Self::validated(self.climate_request(&ClimateParameters {
            temperature: Some(self.climate.heating_temperature),
            ..ClimateParameters::default()
        }))?;

        let handle = self.ready().await?;

        self.executor.start_climate(&handle, request, true).await
    }

    /// # Errors
    ///
    /// Will return an error if the session is not ready or the command fails.
    pub async fn stop_climate(&self) -> Result<CommandResult, Error> {
        let handle = self.ready().await?;

        self.executor.stop_climate(&handle).await
    }

    /// # Errors
    ///
    /// Will return an error if the session is not ready or any unlock pulse
    /// fails.
    pub async fn open_trunk(&self) -> Result<Vec<CommandResult>, Error> {
        let handle = self.ready().await?;

        self.executor.open_trunk(&handle).await
    }

    /// It initializes the session if needed.
    pub async fn readiness(&self) -> Readiness {
        self.gate.ensure_ready().await
    }

    /// It discards the session and opens a new one.
    pub async fn reinitialize(&self) -> Readiness {
        self.gate.force_reinitialize().await
    }
}
