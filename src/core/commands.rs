//! The command executor.
//!
//! Every command runs on a ready [`SessionHandle`] and starts by refreshing
//! the token and the state of the vehicles. Then:
//!
//! Command | Preconditions | Retries
//! ---|---|---
//! `status` | none | none
//! `lock` / `unlock` | none | none
//! `start_climate` | safety checks (unless forced) | one conservative fallback
//! `stop_climate` | none | none
//! `open_trunk` | none | none, `trunk.pulses` unlocks
//!
//! # Remote climate start
//!
//! 1. The requested temperature must be a valid setpoint.
//! 2. Unless the request is forced, the [preconditions](crate::core::preconditions)
//!    are checked. An unlocked vehicle is locked first (best effort, when
//!    `climate.auto_lock` is enabled) and its state is read again.
//! 3. The [`ClimatePlan`] is executed: the primary attempt with the requested
//!    options and, if the cloud rejects it, one fallback attempt with a
//!    shorter duration, no defrost and the same temperature.
use std::time::Duration;

use derive_more::Display;
use serde::Serialize;
use tracing::{info, warn};
use vehicle_control_configuration::{Climate, Trunk};
use vehicle_control_primitives::climate::{ClimateCommandRequest, ClimateOptions};
use vehicle_control_primitives::vehicle::{VehicleId, VehicleSnapshot};
use vehicle_control_primitives::CommandResult;

use super::cloud::CloudError;
use super::error::Error;
use super::preconditions;
use super::session::SessionHandle;

/// Remote commands.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    #[display("lock")]
    Lock,
    #[display("unlock")]
    Unlock,
    #[display("start climate")]
    StartClimate,
    #[display("stop climate")]
    StopClimate,
    #[display("trunk")]
    Trunk,
}

/// The two steps of a remote climate start.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Attempt {
    #[display("primary")]
    Primary,
    #[display("fallback")]
    Fallback,
}

/// The options sent in each attempt of a remote climate start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimatePlan {
    pub primary: ClimateOptions,
    pub fallback: ClimateOptions,
}

impl ClimatePlan {
    /// The fallback keeps the temperature, caps the duration to
    /// `fallback_duration` and turns off defrost and heating.
    #[must_use]
    pub fn new(request: &ClimateCommandRequest, heating: bool, fallback_duration: u8) -> Self {
        let primary = ClimateOptions {
            heating,
            ..ClimateOptions::from(request)
        };

        let fallback = ClimateOptions {
            duration: primary.duration.min(fallback_duration),
            defrost: false,
            temperature: primary.temperature,
            heating: false,
        };

        Self { primary, fallback }
    }
}

/// A remote climate start accepted by the cloud.
#[derive(Debug, Clone, PartialEq)]
pub struct ClimateStarted {
    pub vehicle_id: VehicleId,
    pub attempt: Attempt,
    pub options: ClimateOptions,
    pub result: CommandResult,
}

/// Runs the commands against a ready session.
#[derive(Debug, Clone)]
pub struct CommandExecutor {
    climate: Climate,
    trunk: Trunk,
}

impl CommandExecutor {
    #[must_use]
    pub fn new(climate: &Climate, trunk: &Trunk) -> Self {
        Self {
            climate: climate.clone(),
            trunk: trunk.clone(),
        }
    }

    async fn refresh(handle: &SessionHandle) -> Result<(), Error> {
        handle.refresh().await.map_err(|source| Error::Refresh { source })
    }

    async fn resolve(handle: &SessionHandle, vehicle_id: &VehicleId) -> Result<VehicleSnapshot, Error> {
        handle.vehicle(vehicle_id).await.ok_or_else(|| Error::VehicleNotFound {
            vehicle_id: vehicle_id.clone(),
        })
    }

    /// The last-known state of a vehicle, the default one if `vehicle_id` is
    /// `None`.
    ///
    /// # Errors
    ///
    /// Will return an error if the state can not be refreshed or the vehicle
    /// is not in the account.
    pub async fn get_status(&self, handle: &SessionHandle, vehicle_id: Option<&VehicleId>) -> Result<VehicleSnapshot, Error> {
        Self::refresh(handle).await?;

        Self::resolve(handle, vehicle_id.unwrap_or(handle.default_vehicle_id())).await
    }

    /// The last-known state of every vehicle in the account.
    ///
    /// # Errors
    ///
    /// Will return an error if the state can not be refreshed.
    pub async fn vehicles(&self, handle: &SessionHandle) -> Result<Vec<VehicleSnapshot>, Error> {
        Self::refresh(handle).await?;

        Ok(handle.vehicles().await)
    }

    /// # Errors
    ///
    /// Will return an error if the state can not be refreshed or the cloud
    /// does not lock the vehicle.
    pub async fn lock(&self, handle: &SessionHandle) -> Result<CommandResult, Error> {
        Self::refresh(handle).await?;

        let vehicle_id = handle.default_vehicle_id();

        info!(%vehicle_id, command = %Command::Lock, "sending command");

        handle
            .session()
            .lock(vehicle_id)
            .await
            .map_err(|source| Error::CommandFailed {
                command: Command::Lock,
                source,
            })
    }

    /// # Errors
    ///
    /// Will return an error if the state can not be refreshed or the cloud
    /// does not unlock the vehicle.
    pub async fn unlock(&self, handle: &SessionHandle) -> Result<CommandResult, Error> {
        Self::refresh(handle).await?;

        let vehicle_id = handle.default_vehicle_id();

        info!(%vehicle_id, command = %Command::Unlock, "sending command");

        handle
            .session()
            .unlock(vehicle_id)
            .await
            .map_err(|source| Error::CommandFailed {
                command: Command::Unlock,
                source,
            })
    }

    /// It starts the climate control of the default vehicle.
    ///
    /// `heating` also turns on the heated steering wheel and rear window in
    /// the primary attempt.
    ///
    /// # Errors
    ///
    /// Will return an error if:
    ///
    /// - The temperature is not a valid setpoint.
    /// - The state can not be refreshed or the vehicle is not in the account.
    /// - The vehicle is not in a safe state and the request is not forced.
    /// - Both the primary and the fallback attempts fail.
    pub async fn start_climate(
        &self,
        handle: &SessionHandle,
        request: ClimateCommandRequest,
        heating: bool,
    ) -> Result<ClimateStarted, Error> {
        request
            .temperature
            .as_setpoint()
            .map_err(|source| Error::InvalidTemperature { source })?;

        Self::refresh(handle).await?;

        let vehicle_id = handle.default_vehicle_id().clone();

        let snapshot = Self::resolve(handle, &vehicle_id).await?;

        if request.force {
            info!(%vehicle_id, "forced remote start, skipping the safety checks");
        } else {
            self.check_preconditions(handle, snapshot).await?;
        }

        self.execute(handle, &vehicle_id, &request, &ClimatePlan::new(&request, heating, self.climate.fallback_duration))
            .await
    }

    async fn check_preconditions(&self, handle: &SessionHandle, mut snapshot: VehicleSnapshot) -> Result<(), Error> {
        if snapshot.locked == Some(false) && self.climate.auto_lock {
            info!(vehicle_id = %snapshot.id, "vehicle is unlocked, locking it before the remote start");

            if let Err(error) = handle.session().lock(&snapshot.id).await {
                warn!(vehicle_id = %snapshot.id, %error, "could not lock the vehicle");
            }

            Self::refresh_state(handle).await?;

            snapshot = Self::resolve(handle, &snapshot.id).await?;
        }

        let violations = preconditions::evaluate(&snapshot);

        if violations.is_empty() {
            return Ok(());
        }

        warn!(
            vehicle_id = %snapshot.id,
            violations = %preconditions::Violation::describe_all(&violations),
            "remote start blocked"
        );

        Err(Error::PreconditionFailed {
            violations,
            snapshot: Box::new(snapshot),
        })
    }

    async fn refresh_state(handle: &SessionHandle) -> Result<(), Error> {
        handle
            .refresh_vehicle_state()
            .await
            .map_err(|source| Error::Refresh { source })
    }

    async fn execute(
        &self,
        handle: &SessionHandle,
        vehicle_id: &VehicleId,
        request: &ClimateCommandRequest,
        plan: &ClimatePlan,
    ) -> Result<ClimateStarted, Error> {
        let primary = match Self::attempt(handle, vehicle_id, Attempt::Primary, plan.primary).await {
            Ok(started) => return Ok(started),
            Err(error) => error,
        };

        let fallback = match Self::attempt(handle, vehicle_id, Attempt::Fallback, plan.fallback).await {
            Ok(started) => return Ok(started),
            Err(error) => error,
        };

        Err(Error::ClimateRejected {
            request: *request,
            primary,
            fallback,
        })
    }

    async fn attempt(
        handle: &SessionHandle,
        vehicle_id: &VehicleId,
        attempt: Attempt,
        options: ClimateOptions,
    ) -> Result<ClimateStarted, CloudError> {
        info!(
            %vehicle_id,
            command = %Command::StartClimate,
            %attempt,
            duration = options.duration,
            defrost = options.defrost,
            temperature = %options.temperature,
            "starting climate"
        );

        match handle.session().start_climate(vehicle_id, options).await {
            Ok(result) => {
                info!(%vehicle_id, %attempt, "climate started");
                Ok(ClimateStarted {
                    vehicle_id: vehicle_id.clone(),
                    attempt,
                    options,
                    result,
                })
            }
            Err(error) => {
                warn!(%vehicle_id, %attempt, %error, "climate start failed");
                Err(error)
            }
        }
    }

    /// # Errors
    ///
    /// Will return an error if the state can not be refreshed or the cloud
    /// does not stop the climate control.
    pub async fn stop_climate(&self, handle: &SessionHandle) -> Result<CommandResult, Error> {
        Self::refresh(handle).await?;

        let vehicle_id = handle.default_vehicle_id();

        info!(%vehicle_id, command = %Command::StopClimate, "sending command");

        handle
            .session()
            .stop_climate(vehicle_id)
            .await
            .map_err(|source| Error::CommandFailed {
                command: Command::StopClimate,
                source,
            })
    }

    /// It opens an aftermarket trunk release wired to the unlock signal. The
    /// release is triggered by `trunk.pulses` unlock commands in a row.
    ///
    /// # Errors
    ///
    /// Will return an error if the state can not be refreshed or any of the
    /// unlock commands fails.
    pub async fn open_trunk(&self, handle: &SessionHandle) -> Result<Vec<CommandResult>, Error> {
        Self::refresh(handle).await?;

        let vehicle_id = handle.default_vehicle_id();

        let mut results = Vec::with_capacity(usize::from(self.trunk.pulses));

        for pulse in 1..=self.trunk.pulses {
            if pulse > 1 && self.trunk.pulse_interval > Duration::ZERO {
                tokio::time::sleep(self.trunk.pulse_interval).await;
            }

            info!(%vehicle_id, pulse, command = %Command::Trunk, "sending unlock pulse");

            let result = handle
                .session()
                .unlock(vehicle_id)
                .await
                .map_err(|source| Error::CommandFailed {
                    command: Command::Trunk,
                    source,
                })?;

            results.push(result);
        }

        Ok(results)
    }
}
