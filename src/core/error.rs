//! Errors returned by the core.
//!
//! Error | Context | Description
//! ---|---|---
//! `MissingCredentials` | Initialization | Some of the owner account credentials are not configured. Terminal.
//! `NoVehicles` | Initialization | The account does not have any vehicle. Terminal.
//! `Unreachable` | Initialization | Every attempt to open a session failed (authentication or network).
//! `NotReady` | Command | The session could not be initialized. It wraps the initialization error.
//! `Refresh` | Command | The token or the vehicle state could not be refreshed before a command.
//! `VehicleNotFound` | Command | The vehicle is not registered in the account.
//! `InvalidTemperature` | Command | The requested cabin temperature is not a valid setpoint.
//! `PreconditionFailed` | Climate | The vehicle is not in a safe state for a remote start.
//! `CommandFailed` | Command | The cloud did not execute the command.
//! `ClimateRejected` | Climate | Both the primary and the fallback remote start failed.
use vehicle_control_primitives::climate::ClimateCommandRequest;
use vehicle_control_primitives::region::Selector;
use vehicle_control_primitives::temperature::SetpointError;
use vehicle_control_primitives::vehicle::{VehicleId, VehicleSnapshot};

use super::cloud::CloudError;
use super::commands::Command;
use super::preconditions::Violation;

/// Why the session gate could not produce a session.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InitializationError {
    #[error("missing vehicle cloud credentials: {}", .fields.join(", "))]
    MissingCredentials { fields: Vec<&'static str> },

    #[error("the account has no vehicles ({selector})")]
    NoVehicles { selector: Selector },

    #[error("could not open a vehicle cloud session after {attempts} attempt(s), last tried {selector}: {source}")]
    Unreachable {
        attempts: u32,
        selector: Selector,
        source: CloudError,
    },
}

impl InitializationError {
    /// Terminal errors can not be fixed by trying again. They are returned
    /// from the cache until the session is reinitialized.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        match self {
            InitializationError::MissingCredentials { .. } | InitializationError::NoVehicles { .. } => true,
            InitializationError::Unreachable { .. } => false,
        }
    }
}

/// Errors returned by the [`Controller`](crate::core::Controller) operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("vehicle session is not ready: {source}")]
    NotReady { source: InitializationError },

    #[error("could not refresh the vehicle state: {source}")]
    Refresh { source: CloudError },

    #[error("vehicle {vehicle_id} not found")]
    VehicleNotFound { vehicle_id: VehicleId },

    #[error("invalid temperature: {source}")]
    InvalidTemperature { source: SetpointError },

    #[error("climate preconditions not met: {}", Violation::describe_all(.violations))]
    PreconditionFailed {
        violations: Vec<Violation>,
        snapshot: Box<VehicleSnapshot>,
    },

    #[error("{command} command failed: {source}")]
    CommandFailed { command: Command, source: CloudError },

    #[error("climate start failed: primary attempt: {primary}; fallback attempt: {fallback}")]
    ClimateRejected {
        request: ClimateCommandRequest,
        primary: CloudError,
        fallback: CloudError,
    },
}
