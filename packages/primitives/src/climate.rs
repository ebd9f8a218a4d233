//! Remote climate (pre-conditioning) parameters.
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::temperature::Temperature;

/// Durations, in minutes, a remote climate start can be requested for.
pub const DURATION_RANGE: RangeInclusive<u8> = 1..=30;

/// It clamps a requested duration into [`DURATION_RANGE`].
///
/// ```rust
/// use vehicle_control_primitives::climate::clamp_duration;
///
/// assert_eq!(clamp_duration(99), 30);
/// assert_eq!(clamp_duration(0), 1);
/// assert_eq!(clamp_duration(-5), 1);
/// assert_eq!(clamp_duration(15), 15);
/// ```
#[must_use]
pub fn clamp_duration(minutes: i64) -> u8 {
    let clamped = minutes.clamp(i64::from(*DURATION_RANGE.start()), i64::from(*DURATION_RANGE.end()));

    u8::try_from(clamped).unwrap_or(*DURATION_RANGE.end())
}

/// A request to start the climate control of a vehicle.
#[derive(Serialize, Copy, Clone, PartialEq, Debug)]
pub struct ClimateCommandRequest {
    /// Minutes, always inside [`DURATION_RANGE`].
    pub duration: u8,
    pub defrost: bool,
    pub temperature: Temperature,
    /// Skip the precondition check and send the command directly.
    pub force: bool,
}

impl ClimateCommandRequest {
    /// It builds a request clamping the duration into [`DURATION_RANGE`].
    #[must_use]
    pub fn new(duration: i64, defrost: bool, temperature: Temperature, force: bool) -> Self {
        Self {
            duration: clamp_duration(duration),
            defrost,
            temperature,
            force,
        }
    }
}

/// The options sent to the vehicle cloud to start the climate control.
#[derive(Serialize, Deserialize, Copy, Clone, PartialEq, Debug)]
pub struct ClimateOptions {
    pub duration: u8,
    pub defrost: bool,
    pub temperature: Temperature,
    /// Also turn on the heated steering wheel and rear window.
    pub heating: bool,
}

impl From<&ClimateCommandRequest> for ClimateOptions {
    fn from(request: &ClimateCommandRequest) -> Self {
        Self {
            duration: request.duration,
            defrost: request.defrost,
            temperature: request.temperature,
            heating: false,
        }
    }
}
