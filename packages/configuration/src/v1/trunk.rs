use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationMilliSeconds};

/// Aftermarket trunk release.
///
/// Some aftermarket trunk actuators are wired to the door lock circuit and
/// open after a burst of unlock commands.
#[serde_as]
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Trunk {
    /// Number of unlock commands sent.
    #[serde(default = "Trunk::default_pulses")]
    pub pulses: u8,

    /// Pause between two unlock commands, in milliseconds.
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(default = "Trunk::default_pulse_interval")]
    pub pulse_interval: Duration,
}

impl Default for Trunk {
    fn default() -> Self {
        Self {
            pulses: Self::default_pulses(),
            pulse_interval: Self::default_pulse_interval(),
        }
    }
}

impl Trunk {
    fn default_pulses() -> u8 {
        3
    }

    fn default_pulse_interval() -> Duration {
        Duration::from_millis(1000)
    }
}
