use serde::{Deserialize, Serialize};

/// Defaults and safety options for remote climate starts.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct Climate {
    /// Minutes used when the request does not include a duration.
    #[serde(default = "Climate::default_duration")]
    pub default_duration: u8,

    /// Cabin setpoint used when the request does not include a temperature,
    /// in the configured temperature unit.
    #[serde(default = "Climate::default_temperature")]
    pub default_temperature: f64,

    /// Cabin setpoint used by the heating preset.
    #[serde(default = "Climate::default_heating_temperature")]
    pub heating_temperature: f64,

    /// Maximum duration of the conservative attempt sent when the cloud
    /// rejects the requested parameters.
    #[serde(default = "Climate::default_fallback_duration")]
    pub fallback_duration: u8,

    /// Send a lock command when the vehicle is found unlocked before a
    /// remote start.
    #[serde(default = "Climate::default_auto_lock")]
    pub auto_lock: bool,
}

impl Default for Climate {
    fn default() -> Self {
        Self {
            default_duration: Self::default_duration(),
            default_temperature: Self::default_temperature(),
            heating_temperature: Self::default_heating_temperature(),
            fallback_duration: Self::default_fallback_duration(),
            auto_lock: Self::default_auto_lock(),
        }
    }
}

impl Climate {
    fn default_duration() -> u8 {
        10
    }

    fn default_temperature() -> f64 {
        62.0
    }

    fn default_heating_temperature() -> f64 {
        80.0
    }

    fn default_fallback_duration() -> u8 {
        5
    }

    fn default_auto_lock() -> bool {
        true
    }
}
