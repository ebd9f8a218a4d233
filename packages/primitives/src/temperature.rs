//! Temperatures reported by the vehicle and requested for the cabin.
use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The unit a temperature value is expressed in.
#[derive(Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Debug, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Fahrenheit,
    Celsius,
}

impl TemperatureUnit {
    /// Setpoints accepted by the climate control for this unit.
    ///
    /// The cabin heater/AC cannot be asked for values outside of this range,
    /// the cloud shows them as `LO` and `HI` in the vehicle head unit.
    #[must_use]
    pub fn setpoint_range(self) -> RangeInclusive<f64> {
        match self {
            TemperatureUnit::Fahrenheit => 62.0..=82.0,
            TemperatureUnit::Celsius => 17.0..=28.0,
        }
    }

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Celsius => "°C",
        }
    }
}

/// A unit-tagged temperature.
#[derive(Serialize, Deserialize, Copy, Clone, PartialEq, Debug)]
pub struct Temperature {
    pub value: f64,
    pub unit: TemperatureUnit,
}

/// Error returned when a temperature can not be used as a cabin setpoint.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SetpointError {
    #[error("temperature {value} is not a number")]
    NotANumber { value: f64 },

    #[error("temperature {value}{} is outside the accepted range {}..={}{}", .unit.symbol(), .range.start(), .range.end(), .unit.symbol())]
    OutOfRange {
        value: f64,
        unit: TemperatureUnit,
        range: RangeInclusive<f64>,
    },
}

impl Temperature {
    #[must_use]
    pub fn new(value: f64, unit: TemperatureUnit) -> Self {
        Self { value, unit }
    }

    #[must_use]
    pub fn fahrenheit(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Fahrenheit)
    }

    #[must_use]
    pub fn celsius(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Celsius)
    }

    /// It returns the temperature if it can be requested as a cabin setpoint.
    ///
    /// # Errors
    ///
    /// Will return an error if the value is not finite or it is out of the
    /// [`TemperatureUnit::setpoint_range`] of its unit.
    pub fn as_setpoint(self) -> Result<Self, SetpointError> {
        if !self.value.is_finite() {
            return Err(SetpointError::NotANumber { value: self.value });
        }

        let range = self.unit.setpoint_range();

        if range.contains(&self.value) {
            Ok(self)
        } else {
            Err(SetpointError::OutOfRange {
                value: self.value,
                unit: self.unit,
                range,
            })
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.symbol())
    }
}
