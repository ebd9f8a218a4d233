use serde::{Deserialize, Serialize};
use vehicle_control_primitives::temperature::TemperatureUnit;

use crate::core::ClimateParameters;

/// Body of the remote climate start request.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct ClimateForm {
    /// Minutes. Any JSON number is accepted and clamped later, including
    /// floats and integers that do not fit in 64 bits.
    pub duration: Option<f64>,
    pub defrost: Option<bool>,
    pub temperature: Option<f64>,
    pub unit: Option<TemperatureUnit>,
    pub force: Option<bool>,
}

impl ClimateForm {
    /// It parses the raw body. An empty body, or `null`, is a form without
    /// any attribute.
    ///
    /// # Errors
    ///
    /// Will return an error if the body is not a valid JSON form.
    pub fn parse(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let form: Option<Self> = serde_json::from_slice(body)?;

        Ok(form.unwrap_or_default())
    }
}

impl From<ClimateForm> for ClimateParameters {
    fn from(form: ClimateForm) -> Self {
        ClimateParameters {
            duration: form.duration.map(whole_minutes),
            defrost: form.defrost,
            temperature: form.temperature,
            unit: form.unit,
            force: form.force,
        }
    }
}

/// The `as` cast saturates at the `i64` bounds.
#[allow(clippy::cast_possible_truncation)]
fn whole_minutes(minutes: f64) -> i64 {
    minutes.round() as i64
}
