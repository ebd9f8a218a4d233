use serde::{Deserialize, Serialize};
use vehicle_control_primitives::temperature::TemperatureUnit;

/// The implementation used to talk to the vehicle cloud.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum Driver {
    /// An in-memory cloud with a demo fleet. It does not leave the process.
    #[default]
    Simulated,
}

impl Driver {
    /// Drivers that never contact a real vehicle.
    #[must_use]
    pub fn is_in_memory(self) -> bool {
        match self {
            Driver::Simulated => true,
        }
    }
}

/// Vehicle cloud account and client options.
///
/// Credentials are optional here. The session gate checks them when the
/// first session is opened and reports every missing one at once.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct VehicleCloud {
    #[serde(default = "VehicleCloud::default_driver")]
    pub driver: Driver,

    /// Owner account identity (usually the e-mail address).
    #[serde(default)]
    pub username: Option<String>,

    /// Owner account password.
    #[serde(default)]
    pub password: Option<String>,

    /// Owner PIN, required by the cloud for remote commands.
    #[serde(default)]
    pub pin: Option<String>,

    /// The vehicle commands are sent to. The first vehicle on the account is
    /// used when it is not set.
    #[serde(default)]
    pub vehicle_id: Option<String>,

    /// Region name, for example `north_america`, `canada` or `europe`.
    #[serde(default = "VehicleCloud::default_region")]
    pub region: String,

    /// Brand name: `kia`, `hyundai` or `genesis`.
    #[serde(default = "VehicleCloud::default_brand")]
    pub brand: String,

    /// Numeric region code. When set together with `brand_code` it is tried
    /// before the names.
    #[serde(default)]
    pub region_code: Option<u8>,

    /// Numeric brand code. See `region_code`.
    #[serde(default)]
    pub brand_code: Option<u8>,

    /// Unit of the temperatures sent in climate requests.
    #[serde(default)]
    pub temperature_unit: TemperatureUnit,
}

impl Default for VehicleCloud {
    fn default() -> Self {
        Self {
            driver: Self::default_driver(),
            username: None,
            password: None,
            pin: None,
            vehicle_id: None,
            region: Self::default_region(),
            brand: Self::default_brand(),
            region_code: None,
            brand_code: None,
            temperature_unit: TemperatureUnit::default(),
        }
    }
}

impl VehicleCloud {
    fn default_driver() -> Driver {
        Driver::Simulated
    }

    fn default_region() -> String {
        String::from("north_america")
    }

    fn default_brand() -> String {
        String::from("kia")
    }

    /// Names of the required credentials that are missing or empty, in
    /// declaration order.
    #[must_use]
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        [
            ("username", &self.username),
            ("password", &self.password),
            ("pin", &self.pin),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().map_or(true, str::is_empty))
        .map(|(name, _)| name)
        .collect()
    }

    pub fn mask_secrets(&mut self) {
        if self.password.is_some() {
            self.password = Some("***".to_string());
        }
        if self.pin.is_some() {
            self.pin = Some("***".to_string());
        }
    }
}
