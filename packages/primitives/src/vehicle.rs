//! The last-known state of a vehicle.
//!
//! A [`VehicleSnapshot`] is the stable projection of whatever the vehicle
//! cloud reports for one vehicle. Cloud adapters fill it in; the core only
//! reads it. Most attributes are optional because clouds (and vehicle
//! models) do not report all of them.
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::temperature::Temperature;

/// The identifier the vehicle cloud uses for a vehicle on the account.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[serde(transparent)]
pub struct VehicleId(String);

impl VehicleId {
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self(id.to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for VehicleId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

/// Transmission position.
///
/// Positions the adapters do not recognize keep the cloud code in
/// [`Gear::Other`].
#[derive(Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gear {
    Park,
    Reverse,
    Neutral,
    Drive,
    Other(u8),
}

impl fmt::Display for Gear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gear::Park => f.write_str("P"),
            Gear::Reverse => f.write_str("R"),
            Gear::Neutral => f.write_str("N"),
            Gear::Drive => f.write_str("D"),
            Gear::Other(code) => write!(f, "gear code {code}"),
        }
    }
}

/// Open flags for the four doors. `None` when the cloud does not report it.
#[derive(Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Doors {
    pub front_left_open: Option<bool>,
    pub front_right_open: Option<bool>,
    pub rear_left_open: Option<bool>,
    pub rear_right_open: Option<bool>,
}

impl Doors {
    #[must_use]
    pub fn all_closed() -> Self {
        Self {
            front_left_open: Some(false),
            front_right_open: Some(false),
            rear_left_open: Some(false),
            rear_right_open: Some(false),
        }
    }

    /// `Some(true)` if any door is reported open, `Some(false)` if at least
    /// one door is reported and none is open, `None` if nothing is reported.
    #[must_use]
    pub fn any_open(&self) -> Option<bool> {
        let reported = [
            self.front_left_open,
            self.front_right_open,
            self.rear_left_open,
            self.rear_right_open,
        ];

        reported
            .into_iter()
            .flatten()
            .fold(None, |any, open| Some(any.unwrap_or(false) || open))
    }
}

/// Last-known state of one vehicle.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct VehicleSnapshot {
    pub id: VehicleId,
    /// Display name given to the vehicle in the owner account.
    pub name: String,
    /// Odometer in the distance unit configured in the account.
    pub odometer: Option<f64>,
    /// Fuel level in percent.
    pub fuel_level: Option<f64>,
    /// Traction battery level in percent (EV and PHEV only).
    pub battery_level: Option<f64>,
    /// Estimated driving range.
    pub driving_range: Option<f64>,
    pub engine_on: Option<bool>,
    pub charging: Option<bool>,
    pub locked: Option<bool>,
    pub ignition_on: Option<bool>,
    pub climate_on: Option<bool>,
    pub interior_temperature: Option<Temperature>,
    pub climate_set_temperature: Option<Temperature>,
    pub doors: Doors,
    pub hood_open: Option<bool>,
    /// Trunk or tailgate.
    pub trunk_open: Option<bool>,
    pub gear: Option<Gear>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl VehicleSnapshot {
    /// A snapshot with only the identity. Every state attribute is unknown.
    #[must_use]
    pub fn unknown(id: VehicleId, name: &str) -> Self {
        Self {
            id,
            name: name.to_owned(),
            odometer: None,
            fuel_level: None,
            battery_level: None,
            driving_range: None,
            engine_on: None,
            charging: None,
            locked: None,
            ignition_on: None,
            climate_on: None,
            interior_temperature: None,
            climate_set_temperature: None,
            doors: Doors::default(),
            hood_open: None,
            trunk_open: None,
            gear: None,
            updated_at: None,
        }
    }

    /// A parked vehicle: locked, everything closed, engine off, in Park.
    #[must_use]
    pub fn parked(id: VehicleId, name: &str) -> Self {
        Self {
            locked: Some(true),
            engine_on: Some(false),
            ignition_on: Some(false),
            climate_on: Some(false),
            doors: Doors::all_closed(),
            hood_open: Some(false),
            trunk_open: Some(false),
            gear: Some(Gear::Park),
            ..Self::unknown(id, name)
        }
    }

    #[must_use]
    pub fn any_door_open(&self) -> Option<bool> {
        self.doors.any_open()
    }
}
