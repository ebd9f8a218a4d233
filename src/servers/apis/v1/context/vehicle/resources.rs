//! API resources for the [`vehicle`](crate::servers::apis::v1::context::vehicle)
//! API context.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vehicle_control_primitives::temperature::Temperature;
use vehicle_control_primitives::vehicle::{Doors, Gear, VehicleSnapshot};

/// The last-known state of a vehicle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Vehicle {
    /// The vehicle id. Usually the VIN.
    pub id: String,
    pub name: String,
    pub odometer: Option<f64>,
    /// Percent.
    pub fuel_level: Option<f64>,
    /// Percent. Only for electric and plug-in hybrid vehicles.
    pub battery_level: Option<f64>,
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
    pub trunk_open: Option<bool>,
    pub gear: Option<Gear>,
    /// When the vehicle last reported its state to the cloud.
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<VehicleSnapshot> for Vehicle {
    fn from(snapshot: VehicleSnapshot) -> Self {
        Vehicle {
            id: snapshot.id.to_string(),
            name: snapshot.name,
            odometer: snapshot.odometer,
            fuel_level: snapshot.fuel_level,
            battery_level: snapshot.battery_level,
            driving_range: snapshot.driving_range,
            engine_on: snapshot.engine_on,
            charging: snapshot.charging,
            locked: snapshot.locked,
            ignition_on: snapshot.ignition_on,
            climate_on: snapshot.climate_on,
            interior_temperature: snapshot.interior_temperature,
            climate_set_temperature: snapshot.climate_set_temperature,
            doors: snapshot.doors,
            hood_open: snapshot.hood_open,
            trunk_open: snapshot.trunk_open,
            gear: snapshot.gear,
            updated_at: snapshot.updated_at,
        }
    }
}

/// The vehicle status returned by the `/vehicle_status` endpoint of the
/// first version of the service.
///
/// Temperatures are plain numbers in the unit configured for the vehicle
/// cloud.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LegacyStatus {
    pub locked: Option<bool>,
    pub engine_on: Option<bool>,
    pub fuel_level: Option<f64>,
    pub interior_temperature: Option<f64>,
    pub ac_set_temperature: Option<f64>,
    pub range_miles: Option<f64>,
    pub odometer: Option<f64>,
    pub climate_on: Option<bool>,
}

impl From<&VehicleSnapshot> for LegacyStatus {
    fn from(snapshot: &VehicleSnapshot) -> Self {
        LegacyStatus {
            locked: snapshot.locked,
            engine_on: snapshot.engine_on,
            fuel_level: snapshot.fuel_level.or(snapshot.battery_level),
            interior_temperature: snapshot.interior_temperature.map(|temperature| temperature.value),
            ac_set_temperature: snapshot.climate_set_temperature.map(|temperature| temperature.value),
            range_miles: snapshot.driving_range,
            odometer: snapshot.odometer,
            climate_on: snapshot.climate_on,
        }
    }
}
