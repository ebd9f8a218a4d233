//! An in-memory vehicle cloud.
//!
//! The simulated cloud keeps a fleet of vehicles for one owner account. The
//! account lives in a "home" region and brand: sessions opened with any other
//! selector fail to authenticate, like they do against the real clouds.
//!
//! Commands change the state of the simulated vehicles (locking a vehicle
//! sets `locked`, starting the climate sets `climate_on`, ...), so the next
//! state refresh sees the change.
//!
//! Tests can script the cloud behavior:
//!
//! - [`SimulatedCloud::fail_next_authentications`]: the next `n` token
//!   refreshes fail.
//! - [`SimulatedCloud::set_max_climate_duration`] and
//!   [`SimulatedCloud::set_defrost_supported`]: the accepted range of the
//!   remote start. Requests outside of it are rejected.
//! - [`SimulatedCloud::reject_locks`]: lock commands are rejected.
//! - [`SimulatedCloud::set_vehicle`]: changes the state of a vehicle.
//!
//! Every remote call is counted. See [`SimulatedCloud::calls`].
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;
use vehicle_control_primitives::climate::ClimateOptions;
use vehicle_control_primitives::region::{Brand, Region, Selector};
use vehicle_control_primitives::temperature::Temperature;
use vehicle_control_primitives::vehicle::{VehicleId, VehicleSnapshot};
use vehicle_control_primitives::CommandResult;

use super::selector::Catalogue;
use super::{CloudError, Connector, Credentials, Session};

/// The first vehicle of the demo fleet.
pub const DEMO_VEHICLE_ID: &str = "KNDJ23AU4N7000001";
pub const DEMO_VEHICLE_NAME: &str = "My EV9";

/// The second vehicle of the demo fleet.
pub const SECOND_DEMO_VEHICLE_ID: &str = "KNAGM4AD0P5000002";
pub const SECOND_DEMO_VEHICLE_NAME: &str = "K5";

/// Number of remote calls received by the simulated cloud.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Calls {
    pub connects: u32,
    pub authentications: u32,
    pub state_refreshes: u32,
    pub locks: u32,
    pub unlocks: u32,
    pub climate_starts: u32,
    pub climate_stops: u32,
}

#[derive(Debug, Default)]
struct Counters {
    connects: AtomicU32,
    authentications: AtomicU32,
    state_refreshes: AtomicU32,
    locks: AtomicU32,
    unlocks: AtomicU32,
    climate_starts: AtomicU32,
    climate_stops: AtomicU32,
}

impl Counters {
    fn increase(counter: &AtomicU32) {
        counter.fetch_add(1, Ordering::SeqCst);
    }

    fn snapshot(&self) -> Calls {
        Calls {
            connects: self.connects.load(Ordering::SeqCst),
            authentications: self.authentications.load(Ordering::SeqCst),
            state_refreshes: self.state_refreshes.load(Ordering::SeqCst),
            locks: self.locks.load(Ordering::SeqCst),
            unlocks: self.unlocks.load(Ordering::SeqCst),
            climate_starts: self.climate_starts.load(Ordering::SeqCst),
            climate_stops: self.climate_stops.load(Ordering::SeqCst),
        }
    }
}

#[derive(Debug)]
struct Fleet {
    home: Selector,
    vehicles: Vec<VehicleSnapshot>,
    pending_authentication_failures: u32,
    max_climate_duration: Option<u8>,
    defrost_supported: bool,
    reject_locks: bool,
}

impl Fleet {
    fn vehicle_mut(&mut self, vehicle_id: &VehicleId) -> Result<&mut VehicleSnapshot, CloudError> {
        self.vehicles
            .iter_mut()
            .find(|vehicle| &vehicle.id == vehicle_id)
            .ok_or_else(|| CloudError::Rejected {
                message: format!("vehicle {vehicle_id} is not registered in the account"),
            })
    }
}

/// The simulated vehicle cloud. It is the [`Connector`] of the `simulated`
/// driver.
#[derive(Debug, Clone)]
pub struct SimulatedCloud {
    fleet: Arc<RwLock<Fleet>>,
    counters: Arc<Counters>,
}

impl SimulatedCloud {
    /// A cloud with the given fleet. Sessions only authenticate with the
    /// `home` selector.
    #[must_use]
    pub fn new(home: Selector, vehicles: Vec<VehicleSnapshot>) -> Self {
        Self {
            fleet: Arc::new(RwLock::new(Fleet {
                home,
                vehicles,
                pending_authentication_failures: 0,
                max_climate_duration: None,
                defrost_supported: true,
                reject_locks: false,
            })),
            counters: Arc::new(Counters::default()),
        }
    }

    /// A North American Kia account with two parked vehicles.
    #[must_use]
    pub fn demo() -> Self {
        let mut ev9 = VehicleSnapshot::parked(VehicleId::new(DEMO_VEHICLE_ID), DEMO_VEHICLE_NAME);
        ev9.odometer = Some(12_480.0);
        ev9.battery_level = Some(78.0);
        ev9.driving_range = Some(231.0);
        ev9.charging = Some(false);
        ev9.interior_temperature = Some(Temperature::fahrenheit(58.0));
        ev9.updated_at = Some(Utc::now());

        let mut k5 = VehicleSnapshot::parked(VehicleId::new(SECOND_DEMO_VEHICLE_ID), SECOND_DEMO_VEHICLE_NAME);
        k5.odometer = Some(30_112.0);
        k5.fuel_level = Some(64.0);
        k5.driving_range = Some(312.0);
        k5.interior_temperature = Some(Temperature::fahrenheit(61.0));
        k5.updated_at = Some(Utc::now());

        Self::new(Selector::FALLBACK, vec![ev9, k5])
    }

    /// Number of remote calls received so far.
    #[must_use]
    pub fn calls(&self) -> Calls {
        self.counters.snapshot()
    }

    /// The next `count` token refreshes fail with an authentication error.
    pub async fn fail_next_authentications(&self, count: u32) {
        self.fleet.write().await.pending_authentication_failures = count;
    }

    /// Remote starts longer than `minutes` are rejected. `None` accepts any
    /// duration.
    pub async fn set_max_climate_duration(&self, minutes: Option<u8>) {
        self.fleet.write().await.max_climate_duration = minutes;
    }

    /// Remote starts with defrost are rejected when it is not supported.
    pub async fn set_defrost_supported(&self, supported: bool) {
        self.fleet.write().await.defrost_supported = supported;
    }

    /// Lock commands are rejected while it is set.
    pub async fn reject_locks(&self, reject: bool) {
        self.fleet.write().await.reject_locks = reject;
    }

    /// It adds the vehicle to the account, or replaces its state.
    pub async fn set_vehicle(&self, snapshot: VehicleSnapshot) {
        let mut fleet = self.fleet.write().await;

        match fleet.vehicles.iter_mut().find(|vehicle| vehicle.id == snapshot.id) {
            Some(vehicle) => *vehicle = snapshot,
            None => fleet.vehicles.push(snapshot),
        }
    }

    pub async fn vehicle(&self, vehicle_id: &VehicleId) -> Option<VehicleSnapshot> {
        self.fleet
            .read()
            .await
            .vehicles
            .iter()
            .find(|vehicle| &vehicle.id == vehicle_id)
            .cloned()
    }
}

impl Connector for SimulatedCloud {
    fn catalogues(&self) -> Vec<Catalogue> {
        vec![
            Catalogue::new(
                &[
                    (Region::EUROPE, "Europe"),
                    (Region::CANADA, "Canada"),
                    (Region::NORTH_AMERICA, "USA"),
                    (Region::CHINA, "China"),
                    (Region::AUSTRALIA, "Australia"),
                    (Region::INDIA, "India"),
                ],
                &[(Brand::KIA, "Kia"), (Brand::HYUNDAI, "Hyundai"), (Brand::GENESIS, "Genesis")],
            ),
            Catalogue::new(
                &[
                    (Region::EUROPE, "Europe"),
                    (Region::CANADA, "Canada"),
                    (Region::NORTH_AMERICA, "North America"),
                ],
                &[(Brand::KIA, "Kia"), (Brand::HYUNDAI, "Hyundai")],
            ),
        ]
    }

    fn connect(&self, credentials: &Credentials, selector: Selector) -> Result<Arc<dyn Session>, CloudError> {
        Counters::increase(&self.counters.connects);

        if !(Region::EUROPE.0..=Region::INDIA.0).contains(&selector.region.0) {
            return Err(CloudError::Rejected {
                message: format!("unsupported {selector}"),
            });
        }

        Ok(Arc::new(SimulatedSession {
            username: credentials.username.clone(),
            selector,
            authenticated: AtomicBool::new(false),
            fleet: self.fleet.clone(),
            counters: self.counters.clone(),
        }))
    }
}

/// A session of the simulated cloud.
#[derive(Debug)]
pub struct SimulatedSession {
    username: String,
    selector: Selector,
    authenticated: AtomicBool,
    fleet: Arc<RwLock<Fleet>>,
    counters: Arc<Counters>,
}

impl SimulatedSession {
    fn ensure_authenticated(&self) -> Result<(), CloudError> {
        if self.authenticated.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(CloudError::Authentication {
                message: "the session has no valid token".to_owned(),
            })
        }
    }

    fn accepted(command: &str, vehicle_id: &VehicleId) -> CommandResult {
        json!({
            "command": command,
            "vehicle_id": vehicle_id,
            "status": "accepted",
            "transaction_id": Uuid::new_v4().to_string(),
        })
    }
}

#[async_trait]
impl Session for SimulatedSession {
    async fn refresh_token(&self) -> Result<(), CloudError> {
        Counters::increase(&self.counters.authentications);

        let mut fleet = self.fleet.write().await;

        if fleet.pending_authentication_failures > 0 {
            fleet.pending_authentication_failures -= 1;
            return Err(CloudError::Authentication {
                message: "invalid username or password".to_owned(),
            });
        }

        if fleet.home != self.selector {
            return Err(CloudError::Authentication {
                message: format!("account {} not found in {}", self.username, self.selector),
            });
        }

        self.authenticated.store(true, Ordering::SeqCst);

        Ok(())
    }

    async fn refresh_all_vehicle_state(&self) -> Result<Vec<VehicleSnapshot>, CloudError> {
        Counters::increase(&self.counters.state_refreshes);
        self.ensure_authenticated()?;

        Ok(self.fleet.read().await.vehicles.clone())
    }

    async fn lock(&self, vehicle_id: &VehicleId) -> Result<CommandResult, CloudError> {
        Counters::increase(&self.counters.locks);
        self.ensure_authenticated()?;

        let mut fleet = self.fleet.write().await;

        if fleet.reject_locks {
            return Err(CloudError::Rejected {
                message: "the vehicle did not answer the lock command".to_owned(),
            });
        }

        let vehicle = fleet.vehicle_mut(vehicle_id)?;
        vehicle.locked = Some(true);
        vehicle.updated_at = Some(Utc::now());

        Ok(Self::accepted("lock", vehicle_id))
    }

    async fn unlock(&self, vehicle_id: &VehicleId) -> Result<CommandResult, CloudError> {
        Counters::increase(&self.counters.unlocks);
        self.ensure_authenticated()?;

        let mut fleet = self.fleet.write().await;

        let vehicle = fleet.vehicle_mut(vehicle_id)?;
        vehicle.locked = Some(false);
        vehicle.updated_at = Some(Utc::now());

        Ok(Self::accepted("unlock", vehicle_id))
    }

    async fn start_climate(&self, vehicle_id: &VehicleId, options: ClimateOptions) -> Result<CommandResult, CloudError> {
        Counters::increase(&self.counters.climate_starts);
        self.ensure_authenticated()?;

        let mut fleet = self.fleet.write().await;

        if let Some(max) = fleet.max_climate_duration {
            if options.duration > max {
                return Err(CloudError::Rejected {
                    message: format!("duration of {} minutes is above the maximum of {max}", options.duration),
                });
            }
        }

        if options.defrost && !fleet.defrost_supported {
            return Err(CloudError::Rejected {
                message: "defrost is not supported by the vehicle".to_owned(),
            });
        }

        debug!(vehicle_id = %vehicle_id, ?options, "simulated remote start");

        let vehicle = fleet.vehicle_mut(vehicle_id)?;
        vehicle.climate_on = Some(true);
        vehicle.climate_set_temperature = Some(options.temperature);
        vehicle.updated_at = Some(Utc::now());

        Ok(Self::accepted("start_climate", vehicle_id))
    }

    async fn stop_climate(&self, vehicle_id: &VehicleId) -> Result<CommandResult, CloudError> {
        Counters::increase(&self.counters.climate_stops);
        self.ensure_authenticated()?;

        let mut fleet = self.fleet.write().await;

        let vehicle = fleet.vehicle_mut(vehicle_id)?;
        vehicle.climate_on = Some(false);
        vehicle.updated_at = Some(Utc::now());

        Ok(Self::accepted("stop_climate", vehicle_id))
    }
}
