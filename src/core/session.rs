//! The session gate.
//!
//! The gate owns the only session to the vehicle cloud. The session is
//! created lazily, the first time a command needs it, and then it is reused
//! by every request until it is explicitly reinitialized.
//!
//! ```text
//! request -> SessionGate::ensure_ready -> Ready(handle)  -> CommandExecutor
//!                                      -> Failed(error)  -> error response
//! ```
//!
//! Initialization:
//!
//! 1. Check the credentials. All the missing ones are reported at once.
//! 2. Resolve the region/brand [candidates](crate::core::cloud::selector::candidates).
//! 3. For each attempt (`session.max_attempts`), try every candidate:
//!    connect, authenticate and read the vehicles of the account.
//! 4. Choose the default vehicle: the configured one, or the first one
//!    listed by the cloud.
//!
//! The outcome is cached. A ready handle is returned without any remote
//! call. A [terminal](InitializationError::is_terminal) failure is returned
//! from the cache too. Other failures are retried on the next request.
//!
//! A single lock guards reading and replacing the cached outcome. Concurrent
//! first requests wait for the one running the initialization. Commands run
//! on a cloned [`Arc<SessionHandle>`] without holding the gate lock.
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, RwLock};
use tracing::{info, instrument, warn};
use vehicle_control_configuration::{Session as SessionPolicy, VehicleCloud};
use vehicle_control_primitives::region::Selector;
use vehicle_control_primitives::vehicle::{VehicleId, VehicleSnapshot};

use super::cloud::{selector, CloudError, Connector, Credentials, Session};
use super::error::InitializationError;

/// The outcome of the session initialization.
#[derive(Clone)]
pub enum Readiness {
    Ready(Arc<SessionHandle>),
    Failed(InitializationError),
}

impl Readiness {
    /// # Errors
    ///
    /// Will return the initialization error if the session is not ready.
    pub fn into_result(self) -> Result<Arc<SessionHandle>, InitializationError> {
        match self {
            Readiness::Ready(handle) => Ok(handle),
            Readiness::Failed(error) => Err(error),
        }
    }
}

/// An initialized session: authenticated, with at least one vehicle and a
/// resolved default vehicle.
pub struct SessionHandle {
    session: Arc<dyn Session>,
    selector: Selector,
    default_vehicle_id: VehicleId,
    vehicles: RwLock<Vec<VehicleSnapshot>>,
    initialized_at: DateTime<Utc>,
}

impl SessionHandle {
    #[must_use]
    pub fn session(&self) -> &dyn Session {
        self.session.as_ref()
    }

    #[must_use]
    pub fn selector(&self) -> Selector {
        self.selector
    }

    #[must_use]
    pub fn default_vehicle_id(&self) -> &VehicleId {
        &self.default_vehicle_id
    }

    #[must_use]
    pub fn initialized_at(&self) -> DateTime<Utc> {
        self.initialized_at
    }

    /// It refreshes the token and then the state of all vehicles.
    ///
    /// # Errors
    ///
    /// Will return an error if the cloud can not be reached or it does not
    /// accept the token.
    pub async fn refresh(&self) -> Result<(), CloudError> {
        self.session.refresh_token().await?;
        self.refresh_vehicle_state().await
    }

    /// It reads the state of all vehicles again. The cached set is replaced
    /// as a whole.
    ///
    /// # Errors
    ///
    /// Will return an error if the cloud can not be reached.
    pub async fn refresh_vehicle_state(&self) -> Result<(), CloudError> {
        let vehicles = self.session.refresh_all_vehicle_state().await?;

        *self.vehicles.write().await = vehicles;

        Ok(())
    }

    /// The cached state of one vehicle.
    pub async fn vehicle(&self, vehicle_id: &VehicleId) -> Option<VehicleSnapshot> {
        self.vehicles
            .read()
            .await
            .iter()
            .find(|vehicle| &vehicle.id == vehicle_id)
            .cloned()
    }

    /// The cached state of every vehicle, in the order of the cloud.
    pub async fn vehicles(&self) -> Vec<VehicleSnapshot> {
        self.vehicles.read().await.clone()
    }
}

enum OpenError {
    NoVehicles,
    Cloud(CloudError),
}

impl From<CloudError> for OpenError {
    fn from(error: CloudError) -> Self {
        OpenError::Cloud(error)
    }
}

/// Owner of the shared session.
pub struct SessionGate {
    connector: Arc<dyn Connector>,
    cloud: VehicleCloud,
    policy: SessionPolicy,
    state: Mutex<Option<Readiness>>,
}

impl SessionGate {
    #[must_use]
    pub fn new(connector: Arc<dyn Connector>, cloud: &VehicleCloud, policy: &SessionPolicy) -> Self {
        Self {
            connector,
            cloud: cloud.clone(),
            policy: policy.clone(),
            state: Mutex::new(None),
        }
    }

    /// It returns the cached session, or initializes a new one.
    pub async fn ensure_ready(&self) -> Readiness {
        let mut state = self.state.lock().await;

        match &*state {
            Some(Readiness::Ready(handle)) => return Readiness::Ready(handle.clone()),
            Some(Readiness::Failed(error)) if error.is_terminal() => return Readiness::Failed(error.clone()),
            _ => {}
        }

        let readiness = self.initialize().await;

        *state = Some(readiness.clone());

        readiness
    }

    /// It discards the cached session and runs the whole initialization
    /// again.
    pub async fn force_reinitialize(&self) -> Readiness {
        let mut state = self.state.lock().await;

        *state = None;

        info!("reinitializing the vehicle cloud session");

        let readiness = self.initialize().await;

        *state = Some(readiness.clone());

        readiness
    }

    #[instrument(skip(self))]
    async fn initialize(&self) -> Readiness {
        let credentials = match Credentials::from_config(&self.cloud) {
            Ok(credentials) => credentials,
            Err(fields) => {
                let error = InitializationError::MissingCredentials { fields };
                warn!(%error, "vehicle cloud session not initialized");
                return Readiness::Failed(error);
            }
        };

        let candidates = selector::candidates(&self.cloud, &self.connector.catalogues());

        let mut last_failure = None;

        for attempt in 1..=self.policy.max_attempts {
            for selector in &candidates {
                info!(attempt, %selector, "opening vehicle cloud session");

                match self.open(&credentials, *selector).await {
                    Ok(handle) => {
                        info!(
                            attempt,
                            %selector,
                            default_vehicle_id = %handle.default_vehicle_id,
                            "vehicle cloud session ready"
                        );
                        return Readiness::Ready(Arc::new(handle));
                    }
                    Err(OpenError::NoVehicles) => {
                        let error = InitializationError::NoVehicles { selector: *selector };
                        warn!(%error, "vehicle cloud session not initialized");
                        return Readiness::Failed(error);
                    }
                    Err(OpenError::Cloud(error)) => {
                        warn!(attempt, %selector, %error, "could not open vehicle cloud session");
                        last_failure = Some((*selector, error));
                    }
                }
            }

            if attempt < self.policy.max_attempts && self.policy.retry_backoff > Duration::ZERO {
                tokio::time::sleep(self.policy.retry_backoff).await;
            }
        }

        let (selector, source) = last_failure.unwrap_or((
            Selector::FALLBACK,
            CloudError::Transport {
                message: "no attempt was made".to_owned(),
            },
        ));

        Readiness::Failed(InitializationError::Unreachable {
            attempts: self.policy.max_attempts,
            selector,
            source,
        })
    }

    async fn open(&self, credentials: &Credentials, selector: Selector) -> Result<SessionHandle, OpenError> {
        let session = self.connector.connect(credentials, selector)?;

        session.refresh_token().await?;

        let vehicles = session.refresh_all_vehicle_state().await?;

        let Some(first) = vehicles.first() else {
            return Err(OpenError::NoVehicles);
        };

        let default_vehicle_id = match &self.cloud.vehicle_id {
            Some(vehicle_id) if !vehicle_id.is_empty() => VehicleId::new(vehicle_id),
            _ => first.id.clone(),
        };

        Ok(SessionHandle {
            session,
            selector,
            default_vehicle_id,
            vehicles: RwLock::new(vehicles),
            initialized_at: Utc::now(),
        })
    }
}
