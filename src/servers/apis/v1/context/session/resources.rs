//! API resources for the [`session`](crate::servers::apis::v1::context::session)
//! API context.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::session::SessionHandle;

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ready,
}

/// An open session with the vehicle cloud.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Session {
    pub status: Status,
    /// The region code the session was opened for.
    pub region: u8,
    /// The brand code the session was opened for.
    pub brand: u8,
    /// The vehicle the commands are sent to.
    pub default_vehicle_id: String,
    /// The ids of all the vehicles in the account.
    pub vehicles: Vec<String>,
    pub initialized_at: DateTime<Utc>,
}

impl Session {
    pub async fn from_handle(handle: &SessionHandle) -> Self {
        let selector = handle.selector();

        Session {
            status: Status::Ready,
            region: selector.region.0,
            brand: selector.brand.0,
            default_vehicle_id: handle.default_vehicle_id().to_string(),
            vehicles: handle
                .vehicles()
                .await
                .into_iter()
                .map(|vehicle| vehicle.id.to_string())
                .collect(),
            initialized_at: handle.initialized_at(),
        }
    }
}
