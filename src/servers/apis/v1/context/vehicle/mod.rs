//! Vehicle API context.
//!
//! This API context is responsible for the state of the vehicles in the owner
//! account and the door lock commands.
//!
//! # Endpoints
//!
//! - [Get vehicle status](#get-vehicle-status)
//! - [List vehicles](#list-vehicles)
//! - [Lock](#lock)
//! - [Unlock](#unlock)
//! - [Open the trunk](#open-the-trunk)
//!
//! # Get vehicle status
//!
//! `GET /api/v1/vehicle/status`
//!
//! Returns the last-known state of a vehicle. The state is refreshed from the
//! vehicle cloud before it is returned.
//!
//! **Query parameters**
//!
//! Name | Type | Description | Required | Example
//! ---|---|---|---|---
//! `vehicle_id` | string | The vehicle id. The default vehicle when it is not set | No | `KNDJ23AU4N7000001`
//!
//! **Example request**
//!
//! ```bash
//! curl -H "Authorization: MyAccessToken" "http://127.0.0.1:8080/api/v1/vehicle/status"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!     "id": "KNDJ23AU4N7000001",
//!     "name": "My EV9",
//!     "odometer": 12034.0,
//!     "fuel_level": null,
//!     "battery_level": 81.0,
//!     "driving_range": 243.0,
//!     "engine_on": false,
//!     "charging": false,
//!     "locked": true,
//!     "ignition_on": false,
//!     "climate_on": false,
//!     "interior_temperature": { "value": 58.0, "unit": "fahrenheit" },
//!     "climate_set_temperature": { "value": 70.0, "unit": "fahrenheit" },
//!     "doors": {
//!         "front_left_open": false,
//!         "front_right_open": false,
//!         "rear_left_open": false,
//!         "rear_right_open": false
//!     },
//!     "hood_open": false,
//!     "trunk_open": false,
//!     "gear": "park",
//!     "updated_at": "2024-06-10T16:07:39Z"
//! }
//! ```
//!
//! Attributes the vehicle cloud does not report are `null`.
//!
//! **Not found response** `404`
//!
//! ```json
//! {
//!     "error": "vehicle KNDJ23AU4N7000009 not found",
//!     "vehicle_id": "KNDJ23AU4N7000009"
//! }
//! ```
//!
//! **Resource**
//!
//! Refer to the API [`Vehicle`](crate::servers::apis::v1::context::vehicle::resources::Vehicle)
//! resource for more information about the response attributes.
//!
//! # List vehicles
//!
//! `GET /api/v1/vehicles`
//!
//! Returns an array with the [`Vehicle`](crate::servers::apis::v1::context::vehicle::resources::Vehicle)
//! resource of every vehicle in the account, in the order of the vehicle cloud.
//!
//! # Lock
//!
//! `POST /api/v1/vehicle/lock`
//!
//! Locks the doors of the default vehicle.
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!     "status": "Car locked",
//!     "result": "..."
//! }
//! ```
//!
//! The `result` is the raw value returned by the vehicle cloud.
//!
//! # Unlock
//!
//! `POST /api/v1/vehicle/unlock`
//!
//! Unlocks the doors of the default vehicle. The response is the same as the
//! [Lock](#lock) response with the status `Car unlocked`.
//!
//! # Open the trunk
//!
//! `POST /api/v1/vehicle/trunk`
//!
//! Sends a burst of unlock commands. It is used with aftermarket trunk
//! releases wired to the unlock signal.
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!     "status": "Aftermarket trunk opened",
//!     "results": ["...", "...", "..."]
//! }
//! ```
//!
//! # Legacy endpoints
//!
//! Endpoint | Equivalent
//! ---|---
//! `GET /vehicle_status` | `GET /api/v1/vehicle/status` with the [`LegacyStatus`](crate::servers::apis::v1::context::vehicle::resources::LegacyStatus) resource
//! `POST /lock_car` | `POST /api/v1/vehicle/lock`
//! `POST /unlock_car` | `POST /api/v1/vehicle/unlock`
//! `POST /aftermarket_trunk` | `POST /api/v1/vehicle/trunk`
pub mod handlers;
pub mod resources;
pub mod responses;
pub mod routes;
