//! Climate API context.
//!
//! This API context is responsible for the remote climate control
//! (pre-conditioning) of the default vehicle.
//!
//! # Endpoints
//!
//! - [Start the climate control](#start-the-climate-control)
//! - [Start the heating preset](#start-the-heating-preset)
//! - [Stop the climate control](#stop-the-climate-control)
//!
//! # Start the climate control
//!
//! `POST /api/v1/climate/start`
//!
//! Before the remote start the service checks the vehicle is in a safe state:
//! locked, doors, hood and trunk closed, ignition off and in Park. An unlocked
//! vehicle is locked once before the checks are evaluated again, when the
//! `climate.auto_lock` option is enabled.
//!
//! If the vehicle cloud rejects the command, a second, more conservative
//! attempt is sent: shorter duration, no defrost and no heating.
//!
//! **Body**
//!
//! A JSON object. Every attribute is optional and the body can be empty.
//!
//! Name | Type | Description | Default
//! ---|---|---|---
//! `duration` | integer | Minutes. It is clamped to `1..=30` | `climate.default_duration`
//! `defrost` | boolean | Front and rear defrost | `false`
//! `temperature` | number | Cabin temperature | `climate.default_temperature`
//! `unit` | string | `fahrenheit` or `celsius` | `vehicle_cloud.temperature_unit`
//! `force` | boolean | Skip the safety checks | `false`
//!
//! **Example request**
//!
//! ```bash
//! curl -X POST -H "Authorization: MyAccessToken" \
//!     -H "Content-Type: application/json" \
//!     -d '{"duration": 15, "temperature": 72}' \
//!     "http://127.0.0.1:8080/api/v1/climate/start"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!     "status": "Climate started",
//!     "vehicle_id": "KNDJ23AU4N7000001",
//!     "attempt": "primary",
//!     "options": {
//!         "duration": 15,
//!         "defrost": false,
//!         "temperature": { "value": 72.0, "unit": "fahrenheit" },
//!         "heating": false
//!     },
//!     "result": "..."
//! }
//! ```
//!
//! **Precondition failed response** `400`
//!
//! ```json
//! {
//!     "error": "climate preconditions not met: hood must be closed",
//!     "violations": ["hood must be closed"],
//!     "vehicle": { "id": "KNDJ23AU4N7000001", "...": "..." }
//! }
//! ```
//!
//! A temperature outside the setpoint range of its unit (`62..=82` °F or
//! `17..=28` °C) is rejected with `400` as well.
//!
//! # Start the heating preset
//!
//! `POST /api/v1/climate/heating`
//!
//! Starts the climate control at `climate.heating_temperature` with the
//! heated accessories on. No body. The status of the response contains the
//! temperature, for example `Heating started (80°F)`.
//!
//! # Stop the climate control
//!
//! `POST /api/v1/climate/stop`
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!     "status": "Climate stopped",
//!     "result": "..."
//! }
//! ```
//!
//! # Legacy endpoints
//!
//! Endpoint | Equivalent
//! ---|---
//! `POST /start_climate` | `POST /api/v1/climate/start`
//! `POST /start_heating` | `POST /api/v1/climate/heating`
//! `POST /stop_climate` | `POST /api/v1/climate/stop`
pub mod forms;
pub mod handlers;
pub mod responses;
pub mod routes;
