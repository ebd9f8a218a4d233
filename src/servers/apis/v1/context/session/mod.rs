//! Session API context.
//!
//! The service keeps one authenticated session with the vehicle cloud. It is
//! opened with the first request. This context reports it and allows to
//! replace it, for example after the owner changed the account password.
//!
//! # Endpoints
//!
//! - [Get session](#get-session)
//! - [Reinitialize session](#reinitialize-session)
//!
//! # Get session
//!
//! `GET /api/v1/session`
//!
//! It opens the session if it is not open yet.
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!     "status": "ready",
//!     "region": 3,
//!     "brand": 1,
//!     "default_vehicle_id": "KNDJ23AU4N7000001",
//!     "vehicles": ["KNDJ23AU4N7000001", "KNAGM4AD0P5000002"],
//!     "initialized_at": "2024-06-10T16:07:39.990205Z"
//! }
//! ```
//!
//! **Error response** `500`
//!
//! ```json
//! {
//!     "error": "vehicle session is not ready: missing vehicle cloud credentials: username, pin",
//!     "missing_fields": ["username", "pin"]
//! }
//! ```
//!
//! **Resource**
//!
//! Refer to the API [`Session`](crate::servers::apis::v1::context::session::resources::Session)
//! resource for more information about the response attributes.
//!
//! # Reinitialize session
//!
//! `POST /api/v1/session/reinitialize`
//!
//! It discards the current session, and any cached failure, and opens a new
//! one. The responses are the same as in [Get session](#get-session).
pub mod handlers;
pub mod resources;
pub mod routes;
