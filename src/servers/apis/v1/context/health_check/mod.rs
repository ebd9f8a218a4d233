//! API health check endpoint.
//!
//! It is used to check if the service is running. Especially for containers.
//! It does not require authentication and it does not open the vehicle cloud
//! session.
//!
//! # Endpoints
//!
//! - [Health Check](#health-check)
//!
//! # Health Check
//!
//! `GET /api/health_check`
//!
//! Returns the API status.
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:8080/api/health_check"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!     "status": "Ok"
//! }
//! ```
//!
//! **Resource**
//!
//! Refer to the API [`Report`](crate::servers::apis::v1::context::health_check::resources::Report)
//! resource for more information about the response attributes.
pub mod handlers;
pub mod resources;
