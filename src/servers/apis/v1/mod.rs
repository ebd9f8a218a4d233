//! The API version `v1`.
//!
//! The API is organized in the following contexts:
//!
//! Context | Description | Version
//! ---|---|---
//! `Vehicle` | Vehicle status and door lock commands | [`v1`](crate::servers::apis::v1::context::vehicle)
//! `Climate` | Remote climate start and stop | [`v1`](crate::servers::apis::v1::context::climate)
//! `Session` | Vehicle cloud session | [`v1`](crate::servers::apis::v1::context::session)
//!
//! > **NOTICE**: every command refreshes the authentication token and the
//! > state of the vehicles before it is sent, so the responses always reflect
//! > the latest state reported by the vehicle cloud.
//!
//! Refer to the [authentication middleware](crate::servers::apis::v1::middlewares::auth)
//! for more information about the authentication process.
pub mod context;
pub mod middlewares;
pub mod responses;
pub mod routes;
