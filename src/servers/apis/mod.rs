//! The vehicle control REST API.
//!
//! > **NOTICE**: the API sends commands to a real vehicle. Do not expose it
//! > to the internet without TLS and a strong access token.
//!
//! Endpoints for the latest API: [v1].
//!
//! All endpoints, except the welcome message and the health check, require an
//! access token in the `Authorization` header. Refer to
//! [Authentication](#authentication).
//!
//! # Table of contents
//!
//! - [Configuration](#configuration)
//! - [Authentication](#authentication)
//! - [Versioning](#versioning)
//! - [Endpoints](#endpoints)
//! - [Errors](#errors)
//!
//! # Configuration
//!
//! The configuration file has a [`[http_api]`](vehicle_control_configuration::HttpApi)
//! section:
//!
//! ```toml
//! [http_api]
//! bind_address = "0.0.0.0:8080"
//!
//! [http_api.tsl_config]
//! ssl_cert_path = "./storage/vehicle_control/lib/tls/localhost.crt"
//! ssl_key_path = "./storage/vehicle_control/lib/tls/localhost.key"
//!
//! [http_api.access_tokens]
//! admin = "MyAccessToken"
//! ```
//!
//! The `admin` token can also be set with the `SECRET_KEY` environment
//! variable.
//!
//! When you run the service you will see the following message:
//!
//! ```text
//! 2024-06-10T16:07:39.990205Z  INFO API: Starting on http://0.0.0.0:8080
//! 2024-06-10T16:07:39.990215Z  INFO API: Started on http://0.0.0.0:8080
//! ```
//!
//! # Authentication
//!
//! The token is sent in the `Authorization` header, alone or with the
//! `Bearer` scheme:
//!
//! ```bash
//! curl -s -H "Authorization: MyAccessToken" http://127.0.0.1:8080/api/v1/vehicle/status
//! curl -s -H "Authorization: Bearer MyAccessToken" http://127.0.0.1:8080/api/v1/vehicle/status
//! ```
//!
//! Requests without the header are rejected with `403` and
//! `{"error": "unauthorized"}`. Requests with a token that is not configured
//! are rejected with `403` and `{"error": "token not valid"}`.
//!
//! # Versioning
//!
//! The API is versioned and each version has its own module. The routes of
//! the first version of the service (`/vehicle_status`, `/lock_car`, ...)
//! are still served for backward compatibility.
//!
//! # Endpoints
//!
//! Refer to the [v1] module for the list of available endpoints.
//!
//! # Errors
//!
//! All errors are JSON objects with an `error` message. Some of them have
//! more details:
//!
//! Status | Cause
//! ---|---
//! `400` | Invalid request body or temperature, or the vehicle is not in a safe state for a remote start.
//! `403` | Missing or invalid access token.
//! `404` | The vehicle is not in the account.
//! `500` | The session could not be opened or the vehicle cloud failed to execute the command.
pub mod routes;
pub mod server;
pub mod v1;

use serde::{Deserialize, Serialize};

/// The API versions.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    V1,
}
