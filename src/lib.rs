//! **Vehicle Control** is a small REST API to control a connected vehicle
//! through the telematics cloud of its manufacturer.
//!
//! It keeps one authenticated session with the vehicle cloud and exposes a
//! few commands over HTTP: read the vehicle status, lock and unlock the
//! doors, start and stop the climate control and release an aftermarket
//! trunk actuator. It is meant to be called from home automation systems and
//! phone shortcuts.
//!
//! # Table of contents
//!
//! - [Features](#features)
//! - [Services](#services)
//! - [Installation](#installation)
//! - [Configuration](#configuration)
//! - [Components](#components)
//!
//! # Features
//!
//! - Lazy and shared vehicle cloud session, with bounded retries over the
//!   candidate regions and brands.
//! - Safety checks before a remote climate start: the vehicle must be locked,
//!   closed, off and in Park.
//! - A conservative second attempt when the vehicle cloud rejects a remote
//!   start.
//! - Static token authentication.
//! - Optional TLS.
//! - The endpoints of the first version of the service.
//!
//! # Services
//!
//! From the end-user perspective the service exposes one REST API. Refer to
//! the [`servers::apis`] module for the endpoints. There is also a tiny
//! `http_health_check` binary to be used in container health checks.
//!
//! # Installation
//!
//! ```text
//! git clone https://github.com/vehicle-control/vehicle-control.git \
//!   && cd vehicle-control \
//!   && cargo build --release
//! ```
//!
//! To run the service with the development configuration:
//!
//! ```text
//! KIA_USERNAME="owner@example.com" KIA_PASSWORD="secret" KIA_PIN="0123" \
//!   SECRET_KEY="MyAccessToken" \
//!   cargo run
//! ```
//!
//! # Configuration
//!
//! The service loads the configuration from the TOML file in
//! `./share/default/config/vehicle_control.development.toml`, the file set
//! in the `VEHICLE_CONTROL_CONFIG_TOML_PATH` env var or the whole TOML
//! document in the `VEHICLE_CONTROL_CONFIG_TOML` env var. Every option can be
//! overridden with a `VEHICLE_CONTROL__` prefixed env var, for example
//! `VEHICLE_CONTROL__SESSION__MAX_ATTEMPTS=5`.
//!
//! Refer to the [`vehicle-control-configuration`](vehicle_control_configuration)
//! crate for all the options.
//!
//! # Components
//!
//! Layer | Module | Description
//! ---|---|---
//! Delivery | [`servers`] | The REST API and the server lifecycle
//! Domain | [`core`] | The session gate and the command executor
//! Adapters | [`core::cloud`] | The seam with the vehicle cloud clients
//! Application | [`app`], [`bootstrap`] | Configuration, logging and jobs
pub mod app;
pub mod bootstrap;
pub mod core;
pub mod servers;
