//! Primitive types for the [Vehicle Control API](https://docs.rs/vehicle-control).
//!
//! This package contains the value types shared by the API server, the
//! configuration and the vehicle cloud adapters: the vehicle identifier, the
//! vehicle snapshot, climate parameters and the region/brand selector codes.
//!
//! None of these types perform I/O. They are produced by the cloud adapters
//! and consumed, read-only, by the core.
pub mod climate;
pub mod region;
pub mod temperature;
pub mod vehicle;

/// The raw result returned by the vehicle cloud for a remote command.
///
/// Clouds usually return an action identifier or a small JSON document. The
/// core never interprets it, it is forwarded verbatim to the API client.
pub type CommandResult = serde_json::Value;
