//! Testing helpers for the Vehicle Control API.
pub mod configuration;
pub mod random;
