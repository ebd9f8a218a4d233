//! API is organized in resource groups called contexts.
//!
//! Each context is a module that contains the API endpoints related to a
//! specific resource group.
pub mod climate;
pub mod health_check;
pub mod session;
pub mod vehicle;
pub mod welcome;
