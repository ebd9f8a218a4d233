//! Application bootstrapping.
//!
//! This module includes all the functions to build the application, its
//! dependencies, and run the jobs.
//!
//! Jobs are tasks executed concurrently. The API server is always started.
//! The session warm-up job is only started when it is enabled in the
//! configuration.
pub mod app;
pub mod config;
pub mod jobs;
pub mod logging;
