use vehicle_control::servers::apis::server;

pub mod connection_info;
pub mod environment;
pub mod v1;

pub type Started = environment::Environment<server::Running>;
