//! Configurations used by the tests.
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use vehicle_control_configuration::{Configuration, Threshold};

use crate::random;

/// Credentials of the owner account in the test configurations.
pub const USERNAME: &str = "owner@example.com";
pub const PASSWORD: &str = "correct horse battery staple";
pub const PIN: &str = "0123";

/// This configuration is used for testing. It generates random config values
/// so they do not collide if you run more than one API at the same time.
///
/// - The API binds to a free port on `127.0.0.1`.
/// - The owner account credentials are set.
/// - There is one random access token labeled `admin`.
/// - Retries and trunk pulses do not wait.
#[must_use]
pub fn ephemeral() -> Configuration {
    let mut config = Configuration::default();

    config.logging.threshold = Threshold::Off; // Change to `debug` for tests debugging

    // Ephemeral socket address for API
    let api_port = 0u16;
    config.http_api.bind_address = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), api_port);
    config.http_api.add_token("admin", &random::string(32));

    config.vehicle_cloud.username = Some(USERNAME.to_owned());
    config.vehicle_cloud.password = Some(PASSWORD.to_owned());
    config.vehicle_cloud.pin = Some(PIN.to_owned());

    config.session.retry_backoff = Duration::ZERO;
    config.trunk.pulse_interval = Duration::ZERO;

    config
}

/// Ephemeral configuration without the owner account credentials.
#[must_use]
pub fn ephemeral_without_credentials() -> Configuration {
    let mut config = ephemeral();

    config.vehicle_cloud.username = None;
    config.vehicle_cloud.password = None;
    config.vehicle_cloud.pin = None;

    config
}

/// Ephemeral configuration pinned to one vehicle of the account.
#[must_use]
pub fn ephemeral_with_vehicle(vehicle_id: &str) -> Configuration {
    let mut config = ephemeral();

    config.vehicle_cloud.vehicle_id = Some(vehicle_id.to_owned());

    config
}
