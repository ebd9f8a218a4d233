//! The endpoints of the first version of the service.
use tracing::level_filters::LevelFilter;
use vehicle_control::core::cloud::simulated::DEMO_VEHICLE_ID;
use vehicle_control::servers::apis::v1::context::vehicle::resources::LegacyStatus;
use vehicle_control_test_helpers::configuration;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::connection_info::connection_with_no_token;
use crate::servers::api::v1::asserts::{assert_command_accepted, assert_json, assert_unauthorized};
use crate::servers::api::v1::client::Client;
use crate::servers::api::Started;

#[tokio::test]
async fn should_return_the_vehicle_status_with_the_legacy_attribute_names() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::legacy(env.get_connection_info()).get("vehicle_status").await;

    assert_eq!(response.status(), 200);

    let status = response.json::<LegacyStatus>().await.unwrap();

    assert_eq!(status.locked, Some(true));
    assert_eq!(status.engine_on, Some(false));
    assert_eq!(status.interior_temperature, Some(58.0));

    env.stop().await;
}

#[tokio::test]
async fn should_keep_the_legacy_command_endpoints() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::legacy(env.get_connection_info());

    assert_command_accepted(client.post_empty("unlock_car").await, "Car unlocked").await;
    assert_command_accepted(client.post_empty("lock_car").await, "Car locked").await;

    let started = assert_json(client.post_empty("start_climate").await).await;
    assert_eq!(started["status"], "Climate started");

    assert_command_accepted(client.post_empty("stop_climate").await, "Climate stopped").await;

    let heating = assert_json(client.post_empty("start_heating").await).await;
    assert_eq!(heating["status"], "Heating started (80°F)");

    let trunk = assert_json(client.post_empty("aftermarket_trunk").await).await;
    assert_eq!(trunk["status"], "Aftermarket trunk opened");

    assert_eq!(env.vehicle(DEMO_VEHICLE_ID).await.climate_on, Some(true));

    env.stop().await;
}

#[tokio::test]
async fn should_require_the_token_in_the_legacy_endpoints() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::legacy(connection_with_no_token(&env.get_connection_info().bind_address))
        .post_empty("lock_car")
        .await;

    assert_unauthorized(response).await;

    env.stop().await;
}
