use tracing::level_filters::LevelFilter;
use vehicle_control::core::cloud::simulated::{
    SimulatedCloud, DEMO_VEHICLE_ID, DEMO_VEHICLE_NAME, SECOND_DEMO_VEHICLE_ID, SECOND_DEMO_VEHICLE_NAME,
};
use vehicle_control::servers::apis::v1::context::vehicle::resources::Vehicle;
use vehicle_control_primitives::region::Selector;
use vehicle_control_primitives::vehicle::VehicleSnapshot;
use vehicle_control_test_helpers::configuration;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::v1::asserts::{
    assert_command_accepted, assert_internal_server_error, assert_json, assert_not_found, assert_vehicle,
};
use crate::servers::api::v1::client::Client;
use crate::servers::api::Started;

#[tokio::test]
async fn should_allow_getting_the_status_of_the_default_vehicle() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info()).get_vehicle_status(None).await;

    let vehicle = assert_vehicle(response).await;

    assert_eq!(vehicle.id, DEMO_VEHICLE_ID);
    assert_eq!(vehicle.name, DEMO_VEHICLE_NAME);
    assert_eq!(vehicle.locked, Some(true));

    env.stop().await;
}

#[tokio::test]
async fn should_allow_getting_the_status_of_another_vehicle_in_the_account() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .get_vehicle_status(Some(SECOND_DEMO_VEHICLE_ID))
        .await;

    let vehicle = assert_vehicle(response).await;

    assert_eq!(vehicle.id, SECOND_DEMO_VEHICLE_ID);
    assert_eq!(vehicle.name, SECOND_DEMO_VEHICLE_NAME);

    env.stop().await;
}

#[tokio::test]
async fn should_return_the_latest_state_reported_by_the_vehicle_cloud() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    assert_vehicle(client.get_vehicle_status(None).await).await;

    env.set_vehicle(VehicleSnapshot {
        hood_open: Some(true),
        ..env.vehicle(DEMO_VEHICLE_ID).await
    })
    .await;

    let vehicle = assert_vehicle(client.get_vehicle_status(None).await).await;

    assert_eq!(vehicle.hood_open, Some(true));

    env.stop().await;
}

#[tokio::test]
async fn should_return_not_found_for_a_vehicle_that_is_not_in_the_account() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .get_vehicle_status(Some("KNDJ23AU4N7999999"))
        .await;

    let body = assert_not_found(response).await;

    assert_eq!(body["vehicle_id"], "KNDJ23AU4N7999999");

    env.stop().await;
}

#[tokio::test]
async fn should_allow_listing_the_vehicles_in_the_account() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info()).get_vehicles().await;

    assert_eq!(response.status(), 200);

    let vehicles = response.json::<Vec<Vehicle>>().await.unwrap();

    assert_eq!(
        vehicles.iter().map(|vehicle| vehicle.id.as_str()).collect::<Vec<_>>(),
        vec![DEMO_VEHICLE_ID, SECOND_DEMO_VEHICLE_ID]
    );

    env.stop().await;
}

#[tokio::test]
async fn should_allow_unlocking_and_locking_the_default_vehicle() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    assert_command_accepted(client.unlock().await, "Car unlocked").await;
    assert_eq!(env.vehicle(DEMO_VEHICLE_ID).await.locked, Some(false));

    assert_command_accepted(client.lock().await, "Car locked").await;
    assert_eq!(env.vehicle(DEMO_VEHICLE_ID).await.locked, Some(true));

    env.stop().await;
}

#[tokio::test]
async fn should_send_the_commands_to_the_configured_vehicle() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral_with_vehicle(SECOND_DEMO_VEHICLE_ID).into()).await;

    let result = assert_command_accepted(Client::new(env.get_connection_info()).unlock().await, "Car unlocked").await;

    assert_eq!(result["vehicle_id"], SECOND_DEMO_VEHICLE_ID);
    assert_eq!(env.vehicle(SECOND_DEMO_VEHICLE_ID).await.locked, Some(false));
    assert_eq!(env.vehicle(DEMO_VEHICLE_ID).await.locked, Some(true));

    env.stop().await;
}

#[tokio::test]
async fn should_return_an_error_when_the_vehicle_cloud_rejects_the_command() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    env.cloud.reject_locks(true).await;

    let body = assert_internal_server_error(Client::new(env.get_connection_info()).lock().await).await;

    assert_eq!(body["command"], "lock");

    env.stop().await;
}

#[tokio::test]
async fn should_send_a_burst_of_unlock_commands_to_open_the_aftermarket_trunk() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let body = assert_json(Client::new(env.get_connection_info()).open_trunk().await).await;

    assert_eq!(body["status"], "Aftermarket trunk opened");
    assert_eq!(body["results"].as_array().map(Vec::len), Some(3));
    assert_eq!(env.cloud.calls().unlocks, 3);

    env.stop().await;
}

#[tokio::test]
async fn should_return_an_error_when_the_vehicle_cloud_credentials_are_not_configured() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral_without_credentials().into()).await;

    let body = assert_internal_server_error(Client::new(env.get_connection_info()).lock().await).await;

    assert_eq!(body["missing_fields"], serde_json::json!(["username", "password", "pin"]));
    assert_eq!(env.cloud.calls().connects, 0);

    env.stop().await;
}

#[tokio::test]
async fn should_return_an_error_when_the_account_has_no_vehicles() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::with_cloud(
        &configuration::ephemeral().into(),
        SimulatedCloud::new(Selector::FALLBACK, vec![]),
    )
    .await;

    assert_internal_server_error(Client::new(env.get_connection_info()).get_vehicle_status(None).await).await;

    env.stop().await;
}

#[tokio::test]
async fn should_return_not_found_when_the_configured_vehicle_is_not_in_the_account() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral_with_vehicle("KNDJ23AU4N7999999").into()).await;

    assert_not_found(Client::new(env.get_connection_info()).get_vehicle_status(None).await).await;

    env.stop().await;
}
