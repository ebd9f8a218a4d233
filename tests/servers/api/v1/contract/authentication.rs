use tracing::level_filters::LevelFilter;
use vehicle_control_test_helpers::configuration;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::connection_info::{connection_with_invalid_token, connection_with_no_token, ConnectionInfo};
use crate::servers::api::v1::asserts::{assert_token_not_valid, assert_unauthorized};
use crate::servers::api::v1::client::Client;
use crate::servers::api::Started;

#[tokio::test]
async fn should_authenticate_requests_by_using_a_token_in_the_authorization_header() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info()).get_vehicle_status(None).await;

    assert_eq!(response.status(), 200);

    env.stop().await;
}

#[tokio::test]
async fn should_authenticate_requests_by_using_a_bearer_token() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let token = env.get_connection_info().api_token.unwrap();

    let response = Client::new(ConnectionInfo::authenticated(
        &env.get_connection_info().bind_address,
        &format!("Bearer {token}"),
    ))
    .get_vehicle_status(None)
    .await;

    assert_eq!(response.status(), 200);

    env.stop().await;
}

#[tokio::test]
async fn should_not_authenticate_requests_when_the_token_is_missing() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(connection_with_no_token(&env.get_connection_info().bind_address))
        .get_vehicle_status(None)
        .await;

    assert_unauthorized(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_authenticate_requests_when_the_token_is_empty() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(ConnectionInfo::authenticated(&env.get_connection_info().bind_address, ""))
        .get_vehicle_status(None)
        .await;

    assert_token_not_valid(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_authenticate_requests_when_the_token_is_invalid() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(connection_with_invalid_token(&env.get_connection_info().bind_address))
        .lock()
        .await;

    assert_token_not_valid(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_not_send_commands_to_the_vehicle_cloud_for_unauthenticated_requests() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(connection_with_invalid_token(&env.get_connection_info().bind_address));

    client.unlock().await;
    client.start_heating().await;

    assert_eq!(env.cloud.calls().connects, 0);
    assert_eq!(env.cloud.calls().unlocks, 0);

    env.stop().await;
}
