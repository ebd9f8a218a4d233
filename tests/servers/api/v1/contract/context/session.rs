use tracing::level_filters::LevelFilter;
use vehicle_control::core::cloud::simulated::{DEMO_VEHICLE_ID, SECOND_DEMO_VEHICLE_ID};
use vehicle_control::servers::apis::v1::context::session::resources::{Session, Status};
use vehicle_control_test_helpers::configuration;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::v1::asserts::assert_internal_server_error;
use crate::servers::api::v1::client::Client;
use crate::servers::api::Started;

#[tokio::test]
async fn should_open_the_session_and_report_it() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info()).get_session().await;

    assert_eq!(response.status(), 200);

    let session = response.json::<Session>().await.unwrap();

    assert_eq!(session.status, Status::Ready);
    assert_eq!((session.region, session.brand), (3, 1));
    assert_eq!(session.default_vehicle_id, DEMO_VEHICLE_ID);
    assert_eq!(
        session.vehicles,
        vec![DEMO_VEHICLE_ID.to_string(), SECOND_DEMO_VEHICLE_ID.to_string()]
    );

    env.stop().await;
}

#[tokio::test]
async fn should_share_the_session_between_requests() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    client.get_session().await;
    client.lock().await;
    client.get_vehicle_status(None).await;

    assert_eq!(env.cloud.calls().connects, 1);

    env.stop().await;
}

#[tokio::test]
async fn should_open_a_new_session_when_it_is_reinitialized() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    client.get_session().await;

    let response = client.reinitialize_session().await;

    assert_eq!(response.status(), 200);
    assert_eq!(env.cloud.calls().connects, 2);

    env.stop().await;
}

#[tokio::test]
async fn should_report_the_missing_credentials() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral_without_credentials().into()).await;

    let body = assert_internal_server_error(Client::new(env.get_connection_info()).get_session().await).await;

    assert_eq!(body["missing_fields"], serde_json::json!(["username", "password", "pin"]));

    env.stop().await;
}

#[tokio::test]
async fn should_retry_the_authentication_on_the_next_request_after_a_transient_failure() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let mut config = configuration::ephemeral();
    config.session.max_attempts = 1;

    let env = Started::new(&config.into()).await;

    env.cloud.fail_next_authentications(1).await;

    let client = Client::new(env.get_connection_info());

    assert_internal_server_error(client.get_session().await).await;

    assert_eq!(client.get_session().await.status(), 200);

    env.stop().await;
}
