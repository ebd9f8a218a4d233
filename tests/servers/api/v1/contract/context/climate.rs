use serde_json::json;
use tracing::level_filters::LevelFilter;
use vehicle_control::core::cloud::simulated::DEMO_VEHICLE_ID;
use vehicle_control_primitives::vehicle::VehicleSnapshot;
use vehicle_control_test_helpers::configuration;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::v1::asserts::{
    assert_bad_request, assert_command_accepted, assert_internal_server_error, assert_json,
};
use crate::servers::api::v1::client::Client;
use crate::servers::api::Started;

#[tokio::test]
async fn should_start_the_climate_control_with_the_configured_defaults() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info()).post_empty("climate/start").await;

    let body = assert_json(response).await;

    assert_eq!(body["status"], "Climate started");
    assert_eq!(body["vehicle_id"], DEMO_VEHICLE_ID);
    assert_eq!(body["attempt"], "primary");
    assert_eq!(
        body["options"],
        json!({
            "duration": 10,
            "defrost": false,
            "temperature": { "value": 62.0, "unit": "fahrenheit" },
            "heating": false
        })
    );
    assert_eq!(env.vehicle(DEMO_VEHICLE_ID).await.climate_on, Some(true));

    env.stop().await;
}

#[tokio::test]
async fn should_clamp_the_requested_duration() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    let long = assert_json(client.start_climate(&json!({ "duration": 99 })).await).await;
    let short = assert_json(client.start_climate(&json!({ "duration": 0 })).await).await;

    assert_eq!(long["options"]["duration"], 30);
    assert_eq!(short["options"]["duration"], 1);

    env.stop().await;
}

#[tokio::test]
async fn should_clamp_a_duration_that_is_not_a_small_integer() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    let huge = assert_json(client.post_raw("climate/start", r#"{"duration": 1e20}"#).await).await;
    let float = assert_json(client.post_raw("climate/start", r#"{"duration": 12.0}"#).await).await;

    assert_eq!(huge["options"]["duration"], 30);
    assert_eq!(float["options"]["duration"], 12);

    env.stop().await;
}

#[tokio::test]
async fn should_accept_a_temperature_in_celsius() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .start_climate(&json!({ "temperature": 21.5, "unit": "celsius", "defrost": true }))
        .await;

    let body = assert_json(response).await;

    assert_eq!(body["options"]["temperature"], json!({ "value": 21.5, "unit": "celsius" }));
    assert_eq!(body["options"]["defrost"], true);

    env.stop().await;
}

#[tokio::test]
async fn should_reject_a_temperature_outside_the_setpoint_range() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .start_climate(&json!({ "temperature": 95 }))
        .await;

    assert_bad_request(response).await;
    assert_eq!(env.cloud.calls().climate_starts, 0);

    env.stop().await;
}

#[tokio::test]
async fn should_reject_an_invalid_temperature_even_when_the_session_can_not_be_opened() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral_without_credentials().into()).await;

    let response = Client::new(env.get_connection_info())
        .start_climate(&json!({ "temperature": 95 }))
        .await;

    assert_bad_request(response).await;
    assert_eq!(env.cloud.calls().connects, 0);

    env.stop().await;
}

#[tokio::test]
async fn should_reject_a_body_that_is_not_a_valid_form() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .post_raw("climate/start", r#"{"duration": "ten"}"#)
        .await;

    assert_bad_request(response).await;
    assert_eq!(env.cloud.calls().climate_starts, 0);

    env.stop().await;
}

#[tokio::test]
async fn should_not_start_the_climate_control_when_the_hood_is_open() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    env.set_vehicle(VehicleSnapshot {
        hood_open: Some(true),
        ..env.vehicle(DEMO_VEHICLE_ID).await
    })
    .await;

    let response = Client::new(env.get_connection_info()).start_climate(&json!({})).await;

    let body = assert_bad_request(response).await;

    assert_eq!(body["violations"], json!(["hood must be closed"]));
    assert_eq!(body["vehicle"]["id"], DEMO_VEHICLE_ID);
    assert_eq!(env.cloud.calls().climate_starts, 0);

    env.stop().await;
}

#[tokio::test]
async fn should_skip_the_safety_checks_when_the_start_is_forced() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    env.set_vehicle(VehicleSnapshot {
        hood_open: Some(true),
        ..env.vehicle(DEMO_VEHICLE_ID).await
    })
    .await;

    let response = Client::new(env.get_connection_info())
        .start_climate(&json!({ "force": true }))
        .await;

    assert_json(response).await;
    assert_eq!(env.cloud.calls().climate_starts, 1);

    env.stop().await;
}

#[tokio::test]
async fn should_lock_an_unlocked_vehicle_before_the_remote_start() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    env.set_vehicle(VehicleSnapshot {
        locked: Some(false),
        ..env.vehicle(DEMO_VEHICLE_ID).await
    })
    .await;

    let response = Client::new(env.get_connection_info()).start_climate(&json!({})).await;

    assert_json(response).await;
    assert_eq!(env.cloud.calls().locks, 1);
    assert_eq!(env.vehicle(DEMO_VEHICLE_ID).await.locked, Some(true));

    env.stop().await;
}

#[tokio::test]
async fn should_send_a_conservative_attempt_when_the_vehicle_cloud_rejects_the_request() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    env.cloud.set_max_climate_duration(Some(5)).await;

    let response = Client::new(env.get_connection_info())
        .start_climate(&json!({ "duration": 15, "defrost": true }))
        .await;

    let body = assert_json(response).await;

    assert_eq!(body["attempt"], "fallback");
    assert_eq!(body["options"]["duration"], 5);
    assert_eq!(body["options"]["defrost"], false);
    assert_eq!(env.cloud.calls().climate_starts, 2);

    env.stop().await;
}

#[tokio::test]
async fn should_report_both_errors_when_the_conservative_attempt_also_fails() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    env.cloud.set_max_climate_duration(Some(3)).await;

    let response = Client::new(env.get_connection_info())
        .start_climate(&json!({ "duration": 15 }))
        .await;

    let body = assert_internal_server_error(response).await;

    assert!(body["primary"].is_string());
    assert!(body["fallback"].is_string());
    assert_eq!(body["request"]["duration"], 15);
    assert_eq!(env.cloud.calls().climate_starts, 2);

    env.stop().await;
}

#[tokio::test]
async fn should_start_the_heating_preset() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let body = assert_json(Client::new(env.get_connection_info()).start_heating().await).await;

    assert_eq!(body["status"], "Heating started (80°F)");
    assert_eq!(body["options"]["heating"], true);

    env.stop().await;
}

#[tokio::test]
async fn should_stop_the_climate_control() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    assert_json(client.start_climate(&json!({})).await).await;

    assert_command_accepted(client.stop_climate().await, "Climate stopped").await;
    assert_eq!(env.vehicle(DEMO_VEHICLE_ID).await.climate_on, Some(false));

    env.stop().await;
}
