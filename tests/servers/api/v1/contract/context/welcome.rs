use tracing::level_filters::LevelFilter;
use vehicle_control::servers::apis::v1::context::welcome::handlers::{Welcome, WELCOME_MESSAGE};
use vehicle_control_test_helpers::configuration;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::v1::client::get;
use crate::servers::api::Started;

#[tokio::test]
async fn should_greet_anonymous_clients() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = get(&format!("http://{}/", env.get_connection_info().bind_address)).await;

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.json::<Welcome>().await.unwrap(),
        Welcome {
            status: WELCOME_MESSAGE.to_string()
        }
    );

    env.stop().await;
}
