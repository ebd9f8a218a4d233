// code-review: should we use macros to return the exact line where the assert fails?

use reqwest::Response;
use serde_json::Value;
use vehicle_control::servers::apis::v1::context::vehicle::resources::Vehicle;

// Resource responses

pub async fn assert_vehicle(response: Response) -> Vehicle {
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    response.json::<Vehicle>().await.unwrap()
}

pub async fn assert_json(response: Response) -> Value {
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers().get("content-type").unwrap(), "application/json");
    response.json::<Value>().await.unwrap()
}

/// It asserts a command was accepted and returns the raw result.
pub async fn assert_command_accepted(response: Response, status: &str) -> Value {
    let body = assert_json(response).await;

    assert_eq!(body["status"], status, "body: {body}");

    body["result"].clone()
}

// Error responses

async fn assert_error(response: Response, status: u16) -> Value {
    let response_status = response.status();
    let body = response.json::<Value>().await.unwrap();

    assert_eq!(response_status, status, "body: {body}");
    assert!(body["error"].is_string(), "body: {body}");

    body
}

pub async fn assert_bad_request(response: Response) -> Value {
    assert_error(response, 400).await
}

pub async fn assert_not_found(response: Response) -> Value {
    assert_error(response, 404).await
}

pub async fn assert_internal_server_error(response: Response) -> Value {
    assert_error(response, 500).await
}

pub async fn assert_unauthorized(response: Response) {
    let body = assert_error(response, 403).await;

    assert_eq!(body["error"], "unauthorized");
}

pub async fn assert_token_not_valid(response: Response) {
    let body = assert_error(response, 403).await;

    assert_eq!(body["error"], "token not valid");
}
