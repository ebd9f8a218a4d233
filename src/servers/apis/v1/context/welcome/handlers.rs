use axum::Json;
use serde::{Deserialize, Serialize};

pub const WELCOME_MESSAGE: &str = "Welcome to the Kia Vehicle Control API";

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Welcome {
    pub status: String,
}

pub async fn welcome_handler() -> Json<Welcome> {
    Json(Welcome {
        status: WELCOME_MESSAGE.to_string(),
    })
}
