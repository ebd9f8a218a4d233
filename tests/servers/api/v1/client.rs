use reqwest::Response;
use serde::Serialize;

use crate::servers::api::connection_info::ConnectionInfo;

/// API Client
pub struct Client {
    connection_info: ConnectionInfo,
    base_path: String,
}

impl Client {
    pub fn new(connection_info: ConnectionInfo) -> Self {
        Self {
            connection_info,
            base_path: "/api/v1/".to_string(),
        }
    }

    /// A client for the endpoints of the first version of the service. They
    /// do not have the `/api/v1` prefix.
    pub fn legacy(connection_info: ConnectionInfo) -> Self {
        Self {
            connection_info,
            base_path: "/".to_string(),
        }
    }

    pub async fn get_vehicle_status(&self, vehicle_id: Option<&str>) -> Response {
        match vehicle_id {
            Some(vehicle_id) => self.get_with_query("vehicle/status", &[("vehicle_id", vehicle_id)]).await,
            None => self.get("vehicle/status").await,
        }
    }

    pub async fn get_vehicles(&self) -> Response {
        self.get("vehicles").await
    }

    pub async fn lock(&self) -> Response {
        self.post_empty("vehicle/lock").await
    }

    pub async fn unlock(&self) -> Response {
        self.post_empty("vehicle/unlock").await
    }

    pub async fn open_trunk(&self) -> Response {
        self.post_empty("vehicle/trunk").await
    }

    pub async fn start_climate<T: Serialize + ?Sized>(&self, form: &T) -> Response {
        self.post_form("climate/start", form).await
    }

    pub async fn start_heating(&self) -> Response {
        self.post_empty("climate/heating").await
    }

    pub async fn stop_climate(&self) -> Response {
        self.post_empty("climate/stop").await
    }

    pub async fn get_session(&self) -> Response {
        self.get("session").await
    }

    pub async fn reinitialize_session(&self) -> Response {
        self.post_empty("session/reinitialize").await
    }

    pub async fn get(&self, path: &str) -> Response {
        self.with_token(reqwest::Client::new().get(self.base_url(path)))
            .send()
            .await
            .unwrap()
    }

    pub async fn get_with_query(&self, path: &str, query: &[(&str, &str)]) -> Response {
        self.with_token(reqwest::Client::new().get(self.base_url(path)).query(query))
            .send()
            .await
            .unwrap()
    }

    pub async fn post_empty(&self, path: &str) -> Response {
        self.with_token(reqwest::Client::new().post(self.base_url(path)))
            .send()
            .await
            .unwrap()
    }

    pub async fn post_form<T: Serialize + ?Sized>(&self, path: &str, form: &T) -> Response {
        self.with_token(reqwest::Client::new().post(self.base_url(path)))
            .json(&form)
            .send()
            .await
            .unwrap()
    }

    pub async fn post_raw(&self, path: &str, body: &'static str) -> Response {
        self.with_token(reqwest::Client::new().post(self.base_url(path)))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap()
    }

    fn with_token(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.connection_info.api_token {
            Some(token) => request.header("authorization", token),
            None => request,
        }
    }

    fn base_url(&self, path: &str) -> String {
        format!("http://{}{}{path}", &self.connection_info.bind_address, &self.base_path)
    }
}

pub async fn get(path: &str) -> Response {
    reqwest::Client::builder().build().unwrap().get(path).send().await.unwrap()
}
