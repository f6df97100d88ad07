use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;

use super::envelope::AppResponse;
use super::error::ApiError;
use super::types::UserPage;

/// Page fetch client for the user listing endpoint.
#[derive(Clone)]
pub struct UserClient {
    client: Client,
    base_url: String,
}

impl UserClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(app_id) = &config.app_id {
            let value = HeaderValue::from_str(app_id)
                .map_err(|e| ApiError::Config(format!("app-id header: {}", e)))?;
            headers.insert("app-id", value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `GET /user?limit=<n>`
    pub async fn fetch_users(&self, limit: u32) -> AppResponse<UserPage> {
        let url = format!("{}/user?limit={}", self.base_url, limit);
        AppResponse::from_result(self.get_json(&url).await)
    }

    /// `GET /user?page=<p>&limit=<n>`
    pub async fn fetch_page(&self, page: u32, limit: u32) -> AppResponse<UserPage> {
        let url = format!("{}/user?page={}&limit={}", self.base_url, page, limit);
        AppResponse::from_result(self.get_json(&url).await)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        tracing::debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Request {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| ApiError::Request {
            url: url.to_string(),
            source: e,
        })?;

        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "user listing request rejected");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
