use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Deserialize;

use crate::config::GraphQlConfig;

use super::envelope::AppResponse;
use super::error::ApiError;
use super::types::Country;

/// Query sent to the countries endpoint.
pub const COUNTRIES_QUERY: &str = r#"
{
  countries {
    code
    name
    emoji
    native
    phone
    currency
    capital
    continent {
      name
    }
  }
}
"#;

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<CountriesData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct CountriesData {
    countries: Vec<Country>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Clone)]
pub struct CountriesClient {
    client: Client,
    endpoint: String,
}

impl CountriesClient {
    pub fn new(config: &GraphQlConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub async fn fetch_countries(&self) -> AppResponse<Vec<Country>> {
        AppResponse::from_result(self.query().await)
    }

    async fn query(&self) -> Result<Vec<Country>, ApiError> {
        tracing::debug!(endpoint = %self.endpoint, "querying countries");
        let payload = serde_json::json!({ "query": COUNTRIES_QUERY });
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(payload.to_string())
            .send()
            .await
            .map_err(|e| ApiError::Request {
                url: self.endpoint.clone(),
                source: e,
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| ApiError::Request {
            url: self.endpoint.clone(),
            source: e,
        })?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        decode_countries(&body)
    }
}

fn decode_countries(body: &str) -> Result<Vec<Country>, ApiError> {
    let parsed: GraphQlResponse = serde_json::from_str(body)?;
    if !parsed.errors.is_empty() {
        let messages: Vec<&str> = parsed.errors.iter().map(|e| e.message.as_str()).collect();
        return Err(ApiError::GraphQl(messages.join("; ")));
    }
    parsed
        .data
        .map(|data| data.countries)
        .ok_or_else(|| ApiError::GraphQl("response carried no data".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_requests_every_country_field() {
        for field in [
            "code", "name", "emoji", "native", "phone", "currency", "capital", "continent",
        ] {
            assert!(COUNTRIES_QUERY.contains(field), "missing {field}");
        }
    }

    #[test]
    fn decodes_countries_payload() {
        let body = r#"{"data":{"countries":[
            {"code":"AD","name":"Andorra","emoji":"🇦🇩","native":"Andorra","phone":"376",
             "currency":"EUR","capital":"Andorra la Vella","continent":{"name":"Europe"}}
        ]}}"#;
        let countries = decode_countries(body).unwrap();
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].capital.as_deref(), Some("Andorra la Vella"));
    }

    #[test]
    fn errors_array_is_rejection() {
        let body = r#"{"data":null,"errors":[{"message":"Syntax Error"},{"message":"again"}]}"#;
        match decode_countries(body) {
            Err(ApiError::GraphQl(message)) => assert_eq!(message, "Syntax Error; again"),
            other => panic!("expected GraphQl error, got {other:?}"),
        }
    }

    #[test]
    fn missing_data_is_rejection() {
        assert!(matches!(
            decode_countries(r#"{"data":null}"#),
            Err(ApiError::GraphQl(_))
        ));
    }
}
