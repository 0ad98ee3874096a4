//! F1 API Client
//!
//! A client for the public Formula 1 statistics API, serving the three
//! read-only endpoints the dashboard consumes.

use crate::api::StandingsApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts::http;
use crate::environment::Environment;
use reqwest::{Client, ClientBuilder, Response};

// User-Agent string with the dashboard version
const USER_AGENT: &str = concat!("pitwall/", env!("CARGO_PKG_VERSION"));

// Endpoint paths below the API base URL
const DRIVER_STANDINGS_ENDPOINT: &str = "current/drivers-championship";
const CONSTRUCTOR_STANDINGS_ENDPOINT: &str = "current/constructors-championship";
const NEXT_RACE_ENDPOINT: &str = "current/next";

#[derive(Debug, Clone)]
pub struct F1ApiClient {
    client: Client,
    environment: Environment,
}

impl F1ApiClient {
    pub fn new(environment: Environment) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(http::connect_timeout())
                .timeout(http::request_timeout())
                .build()
                .expect("Failed to create HTTP client"),
            environment,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_base_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    /// Issue a GET request and return the raw response body.
    async fn get_text(&self, endpoint: &str) -> Result<String, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let body = response.text().await?;
        Ok(body)
    }
}

#[async_trait::async_trait]
impl StandingsApi for F1ApiClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn driver_standings(&self) -> Result<String, ApiError> {
        self.get_text(DRIVER_STANDINGS_ENDPOINT).await
    }

    async fn constructor_standings(&self) -> Result<String, ApiError> {
        self.get_text(CONSTRUCTOR_STANDINGS_ENDPOINT).await
    }

    async fn next_race(&self) -> Result<String, ApiError> {
        self.get_text(NEXT_RACE_ENDPOINT).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_joins_cleanly() {
        let client = F1ApiClient::new(Environment::Custom {
            api_base_url: "http://localhost:9090/api/".to_string(),
        });
        assert_eq!(
            client.build_url("/current/next"),
            "http://localhost:9090/api/current/next"
        );
    }
}
