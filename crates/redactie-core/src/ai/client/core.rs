//! Gemini client core: HTTP setup, endpoint construction, error mapping

use std::time::Duration;

use reqwest::{RequestBuilder, Response};
use tracing::warn;
use url::Url;

use crate::ai::error::AssistError;
use crate::config::StudioConfig;

/// Client for the generative-language `generateContent` endpoint
#[derive(Debug, Clone)]
pub struct AiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl AiClient {
    pub fn new(config: &StudioConfig) -> Result<Self, AssistError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        if config.api_key.is_none() {
            warn!("No API key configured; assist requests will be rejected by the endpoint");
        }

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Full endpoint URL including the `key` query parameter
    pub(super) fn endpoint(&self) -> Result<Url, AssistError> {
        let mut url = Url::parse(&format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        ))?;
        url.query_pairs_mut()
            .append_pair("key", self.api_key.as_deref().unwrap_or_default());
        Ok(url)
    }

    pub(super) fn build_request(&self, url: Url) -> RequestBuilder {
        self.http
            .post(url)
            .header("Content-Type", "application/json")
    }

    /// Turn a non-success status into an error, keeping the body for the log
    pub(super) async fn handle_error_response(
        &self,
        response: Response,
    ) -> Result<Response, AssistError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(AssistError::Status { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str, api_key: Option<&str>) -> StudioConfig {
        StudioConfig {
            base_url: base_url.to_string(),
            api_key: api_key.map(str::to_string),
            ..StudioConfig::default()
        }
    }

    #[test]
    fn test_endpoint_carries_model_and_key() {
        let client = AiClient::new(&config("https://example.test/", Some("k&1"))).unwrap();
        let url = client.endpoint().unwrap();
        assert_eq!(
            url.as_str(),
            format!(
                "https://example.test/v1beta/models/{}:generateContent?key=k%261",
                client.model()
            )
        );
    }

    #[test]
    fn test_endpoint_without_key() {
        let client = AiClient::new(&config("https://example.test", None)).unwrap();
        let url = client.endpoint().unwrap();
        assert_eq!(url.query(), Some("key="));
    }

    #[test]
    fn test_bad_base_url() {
        let client = AiClient::new(&config("not a url", Some("k"))).unwrap();
        assert!(matches!(client.endpoint(), Err(AssistError::Endpoint(_))));
    }
}
