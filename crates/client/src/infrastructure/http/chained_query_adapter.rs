//! Chained query adapter over HTTP
//!
//! Implements `ChainedQueryPort` against the two GET endpoints configured on
//! the root form element. Request fields travel as URL query parameters; the
//! body comes back as a `ResponseResult` envelope.

use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::application::get_request_timeout_ms;
use crate::config::FormConfig;
use crate::ports::outbound::ChainedQueryPort;
use sheetwright_shared::{LoadExamplesRequest, LoadValuesRequest, RequestError, ResponseResult};

/// Errors constructing the adapter from a form configuration
#[derive(Debug, Error)]
pub enum HttpConfigError {
    #[error("Invalid endpoint URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

/// HTTP implementation of the chained query port
#[derive(Debug, Clone)]
pub struct HttpChainedQueryAdapter {
    client: reqwest::Client,
    examples_url: Url,
    values_url: Url,
}

impl HttpChainedQueryAdapter {
    /// Build an adapter for the endpoints in `config`, with the standard
    /// request timeout applied to every call.
    pub fn new(config: &FormConfig) -> Result<Self, HttpConfigError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(get_request_timeout_ms()))
            .build()
            .map_err(|e| HttpConfigError::Client(e.to_string()))?;
        Self::with_client(config, client)
    }

    /// Build an adapter around a caller-supplied client.
    pub fn with_client(
        config: &FormConfig,
        client: reqwest::Client,
    ) -> Result<Self, HttpConfigError> {
        Ok(Self {
            client,
            examples_url: parse_endpoint(&config.examples_url)?,
            values_url: parse_endpoint(&config.values_url)?,
        })
    }

    async fn get(&self, url: Url) -> Result<ResponseResult, RequestError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_transport_error)?;

        response
            .json::<ResponseResult>()
            .await
            .map_err(|e| RequestError::SerializationError(e.to_string()))
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, HttpConfigError> {
    Url::parse(raw).map_err(|source| HttpConfigError::InvalidUrl {
        url: raw.to_string(),
        source,
    })
}

fn map_transport_error(error: reqwest::Error) -> RequestError {
    if error.is_timeout() {
        RequestError::Timeout
    } else if error.is_connect() {
        RequestError::NotConnected
    } else {
        RequestError::SendFailed(error.to_string())
    }
}

fn with_params(base: &Url, params: &[(&str, &str)]) -> Result<Url, RequestError> {
    Url::parse_with_params(base.as_str(), params)
        .map_err(|e| RequestError::SendFailed(e.to_string()))
}

#[async_trait::async_trait]
impl ChainedQueryPort for HttpChainedQueryAdapter {
    async fn load_examples(
        &self,
        request: LoadExamplesRequest,
    ) -> Result<ResponseResult, RequestError> {
        let url = with_params(
            &self.examples_url,
            &[
                ("category", request.category.as_str()),
                ("subject", request.subject_id.as_str()),
            ],
        )?;
        self.get(url).await
    }

    async fn load_values(
        &self,
        request: LoadValuesRequest,
    ) -> Result<ResponseResult, RequestError> {
        let url = with_params(
            &self.values_url,
            &[
                ("example", request.example_id.as_str()),
                ("subject", request.subject_id.as_str()),
            ],
        )?;
        self.get(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> FormConfig {
        FormConfig {
            examples_url: "http://localhost:8000/characters/load-examples/".to_string(),
            values_url: "http://localhost:8000/characters/load-values/".to_string(),
            subject: "char_9".into(),
            is_group_member: false,
        }
    }

    #[test]
    fn test_rejects_relative_endpoint_url() {
        let mut bad = config();
        bad.examples_url = "/characters/load-examples/".to_string();
        let err = HttpChainedQueryAdapter::new(&bad).unwrap_err();
        assert!(matches!(err, HttpConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn test_request_fields_become_query_parameters() {
        let adapter = HttpChainedQueryAdapter::new(&config()).unwrap();
        let url = with_params(
            &adapter.examples_url,
            &[("category", "Background"), ("subject", "char_9")],
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/characters/load-examples/?category=Background&subject=char_9"
        );
    }
}
