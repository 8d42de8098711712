//! HTTP capability used by projects and runs, plus the reqwest implementation.
//!
//! `RestClient` is the ONLY place for status code handling. Projects and runs
//! never interpret status codes; they see `ValidateResult<Value>`.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

use crate::error::{ValidateError, ValidateResult};
use crate::types::ClientConfig;

pub const CLIENT_USER_AGENT: &str = concat!("validate-client/", env!("CARGO_PKG_VERSION"));

/// Minimal request surface the API objects need.
///
/// Implementations decide transport, timeouts and error mapping. Errors are
/// passed through to callers untouched.
pub trait HttpClient: Send + Sync {
    /// POST a JSON body to `path` and return the decoded response.
    fn post(&self, path: &str, body: &Value) -> ValidateResult<Value>;

    /// GET `path` and return the decoded response.
    fn get(&self, path: &str) -> ValidateResult<Value>;
}

/// Blocking HTTP client for the Validate API.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
}

impl RestClient {
    pub fn new(config: ClientConfig) -> ValidateResult<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(default_headers)
            .build()
            .map_err(|e| ValidateError::Config {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        let base_url = config.url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ValidateError::Config {
                message: "API URL is empty".to_string(),
            });
        }

        Ok(Self { client, base_url })
    }

    pub fn from_env() -> ValidateResult<Self> {
        Self::new(ClientConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn decode(path: &str, response: Response) -> ValidateResult<Value> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().map_err(|e| ValidateError::Network {
                message: format!("failed to read response body: {}", e),
            })?;
            if body.trim().is_empty() {
                return Ok(Value::Null);
            }
            return serde_json::from_str(&body).map_err(|e| ValidateError::InvalidResponse {
                message: format!("failed to parse response from {}: {}", path, e),
            });
        }

        if status == StatusCode::NOT_FOUND {
            return Err(ValidateError::NotFound {
                path: path.to_string(),
            });
        }

        let message = response.text().unwrap_or_else(|_| status.to_string());
        Err(ValidateError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

impl HttpClient for RestClient {
    fn post(&self, path: &str, body: &Value) -> ValidateResult<Value> {
        let url = self.url(path);
        debug!(method = "POST", url = %url, "sending request");

        let response = self.client.post(&url).json(body).send()?;
        Self::decode(path, response)
    }

    fn get(&self, path: &str) -> ValidateResult<Value> {
        let url = self.url(path);
        debug!(method = "GET", url = %url, "sending request");

        let response = self.client.get(&url).send()?;
        Self::decode(path, response)
    }
}
