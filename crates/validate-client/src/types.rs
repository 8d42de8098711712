//! Wire types and configuration for the Validate API.

use serde::{Deserialize, Serialize};

/// Opaque benchmark reference attached to a project.
///
/// The service owns the benchmark's shape; the client carries it around
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Benchmark(serde_json::Value);

impl Benchmark {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}

impl From<serde_json::Value> for Benchmark {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

/// Body of POST /runs/.
///
/// The aggregate scores are placeholders the service fills in as the run is
/// evaluated; the client always sends zeros.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateRunRequest {
    pub project_id: String,
    pub overall_answer_similarity: f64,
    pub overall_retrieval_precision: f64,
    pub overall_augmentation_precision: f64,
    pub overall_augmentation_accuracy: f64,
    pub overall_answer_consistency: f64,
    pub overall_score: f64,
}

impl CreateRunRequest {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            overall_answer_similarity: 0.0,
            overall_retrieval_precision: 0.0,
            overall_augmentation_precision: 0.0,
            overall_augmentation_accuracy: 0.0,
            overall_answer_consistency: 0.0,
            overall_score: 0.0,
        }
    }
}

/// Body of POST /projects/.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub benchmark_id: String,
}

/// Response from any creation endpoint. Only `id` is read.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// Project detail as returned by GET /projects/{id}.
///
/// Unknown fields are ignored; use `Project::get_project` for the raw body.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectRecord {
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub benchmark: Benchmark,
}

/// Client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL for the API.
    #[serde(default = "default_api_url")]
    pub url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "https://validate.tonic.ai/api/v1".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl ClientConfig {
    /// Create config from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `VALIDATE_API_URL` | API base URL |
    /// | `VALIDATE_API_TIMEOUT` | Request timeout in seconds |
    pub fn from_env() -> Self {
        Self {
            url: std::env::var("VALIDATE_API_URL").unwrap_or_else(|_| default_api_url()),
            timeout_secs: std::env::var("VALIDATE_API_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_timeout),
        }
    }

    /// Set the base URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}
