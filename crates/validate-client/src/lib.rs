//! Client for the Validate evaluation service.
//!
//! This crate wraps the service's HTTP API:
//!
//! - Projects: create, fetch, and read raw project detail
//! - Runs: create a run with a validated metric selection
//! - A small `HttpClient` trait so the transport can be swapped out in tests
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use validate_client::{MetricFlags, Project, RestClient};
//!
//! # fn example() -> Result<(), validate_client::ValidateError> {
//! let client = Arc::new(RestClient::from_env()?);
//! let project = Project::fetch(client, "my-project-id")?;
//!
//! // No flags selected: the default metric set is used.
//! let run = project.new_run("gpt-4", MetricFlags::default())?;
//! println!("created run {}", run.id());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `VALIDATE_API_URL` | API base URL (default: `https://validate.tonic.ai/api/v1`) |
//! | `VALIDATE_API_TIMEOUT` | Request timeout in seconds (default: 30) |

pub mod error;
pub mod http;
pub mod metrics;
pub mod project;
pub mod run;
pub mod types;

// Re-export main types
pub use error::{ValidateError, ValidateResult};
pub use http::{HttpClient, RestClient, CLIENT_USER_AGENT};
pub use metrics::{Metric, MetricFlags};
pub use project::Project;
pub use run::Run;
pub use types::{
    Benchmark, ClientConfig, CreateProjectRequest, CreateRunRequest, CreatedResponse,
    ProjectRecord,
};
