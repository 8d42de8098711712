//! Project-scoped operations against the Validate API.
//!
//! Every operation is one request/response round trip through the shared
//! `HttpClient`. Errors from the client are returned as-is.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ValidateError, ValidateResult};
use crate::http::HttpClient;
use crate::metrics::MetricFlags;
use crate::run::Run;
use crate::types::{
    Benchmark, CreateProjectRequest, CreateRunRequest, CreatedResponse, ProjectRecord,
};

const RUNS_PATH: &str = "/runs/";
const PROJECTS_PATH: &str = "/projects/";

/// A Validate project.
#[derive(Clone)]
pub struct Project {
    id: String,
    benchmark: Benchmark,
    name: String,
    client: Arc<dyn HttpClient>,
}

impl Project {
    pub fn new(
        id: impl Into<String>,
        benchmark: Benchmark,
        name: impl Into<String>,
        client: Arc<dyn HttpClient>,
    ) -> Self {
        Self {
            id: id.into(),
            benchmark,
            name: name.into(),
            client,
        }
    }

    /// Load a project from the service by id.
    pub fn fetch(client: Arc<dyn HttpClient>, project_id: &str) -> ValidateResult<Self> {
        let body = client.get(&project_path(project_id))?;
        let record: ProjectRecord =
            serde_json::from_value(body).map_err(|e| ValidateError::InvalidResponse {
                message: format!("failed to parse project {}: {}", project_id, e),
            })?;

        Ok(Self::new(record.id, record.benchmark, record.name, client))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn benchmark(&self) -> &Benchmark {
        &self.benchmark
    }

    pub fn client(&self) -> &Arc<dyn HttpClient> {
        &self.client
    }

    /// Create a new run in this project.
    ///
    /// With `MetricFlags::default()` the run computes answer similarity,
    /// retrieval precision, augmentation precision, augmentation accuracy and
    /// answer consistency. Requesting `answer_consistency_binary` or
    /// `retrieval_k_recall` fails with `UnsupportedFeature` before anything is
    /// sent.
    pub fn new_run(&self, llm_evaluator: &str, flags: MetricFlags) -> ValidateResult<Run> {
        let metrics = flags.effective().map_err(|e| {
            warn!(project_id = %self.id, error = %e, "rejected run request");
            e
        })?;
        debug!(
            project_id = %self.id,
            llm_evaluator = %llm_evaluator,
            metrics = ?metrics.enabled(),
            "creating run"
        );

        let request = CreateRunRequest::new(self.id.clone());
        let id = self.create(RUNS_PATH, &request)?;

        Ok(Run::new(
            id,
            llm_evaluator.to_string(),
            metrics,
            Arc::clone(&self.client),
        ))
    }

    /// Create a project and return its id.
    pub fn new_project(&self, project_name: &str, benchmark_id: &str) -> ValidateResult<String> {
        let request = CreateProjectRequest {
            name: project_name.to_string(),
            benchmark_id: benchmark_id.to_string(),
        };
        debug!(name = %project_name, benchmark_id = %benchmark_id, "creating project");

        self.create(PROJECTS_PATH, &request)
    }

    /// Raw project detail, exactly as the service returned it.
    pub fn get_project(&self, project_id: &str) -> ValidateResult<Value> {
        self.client.get(&project_path(project_id))
    }

    fn create<T: serde::Serialize>(&self, path: &str, request: &T) -> ValidateResult<String> {
        let body = serde_json::to_value(request).map_err(|e| ValidateError::InvalidResponse {
            message: format!("failed to encode request for {}: {}", path, e),
        })?;
        let response = self.client.post(path, &body)?;
        created_id(path, response)
    }
}

impl fmt::Debug for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Project")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("benchmark", &self.benchmark)
            .finish_non_exhaustive()
    }
}

fn project_path(project_id: &str) -> String {
    format!("{}{}", PROJECTS_PATH, project_id)
}

fn created_id(path: &str, response: Value) -> ValidateResult<String> {
    serde_json::from_value::<CreatedResponse>(response)
        .map(|created| created.id)
        .map_err(|e| ValidateError::InvalidResponse {
            message: format!("missing id in response from {}: {}", path, e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Metric;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Post(String, Value),
        Get(String),
    }

    /// Records calls and answers with a canned response.
    struct FakeClient {
        calls: Mutex<Vec<Call>>,
        response: Value,
    }

    impl FakeClient {
        fn new(response: Value) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                response,
            })
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl HttpClient for FakeClient {
        fn post(&self, path: &str, body: &Value) -> ValidateResult<Value> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Post(path.to_string(), body.clone()));
            Ok(self.response.clone())
        }

        fn get(&self, path: &str) -> ValidateResult<Value> {
            self.calls.lock().unwrap().push(Call::Get(path.to_string()));
            Ok(self.response.clone())
        }
    }

    struct FailingClient;

    impl HttpClient for FailingClient {
        fn post(&self, _path: &str, _body: &Value) -> ValidateResult<Value> {
            Err(ValidateError::Server {
                status: 500,
                message: "boom".to_string(),
            })
        }

        fn get(&self, path: &str) -> ValidateResult<Value> {
            Err(ValidateError::NotFound {
                path: path.to_string(),
            })
        }
    }

    fn project(client: Arc<dyn HttpClient>) -> Project {
        Project::new(
            "proj-1",
            Benchmark::new(json!({"id": "bench-123"})),
            "Proj A",
            client,
        )
    }

    fn expected_run_body() -> Value {
        json!({
            "project_id": "proj-1",
            "overall_answer_similarity": 0.0,
            "overall_retrieval_precision": 0.0,
            "overall_augmentation_precision": 0.0,
            "overall_augmentation_accuracy": 0.0,
            "overall_answer_consistency": 0.0,
            "overall_score": 0.0,
        })
    }

    #[test]
    fn test_new_run_returns_server_id() {
        let fake = FakeClient::new(json!({"id": "run-42", "created": true}));
        let run = project(fake.clone())
            .new_run("gpt-4", MetricFlags::default())
            .unwrap();

        assert_eq!(run.id(), "run-42");
        assert_eq!(run.llm_evaluator(), "gpt-4");
        assert_eq!(*run.metrics(), MetricFlags::defaults());
        assert_eq!(
            fake.calls(),
            vec![Call::Post("/runs/".to_string(), expected_run_body())]
        );
    }

    #[test]
    fn test_new_run_shares_client() {
        let fake = FakeClient::new(json!({"id": "run-1"}));
        let project = project(fake.clone());
        let run = project.new_run("gpt-4", MetricFlags::default()).unwrap();
        assert!(Arc::ptr_eq(run.client(), project.client()));
    }

    #[test]
    fn test_default_and_explicit_flags_send_identical_payloads() {
        let implicit = FakeClient::new(json!({"id": "a"}));
        project(implicit.clone())
            .new_run("gpt-4", MetricFlags::default())
            .unwrap();

        let explicit = FakeClient::new(json!({"id": "b"}));
        project(explicit.clone())
            .new_run("gpt-4", MetricFlags::defaults())
            .unwrap();

        assert_eq!(implicit.calls(), explicit.calls());
    }

    #[test]
    fn test_explicit_flags_not_overridden() {
        let fake = FakeClient::new(json!({"id": "run-7"}));
        let flags = MetricFlags::default().with(Metric::AnswerConsistency);
        let run = project(fake).new_run("gpt-4", flags).unwrap();
        assert_eq!(run.metrics().enabled(), vec![Metric::AnswerConsistency]);
    }

    #[test]
    fn test_unsupported_flags_never_reach_the_network() {
        for metric in [Metric::AnswerConsistencyBinary, Metric::RetrievalKRecall] {
            let fake = FakeClient::new(json!({"id": "never"}));
            let err = project(fake.clone())
                .new_run("gpt-4", MetricFlags::defaults().with(metric))
                .unwrap_err();

            match err {
                ValidateError::UnsupportedFeature { feature } => {
                    assert_eq!(feature, metric.as_str())
                }
                other => panic!("expected UnsupportedFeature, got {other:?}"),
            }
            assert!(fake.calls().is_empty());
        }
    }

    #[test]
    fn test_new_run_missing_id_is_invalid_response() {
        let fake = FakeClient::new(json!({"status": "ok"}));
        let err = project(fake)
            .new_run("gpt-4", MetricFlags::default())
            .unwrap_err();
        assert!(matches!(err, ValidateError::InvalidResponse { .. }));
    }

    #[test]
    fn test_client_errors_propagate_unchanged() {
        let project = project(Arc::new(FailingClient));

        match project.new_run("gpt-4", MetricFlags::default()).unwrap_err() {
            ValidateError::Server { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected Server, got {other:?}"),
        }

        assert!(matches!(
            project.get_project("p1"),
            Err(ValidateError::NotFound { path }) if path == "/projects/p1"
        ));
    }

    #[test]
    fn test_new_project_body_and_id() {
        let fake = FakeClient::new(json!({"id": "proj-new"}));
        let id = project(fake.clone())
            .new_project("Proj A", "bench-123")
            .unwrap();

        assert_eq!(id, "proj-new");
        assert_eq!(
            fake.calls(),
            vec![Call::Post(
                "/projects/".to_string(),
                json!({"name": "Proj A", "benchmark_id": "bench-123"})
            )]
        );
    }

    #[test]
    fn test_get_project_is_passthrough() {
        let body = json!({
            "id": "p1",
            "name": "Proj A",
            "unknown_field": {"nested": [1, 2, 3]},
        });
        let fake = FakeClient::new(body.clone());
        let got = project(fake.clone()).get_project("p1").unwrap();

        assert_eq!(got, body);
        assert_eq!(fake.calls(), vec![Call::Get("/projects/p1".to_string())]);
    }

    #[test]
    fn test_fetch_builds_project_from_record() {
        let fake = FakeClient::new(json!({
            "id": "p1",
            "name": "Proj A",
            "benchmark": {"id": "bench-123"},
            "runs": [],
        }));
        let project = Project::fetch(fake.clone(), "p1").unwrap();

        assert_eq!(project.id(), "p1");
        assert_eq!(project.name(), "Proj A");
        assert_eq!(project.benchmark().as_value()["id"], json!("bench-123"));
        assert_eq!(fake.calls(), vec![Call::Get("/projects/p1".to_string())]);
    }

    #[test]
    fn test_fetch_rejects_body_without_id() {
        let fake = FakeClient::new(json!({"name": "Proj A"}));
        let err = Project::fetch(fake, "p1").unwrap_err();
        assert!(matches!(err, ValidateError::InvalidResponse { .. }));
    }

    #[test]
    fn test_project_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Project>();
        assert_send_sync::<Run>();
    }
}
