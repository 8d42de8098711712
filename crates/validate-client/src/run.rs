//! A run the service has acknowledged.

use std::fmt;
use std::sync::Arc;

use crate::http::HttpClient;
use crate::metrics::MetricFlags;

/// Server-side evaluation run.
///
/// Only `Project::new_run` creates these, and only from an id the service
/// returned.
#[derive(Clone)]
pub struct Run {
    id: String,
    llm_evaluator: String,
    metrics: MetricFlags,
    client: Arc<dyn HttpClient>,
}

impl Run {
    pub(crate) fn new(
        id: String,
        llm_evaluator: String,
        metrics: MetricFlags,
        client: Arc<dyn HttpClient>,
    ) -> Self {
        Self {
            id,
            llm_evaluator,
            metrics,
            client,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Evaluator model the run was requested with.
    pub fn llm_evaluator(&self) -> &str {
        &self.llm_evaluator
    }

    /// Effective metric set, after defaults were applied.
    pub fn metrics(&self) -> &MetricFlags {
        &self.metrics
    }

    pub fn client(&self) -> &Arc<dyn HttpClient> {
        &self.client
    }
}

impl fmt::Debug for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Run")
            .field("id", &self.id)
            .field("llm_evaluator", &self.llm_evaluator)
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}
