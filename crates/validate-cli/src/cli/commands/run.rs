//! CLI command: validate run create
//!
//! Usage:
//!   validate run create --project-id P --llm-evaluator gpt-4 [--retrieval-precision ...]

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::json;
use validate_client::{HttpClient, MetricFlags, Project};

use crate::cli::args::RunCreateArgs;

pub fn create(client: Arc<dyn HttpClient>, args: &RunCreateArgs, out: &mut impl Write) -> Result<()> {
    let flags = MetricFlags::from(&args.metrics);
    // Reject unsupported metrics before looking the project up.
    flags.effective()?;

    let project = Project::fetch(client, &args.project_id)
        .with_context(|| format!("loading project {}", args.project_id))?;
    let run = project.new_run(&args.llm_evaluator, flags)?;
    tracing::info!(run_id = %run.id(), project_id = %project.id(), "run created");

    let metrics: Vec<&str> = run.metrics().enabled().iter().map(|m| m.as_str()).collect();
    let summary = json!({
        "id": run.id(),
        "project_id": project.id(),
        "llm_evaluator": run.llm_evaluator(),
        "metrics": metrics,
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
    Ok(())
}
