//! CLI commands: validate project create | get
//!
//! Usage:
//!   validate project create --name "Proj A" --benchmark-id bench-123
//!   validate project get <ID>

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use serde_json::json;
use validate_client::{Benchmark, HttpClient, Project};

use crate::cli::args::{ProjectCreateArgs, ProjectGetArgs};

pub fn create(
    client: Arc<dyn HttpClient>,
    args: &ProjectCreateArgs,
    out: &mut impl Write,
) -> Result<()> {
    // new_project only needs the client, not the handle's own fields.
    let scope = Project::new("", Benchmark::default(), "", client);
    let id = scope.new_project(&args.name, &args.benchmark_id)?;
    tracing::info!(project_id = %id, name = %args.name, "project created");

    writeln!(out, "{}", serde_json::to_string_pretty(&json!({ "id": id }))?)?;
    Ok(())
}

pub fn get(client: Arc<dyn HttpClient>, args: &ProjectGetArgs, out: &mut impl Write) -> Result<()> {
    let scope = Project::new("", Benchmark::default(), "", client);
    let body = scope.get_project(&args.id)?;

    writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
    Ok(())
}
