use clap::{Args, Parser, Subcommand};
use validate_client::{ClientConfig, MetricFlags};

#[derive(Parser)]
#[command(
    name = "validate",
    version,
    about = "Create and inspect projects and runs on the Validate evaluation service"
)]
pub struct Cli {
    #[command(flatten)]
    pub api: ApiArgs,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create or inspect projects
    Project(ProjectArgs),
    /// Create runs
    Run(RunArgs),
}

#[derive(Args, Clone, Debug)]
pub struct ApiArgs {
    /// API base URL
    #[arg(long, global = true, env = "VALIDATE_API_URL")]
    pub url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "VALIDATE_API_TIMEOUT")]
    pub timeout: Option<u64>,
}

impl ApiArgs {
    pub fn config(&self) -> ClientConfig {
        let mut config = ClientConfig::default();
        if let Some(url) = &self.url {
            config = config.with_url(url.clone());
        }
        if let Some(secs) = self.timeout {
            config = config.with_timeout_secs(secs);
        }
        config
    }
}

#[derive(Args, Clone, Debug)]
pub struct ProjectArgs {
    #[command(subcommand)]
    pub cmd: ProjectCommand,
}

#[derive(Subcommand, Clone, Debug)]
pub enum ProjectCommand {
    /// Create a project bound to a benchmark
    Create(ProjectCreateArgs),
    /// Print a project's detail as returned by the service
    Get(ProjectGetArgs),
}

#[derive(Args, Clone, Debug)]
pub struct ProjectCreateArgs {
    /// Project display name
    #[arg(long)]
    pub name: String,

    /// Benchmark the project evaluates against
    #[arg(long)]
    pub benchmark_id: String,
}

#[derive(Args, Clone, Debug)]
pub struct ProjectGetArgs {
    /// Project id
    pub id: String,
}

#[derive(Args, Clone, Debug)]
pub struct RunArgs {
    #[command(subcommand)]
    pub cmd: RunCommand,
}

#[derive(Subcommand, Clone, Debug)]
pub enum RunCommand {
    /// Create a run in a project
    Create(RunCreateArgs),
}

#[derive(Args, Clone, Debug)]
pub struct RunCreateArgs {
    /// Project the run belongs to
    #[arg(long)]
    pub project_id: String,

    /// LLM used to grade answers
    #[arg(long)]
    pub llm_evaluator: String,

    #[command(flatten)]
    pub metrics: MetricArgs,
}

/// Metric selection. With no flags the default set is used.
#[derive(Args, Clone, Debug, Default)]
pub struct MetricArgs {
    #[arg(long)]
    pub answer_similarity_score: bool,

    #[arg(long)]
    pub retrieval_precision: bool,

    #[arg(long)]
    pub augmentation_precision: bool,

    #[arg(long)]
    pub augmentation_accuracy: bool,

    #[arg(long)]
    pub answer_consistency: bool,

    /// Not supported by the service yet
    #[arg(long)]
    pub answer_consistency_binary: bool,

    /// Not supported by the service yet
    #[arg(long)]
    pub retrieval_k_recall: bool,
}

impl From<&MetricArgs> for MetricFlags {
    fn from(args: &MetricArgs) -> Self {
        MetricFlags {
            answer_similarity_score: args.answer_similarity_score,
            retrieval_precision: args.retrieval_precision,
            augmentation_precision: args.augmentation_precision,
            augmentation_accuracy: args.augmentation_accuracy,
            answer_consistency: args.answer_consistency,
            answer_consistency_binary: args.answer_consistency_binary,
            retrieval_k_recall: args.retrieval_k_recall,
        }
    }
}
