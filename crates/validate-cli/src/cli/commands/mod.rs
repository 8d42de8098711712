use std::sync::Arc;

use anyhow::Result;
use validate_client::{HttpClient, RestClient};

use super::args::*;

pub mod project;
pub mod run;

use crate::exit_codes::SUCCESS;

pub fn dispatch(cli: Cli) -> Result<i32> {
    let client: Arc<dyn HttpClient> = Arc::new(RestClient::new(cli.api.config())?);
    let mut out = std::io::stdout().lock();

    match cli.cmd {
        Command::Project(args) => match args.cmd {
            ProjectCommand::Create(args) => project::create(client, &args, &mut out)?,
            ProjectCommand::Get(args) => project::get(client, &args, &mut out)?,
        },
        Command::Run(args) => match args.cmd {
            RunCommand::Create(args) => run::create(client, &args, &mut out)?,
        },
    }

    Ok(SUCCESS)
}
