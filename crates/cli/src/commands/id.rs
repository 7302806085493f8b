use alertsync_core::identifier;
use clap::{Args, Subcommand};
use serde_json::json;

use crate::OutputFormat;

#[derive(Args, Debug)]
pub struct IdArgs {
    #[command(subcommand)]
    pub command: IdCommand,
}

#[derive(Subcommand, Debug)]
pub enum IdCommand {
    /// Build a composite id from a repository and an action name.
    Build {
        /// Repository name.
        repository: String,
        /// Action name.
        name: String,
    },
    /// Split a composite id into repository and action name.
    Parse {
        /// Composite id, e.g. `sandbox+action-email-test`.
        id: String,
    },
}

pub fn run(args: &IdArgs, format: OutputFormat) -> anyhow::Result<()> {
    match &args.command {
        IdCommand::Build { repository, name } => {
            println!("{}", identifier::encode(repository, name));
        }
        IdCommand::Parse { id } => {
            let (repository, name) = identifier::decode(id)?;
            match format {
                OutputFormat::Json => {
                    let parts = json!({ "repository": repository, "name": name });
                    println!("{}", serde_json::to_string_pretty(&parts)?);
                }
                OutputFormat::Text => {
                    println!("repository: {repository}");
                    println!("name:       {name}");
                }
            }
        }
    }
    Ok(())
}
