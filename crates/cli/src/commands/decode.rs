use std::path::PathBuf;

use alertsync_resolver::{decode, load_document};
use clap::Args;

use crate::OutputFormat;
use crate::commands::summary;

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Action definition file (`.toml`, `.yaml` or `.yml`).
    pub file: PathBuf,

    /// Decode as this action type instead of the one the file declares.
    #[arg(long = "type")]
    pub action_type: Option<String>,
}

pub fn run(args: &DecodeArgs, format: OutputFormat) -> anyhow::Result<()> {
    let data = load_document(&args.file)?;
    let action_type = args.action_type.as_deref().unwrap_or(&data.action_type);
    let action = decode(action_type, &data)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&action)?),
        OutputFormat::Text => {
            println!("{}", summary(&action));
            if !data.repository.is_empty() {
                println!("  repository: {}", data.repository);
            }
        }
    }
    Ok(())
}
