use std::path::PathBuf;
use std::sync::Arc;

use alertsync_resolver::{decode_declared, load_document};
use alertsync_store::{ActionResource, MemoryActionStore};
use anyhow::Context;
use clap::Args;
use serde_json::json;
use tracing::info;

use crate::OutputFormat;
use crate::commands::{resolve_repository, summary};
use crate::config::CliConfig;

#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Action definition files to create.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Create every definition against a fresh in-memory store.
///
/// Nothing leaves the process. This catches definitions that fail to
/// decode and name collisions between files before they reach a real
/// service.
pub async fn run(args: &ApplyArgs, config: &CliConfig) -> anyhow::Result<()> {
    let store = Arc::new(MemoryActionStore::new());
    let resource = ActionResource::new(store.clone());
    let mut applied = Vec::with_capacity(args.files.len());

    for file in &args.files {
        let mut data = load_document(file)?;
        resolve_repository(&mut data, config)?;
        resource
            .create(&mut data)
            .await
            .with_context(|| format!("{}", file.display()))?;
        let action = decode_declared(&data)?;
        info!(id = %data.id, file = %file.display(), "definition applied");
        applied.push((data.id, action));
    }

    match config.output {
        OutputFormat::Json => {
            let out: Vec<_> = applied
                .iter()
                .map(|(id, action)| json!({ "id": id, "action": action }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text => {
            println!("{} actions applied (dry run, {} stored):", applied.len(), store.len());
            for (id, action) in &applied {
                println!("  {id}: {}", summary(action));
            }
        }
    }
    Ok(())
}
