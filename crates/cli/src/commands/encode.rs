use std::path::PathBuf;

use alertsync_core::Action;
use alertsync_resolver::{DocumentFormat, encode, render_document};
use anyhow::Context;
use clap::{Args, ValueEnum};

use crate::config::CliConfig;
use crate::commands::resolve_repository;

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Canonical action as JSON. Reads stdin when omitted.
    pub file: Option<PathBuf>,

    /// Document format to write.
    #[arg(long, value_enum, default_value = "toml")]
    pub to: TargetFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TargetFormat {
    Toml,
    Yaml,
}

impl From<TargetFormat> for DocumentFormat {
    fn from(format: TargetFormat) -> Self {
        match format {
            TargetFormat::Toml => Self::Toml,
            TargetFormat::Yaml => Self::Yaml,
        }
    }
}

pub fn run(args: &EncodeArgs, config: &CliConfig) -> anyhow::Result<()> {
    let content = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?,
        None => std::io::read_to_string(std::io::stdin()).context("cannot read stdin")?,
    };
    let action: Action = serde_json::from_str(&content).context("invalid action JSON")?;

    let mut data = encode(&action);
    resolve_repository(&mut data, config)?;
    print!("{}", render_document(&data, args.to.into())?);
    Ok(())
}
