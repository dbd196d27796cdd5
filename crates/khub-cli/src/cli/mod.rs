//! CLI for the khub download client.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use khub_core::{config, Registries};

use commands::{run_config_path, run_resolve, run_resolvers};

/// Top-level CLI for the khub download client.
#[derive(Debug, Parser)]
#[command(name = "khub")]
#[command(about = "khub: resolve Kaggle models, datasets, competitions and notebook outputs", long_about = None)]
pub struct Cli {
    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Arguments shared by every resolve command.
#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Resource handle, e.g. `owner/model/framework/variation[/version]`.
    pub handle: String,

    /// File or directory inside the resource.
    #[arg(long)]
    pub path: Option<String>,

    /// Ignore anything already in the local cache.
    #[arg(long)]
    pub force_download: bool,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a model handle (`owner/model/framework/variation[/version]`).
    Model(ResolveArgs),

    /// Resolve a dataset handle (`owner/dataset[/versions/N]`).
    Dataset(ResolveArgs),

    /// Resolve a competition by its slug.
    Competition(ResolveArgs),

    /// Resolve a notebook's output (`owner/notebook[/versions/N]`).
    NotebookOutput(ResolveArgs),

    /// List each registry and its resolvers in the order they are tried.
    Resolvers,

    /// Print the path of the config file.
    ConfigPath,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let registries = Registries::from_config(&cfg)?;

        match cli.command {
            CliCommand::Model(args) => run_resolve(&registries.model, &args, cli.json)?,
            CliCommand::Dataset(args) => run_resolve(&registries.dataset, &args, cli.json)?,
            CliCommand::Competition(args) => {
                run_resolve(&registries.competition, &args, cli.json)?
            }
            CliCommand::NotebookOutput(args) => {
                run_resolve(&registries.notebook_output, &args, cli.json)?
            }
            CliCommand::Resolvers => run_resolvers(&registries),
            CliCommand::ConfigPath => run_config_path()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
