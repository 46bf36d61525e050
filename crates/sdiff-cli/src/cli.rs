use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sdiff",
    about = "sectiondiff: incremental change sets for keyed, sectioned lists",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with engine settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute the change set between two snapshot files
    Diff(DiffArgs),
    /// Feed profile payloads through the view model in order
    Replay(ReplayArgs),
    /// Show the effective engine configuration
    Config,
}

#[derive(Args)]
pub struct DiffArgs {
    pub old: PathBuf,
    pub new: PathBuf,
    /// Treat both files as profile payloads instead of snapshot documents
    #[arg(long)]
    pub profile: bool,
}

#[derive(Args)]
pub struct ReplayArgs {
    #[arg(required = true)]
    pub payloads: Vec<PathBuf>,
    /// Apply every change set to a rendered list and check its consistency
    #[arg(long)]
    pub verify: bool,
}
