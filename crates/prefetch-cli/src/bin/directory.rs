//! nix-prefetch-github-directory - prefetch HEAD of a local GitHub checkout

use anyhow::Result;
use clap::Parser;
use prefetch_cli::{commands::cmd_directory, init_logging, PrefetchOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nix-prefetch-github-directory")]
#[command(about = "Prefetch the commit checked out in a local GitHub repository", long_about = None)]
#[command(version)]
struct Cli {
    /// Working tree to inspect (default: current directory)
    #[arg(long)]
    directory: Option<PathBuf>,

    /// Git remote pointing at GitHub
    #[arg(long, default_value = "origin")]
    remote: String,

    #[command(flatten)]
    options: PrefetchOptions,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.options.log_level);
    cmd_directory(cli.directory, cli.remote, cli.options)
}
