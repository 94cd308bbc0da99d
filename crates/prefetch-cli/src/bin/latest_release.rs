//! nix-prefetch-github-latest-release - prefetch the newest GitHub release

use anyhow::Result;
use clap::Parser;
use prefetch_cli::{commands::cmd_latest_release, init_logging, PrefetchOptions};

#[derive(Parser)]
#[command(name = "nix-prefetch-github-latest-release")]
#[command(about = "Prefetch the latest release of a GitHub repository", long_about = None)]
#[command(version)]
struct Cli {
    /// Repository owner (user or organisation)
    owner: String,

    /// Repository name
    repo: String,

    #[command(flatten)]
    options: PrefetchOptions,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.options.log_level);
    cmd_latest_release(cli.owner, cli.repo, cli.options)
}
