//! nix-prefetch-github - determine the sha256 of a GitHub repository snapshot

use anyhow::Result;
use clap::Parser;
use prefetch_cli::{commands::cmd_prefetch, init_logging, PrefetchOptions};

#[derive(Parser)]
#[command(name = "nix-prefetch-github")]
#[command(about = "Prefetch sources from GitHub and print their Nix sha256", long_about = None)]
#[command(version)]
struct Cli {
    /// Repository owner (user or organisation)
    owner: String,

    /// Repository name
    repo: String,

    /// Commit, branch or tag to prefetch (default: HEAD of the default branch)
    #[arg(long)]
    rev: Option<String>,

    #[command(flatten)]
    options: PrefetchOptions,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.options.log_level);
    cmd_prefetch(cli.owner, cli.repo, cli.rev, cli.options)
}
