//! Result and warning printing

use anyhow::{Context, Result};
use colored::Colorize;
use prefetch_core::{GithubRepository, PrefetchOutput, PrefetchResult};

use crate::options::PrefetchOptions;

/// Prints the result to stdout as JSON, or as Nix with `--nix`
pub fn print_result(
    repository: &GithubRepository,
    result: &PrefetchResult,
    options: &PrefetchOptions,
) -> Result<()> {
    let output = PrefetchOutput::new(repository, result, options.fetch_submodules);
    if options.nix {
        print!("{}", output.to_nix());
    } else {
        let json = output.to_json().context("Failed to serialize result")?;
        println!("{}", json);
    }
    Ok(())
}

pub fn warn(message: &str) {
    eprintln!("{} {}", "WARNING:".yellow().bold(), message);
}
