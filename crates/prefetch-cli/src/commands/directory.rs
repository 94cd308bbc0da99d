//! nix-prefetch-github-directory command implementation

use anyhow::{Context, Result};
use prefetch_engine::Prefetcher;
use prefetch_resolve::git::WorkingTree;
use prefetch_resolve::{GithubClient, RevisionSource, SystemRunner};
use std::path::{Path, PathBuf};

use crate::options::PrefetchOptions;
use crate::output::{print_result, warn};

/// Warning shown for a checkout with uncommitted changes
pub fn working_tree_warning(directory: &Path, working_tree: WorkingTree) -> Option<String> {
    match working_tree {
        WorkingTree::Clean => None,
        WorkingTree::Dirty => Some(format!(
            "Git repository at {} is dirty, the hash is calculated for HEAD without uncommitted changes",
            directory.display()
        )),
    }
}

/// Prefetches the commit checked out in a local working tree
pub fn cmd_directory(directory: Option<PathBuf>, remote: String, options: PrefetchOptions) -> Result<()> {
    let directory = match directory {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };
    log::debug!("Inspecting {} (remote {})", directory.display(), remote);

    let github = GithubClient::new(options.github_api.as_str())?;
    let prefetcher = Prefetcher::new(&SystemRunner, &github, options.config())?;

    let (repository, revision, working_tree) =
        prefetcher.resolver().detect_directory(&directory, &remote)?;
    if let Some(message) = working_tree_warning(&directory, working_tree) {
        warn(&message);
    }

    let result = prefetcher.prefetch(&repository, RevisionSource::Explicit(revision))?;
    print_result(&repository, &result, &options)
}
