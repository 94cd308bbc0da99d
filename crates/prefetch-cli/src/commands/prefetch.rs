//! nix-prefetch-github command implementation

use anyhow::Result;
use prefetch_core::{GithubRepository, Revision};
use prefetch_engine::Prefetcher;
use prefetch_resolve::{GithubClient, RevisionSource, SystemRunner};

use crate::options::PrefetchOptions;
use crate::output::print_result;

/// Prefetches `owner/repo` at `rev`, or at the default branch HEAD
pub fn cmd_prefetch(owner: String, repo: String, rev: Option<String>, options: PrefetchOptions) -> Result<()> {
    let repository = GithubRepository::new(owner, repo)?;
    let github = GithubClient::new(options.github_api.as_str())?;
    let prefetcher = Prefetcher::new(&SystemRunner, &github, options.config())?;

    let source = match rev {
        Some(rev) => RevisionSource::Explicit(Revision::new(rev)),
        None => RevisionSource::DefaultBranch,
    };

    log::debug!("Prefetching {} from {:?}", repository, source);
    let result = prefetcher.prefetch(&repository, source)?;
    print_result(&repository, &result, &options)
}
