//! nix-prefetch-github-latest-release command implementation

use anyhow::Result;
use prefetch_core::{GithubRepository, PrefetchError};
use prefetch_engine::Prefetcher;
use prefetch_resolve::{GithubClient, Resolver, RevisionSource, SystemRunner};

use crate::options::PrefetchOptions;
use crate::output::{print_result, warn};

/// Chooses the revision source for the newest release.
///
/// A repository without releases falls back to the HEAD of its default
/// branch with a warning; every other failure is returned.
pub fn release_source(resolver: &Resolver<'_>, repository: &GithubRepository) -> Result<RevisionSource> {
    match resolver.latest_release(repository) {
        Ok(revision) => {
            log::info!("Using latest release of {} at {}", repository, revision);
            Ok(RevisionSource::Explicit(revision))
        }
        Err(PrefetchError::ReleaseNotFound { .. }) => {
            warn(&format!(
                "{} has no releases, using the HEAD of its default branch",
                repository
            ));
            log::info!("Falling back to the default branch of {}", repository);
            Ok(RevisionSource::DefaultBranch)
        }
        Err(e) => Err(e.into()),
    }
}

/// Prefetches the newest release, falling back to the default branch when
/// the repository has never published one
pub fn cmd_latest_release(owner: String, repo: String, options: PrefetchOptions) -> Result<()> {
    let repository = GithubRepository::new(owner, repo)?;
    let github = GithubClient::new(options.github_api.as_str())?;
    let prefetcher = Prefetcher::new(&SystemRunner, &github, options.config())?;

    let source = release_source(prefetcher.resolver(), &repository)?;
    let result = prefetcher.prefetch(&repository, source)?;
    print_result(&repository, &result, &options)
}
