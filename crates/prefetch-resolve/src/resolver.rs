//! Revision resolution strategies

use prefetch_core::{GithubRepository, PrefetchError, Result, Revision};
use std::path::Path;

use crate::git::{self, WorkingTree};
use crate::github::GithubRemote;
use crate::runner::CommandRunner;

/// Where the revision to prefetch comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevisionSource {
    /// A commit id, or a branch or tag name looked up on the remote
    Explicit(Revision),
    /// HEAD of the remote's default branch
    DefaultBranch,
    /// Commit of the newest published release
    LatestRelease,
}

impl RevisionSource {
    /// A commit id that needs no lookup at all
    pub fn commit_id(&self) -> Option<&Revision> {
        match self {
            RevisionSource::Explicit(rev) if rev.is_commit_id() => Some(rev),
            _ => None,
        }
    }
}

/// Turns a `RevisionSource` into a concrete commit id
pub struct Resolver<'a> {
    runner: &'a dyn CommandRunner,
    github: &'a dyn GithubRemote,
}

impl<'a> Resolver<'a> {
    pub fn new(runner: &'a dyn CommandRunner, github: &'a dyn GithubRemote) -> Self {
        Self { runner, github }
    }

    /// Resolves `source` for `repository`; the result is always a commit id
    /// unless the caller already supplied one verbatim
    pub fn resolve(&self, repository: &GithubRepository, source: &RevisionSource) -> Result<Revision> {
        if let Some(rev) = source.commit_id() {
            return Ok(rev.clone());
        }
        match source {
            RevisionSource::Explicit(name) => {
                log::info!("Resolving {} on {}", name, repository);
                self.github
                    .remote_list(repository)?
                    .resolve(name.as_str())
                    .ok_or_else(|| PrefetchError::RefNotFound {
                        repository: repository.to_string(),
                        rev: name.to_string(),
                    })
            }
            RevisionSource::DefaultBranch => {
                log::info!("Resolving default branch of {}", repository);
                self.github
                    .remote_list(repository)?
                    .head()
                    .ok_or_else(|| PrefetchError::RefNotFound {
                        repository: repository.to_string(),
                        rev: "HEAD".to_string(),
                    })
            }
            RevisionSource::LatestRelease => self.latest_release(repository),
        }
    }

    /// Commit of the newest release.
    ///
    /// Fails with `ReleaseNotFound` when the repository has no releases so
    /// the caller can fall back to another source.
    pub fn latest_release(&self, repository: &GithubRepository) -> Result<Revision> {
        let tag = self
            .github
            .latest_release_tag(repository)?
            .ok_or_else(|| PrefetchError::ReleaseNotFound {
                repository: repository.to_string(),
            })?;
        self.github
            .remote_list(repository)?
            .tag(&tag)
            .ok_or_else(|| PrefetchError::RefNotFound {
                repository: repository.to_string(),
                rev: tag,
            })
    }

    /// Repository, HEAD commit and working tree state of a local checkout
    /// tracking GitHub.
    ///
    /// A dirty tree is not an error; the caller decides how to warn about it.
    pub fn detect_directory(
        &self,
        directory: &Path,
        remote: &str,
    ) -> Result<(GithubRepository, Revision, WorkingTree)> {
        let repository = git::detect_github_repository(self.runner, directory, remote)?;
        let working_tree = git::check_working_tree(self.runner, directory)?;
        let revision = git::detect_revision(self.runner, directory)?;
        log::info!("Detected {} at {} ({:?})", repository, revision, working_tree);
        Ok((repository, revision, working_tree))
    }
}
