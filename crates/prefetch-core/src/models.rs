//! Core data models for prefetching

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PrefetchError, Result};
use crate::template;
use crate::PLACEHOLDER_HASH;

/// A repository hosted on GitHub, identified by owner and name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct GithubRepository {
    pub owner: String,
    pub name: String,
}

impl GithubRepository {
    /// Creates a repository reference, rejecting values that are not a
    /// single GitHub path segment
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let owner = owner.into();
        let name = name.into();
        for segment in [&owner, &name] {
            if !is_path_segment(segment) {
                return Err(PrefetchError::InvalidRepository(format!(
                    "'{}' is not a valid GitHub owner or repository name",
                    segment
                )));
            }
        }
        Ok(Self { owner, name })
    }

    /// Clone URL used for listing remote refs
    pub fn url(&self) -> String {
        format!("https://github.com/{}/{}.git", self.owner, self.name)
    }
}

fn is_path_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

impl fmt::Display for GithubRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// A git revision: a commit id, or a branch/tag name before resolution
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Revision(String);

impl Revision {
    pub fn new(rev: impl Into<String>) -> Self {
        Self(rev.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for a full 40-character hexadecimal object id
    pub fn is_commit_id(&self) -> bool {
        self.0.len() == 40 && self.0.chars().all(|c| c.is_ascii_hexdigit())
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One build attempt of a fixed-output fetch.
///
/// Created per probe or confirm round and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefetchAttempt {
    pub repository: GithubRepository,
    pub revision: Revision,
    pub claimed_hash: String,
    pub fetch_submodules: bool,
}

impl PrefetchAttempt {
    /// Attempt claiming the placeholder hash, expected to fail
    pub fn probe(repository: GithubRepository, revision: Revision, fetch_submodules: bool) -> Self {
        Self {
            repository,
            revision,
            claimed_hash: PLACEHOLDER_HASH.to_string(),
            fetch_submodules,
        }
    }

    /// Attempt claiming a previously discovered hash, expected to succeed
    pub fn confirm(
        repository: GithubRepository,
        revision: Revision,
        sha256: String,
        fetch_submodules: bool,
    ) -> Self {
        Self {
            repository,
            revision,
            claimed_hash: sha256,
            fetch_submodules,
        }
    }

    pub fn is_probe(&self) -> bool {
        self.claimed_hash == PLACEHOLDER_HASH
    }

    /// Renders the Nix expression handed to the build tool
    pub fn render(&self) -> String {
        template::render(
            &self.repository.owner,
            &self.repository.name,
            self.revision.as_str(),
            &self.claimed_hash,
            self.fetch_submodules,
        )
    }
}

/// Outcome of a successful prefetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefetchResult {
    pub revision: Revision,
    /// The discovered hash, never the placeholder
    pub sha256: String,
}

/// JSON document printed by the CLI
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrefetchOutput {
    pub owner: String,
    pub repo: String,
    pub rev: String,
    pub sha256: String,
    #[serde(
        rename = "fetchSubmodules",
        default,
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub fetch_submodules: bool,
}

impl PrefetchOutput {
    pub fn new(repository: &GithubRepository, result: &PrefetchResult, fetch_submodules: bool) -> Self {
        Self {
            owner: repository.owner.clone(),
            repo: repository.name.clone(),
            rev: result.revision.as_str().to_string(),
            sha256: result.sha256.clone(),
            fetch_submodules,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Generates the fetchFromGitHub expression pinned to this output
    pub fn to_nix(&self) -> String {
        template::render(&self.owner, &self.repo, &self.rev, &self.sha256, self.fetch_submodules)
    }
}
