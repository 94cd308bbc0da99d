//! Tests for command-level decisions that need no network or build tool

use prefetch_cli::commands::{release_source, working_tree_warning};
use prefetch_core::{GithubRepository, PrefetchError, Result, Revision};
use prefetch_resolve::git::WorkingTree;
use prefetch_resolve::{GithubRemote, RemoteList, Resolver, RevisionSource, SystemRunner};
use std::io;
use std::path::Path;

// ── fixtures ─────────────────────────────────────────────────────────────────

const RELEASE: &str = "0123456789abcdef0123456789abcdef01234567";

enum Releases {
    Published,
    None,
    Broken,
}

struct FakeGithub(Releases);

impl GithubRemote for FakeGithub {
    fn latest_release_tag(&self, _repository: &GithubRepository) -> Result<Option<String>> {
        match self.0 {
            Releases::Published => Ok(Some("v1.0".to_string())),
            Releases::None => Ok(None),
            Releases::Broken => Err(PrefetchError::Http {
                url: "https://api.github.com/repos/seppeljordan/pypi2nix/releases/latest".to_string(),
                source: Box::new(io::Error::new(io::ErrorKind::Other, "500 Internal Server Error")),
            }),
        }
    }

    fn remote_list(&self, _repository: &GithubRepository) -> Result<RemoteList> {
        Ok(RemoteList::new([("refs/tags/v1.0", RELEASE)]))
    }
}

fn repo() -> GithubRepository {
    GithubRepository::new("seppeljordan", "pypi2nix").unwrap()
}

// ── latest release fallback ──────────────────────────────────────────────────

#[test]
fn test_release_source_uses_published_release() {
    let github = FakeGithub(Releases::Published);
    let resolver = Resolver::new(&SystemRunner, &github);
    let source = release_source(&resolver, &repo()).unwrap();
    assert_eq!(source, RevisionSource::Explicit(Revision::new(RELEASE)));
}

#[test]
fn test_release_source_falls_back_to_default_branch() {
    let github = FakeGithub(Releases::None);
    let resolver = Resolver::new(&SystemRunner, &github);
    let source = release_source(&resolver, &repo()).unwrap();
    assert_eq!(source, RevisionSource::DefaultBranch);
}

#[test]
fn test_release_source_propagates_other_failures() {
    let github = FakeGithub(Releases::Broken);
    let resolver = Resolver::new(&SystemRunner, &github);
    let err = release_source(&resolver, &repo()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PrefetchError>(),
        Some(PrefetchError::Http { .. })
    ));
}

// ── dirty working tree ───────────────────────────────────────────────────────

#[test]
fn test_working_tree_warning() {
    let dir = Path::new("/work/pypi2nix");
    assert_eq!(working_tree_warning(dir, WorkingTree::Clean), None);
    let message = working_tree_warning(dir, WorkingTree::Dirty).unwrap();
    assert!(message.contains("/work/pypi2nix"));
    assert!(message.contains("dirty"));
}
