//! GitHub REST API and remote ref listing

use prefetch_core::{GithubRepository, PrefetchError, Result, Revision};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Public GitHub REST endpoint
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Refs advertised by a remote, keyed by full ref name
/// (`HEAD`, `refs/heads/main`, `refs/tags/v1.0`, `refs/tags/v1.0^{}`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteList {
    refs: BTreeMap<String, String>,
}

impl RemoteList {
    pub fn new<I, K, V>(refs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            refs: refs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Commit the remote's HEAD points to
    pub fn head(&self) -> Option<Revision> {
        self.get("HEAD")
    }

    pub fn branch(&self, name: &str) -> Option<Revision> {
        self.get(&format!("refs/heads/{}", name))
    }

    /// Commit of a tag; annotated tags resolve to their peeled commit
    pub fn tag(&self, name: &str) -> Option<Revision> {
        self.get(&format!("refs/tags/{}^{{}}", name))
            .or_else(|| self.get(&format!("refs/tags/{}", name)))
    }

    /// Resolves a symbolic name: full ref, tag, then branch
    pub fn resolve(&self, name: &str) -> Option<Revision> {
        if name == "HEAD" {
            return self.head();
        }
        if let Some(short) = name.strip_prefix("refs/tags/") {
            return self.tag(short);
        }
        if let Some(short) = name.strip_prefix("refs/heads/") {
            return self.branch(short);
        }
        self.tag(name).or_else(|| self.branch(name))
    }

    fn get(&self, full_name: &str) -> Option<Revision> {
        self.refs.get(full_name).map(Revision::new)
    }
}

/// Remote lookups needed to turn names into commit ids
pub trait GithubRemote {
    /// Tag name of the newest published release, `None` if there is none
    fn latest_release_tag(&self, repository: &GithubRepository) -> Result<Option<String>>;

    /// Refs advertised by the repository's git remote
    fn remote_list(&self, repository: &GithubRepository) -> Result<RemoteList>;
}

#[derive(Deserialize)]
struct LatestRelease {
    tag_name: String,
}

/// Talks to GitHub over HTTPS: REST via reqwest, ref listing via libgit2
pub struct GithubClient {
    http: Client,
    api_base: String,
}

impl GithubClient {
    pub fn new(api_base: impl Into<String>) -> Result<Self> {
        let api_base = api_base.into().trim_end_matches('/').to_string();
        let http = Client::builder()
            .user_agent(concat!("nix-prefetch-github/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PrefetchError::Http {
                url: api_base.clone(),
                source: Box::new(e),
            })?;
        Ok(Self { http, api_base })
    }

    fn latest_release_url(&self, repository: &GithubRepository) -> String {
        format!(
            "{}/repos/{}/{}/releases/latest",
            self.api_base, repository.owner, repository.name
        )
    }
}

impl GithubRemote for GithubClient {
    fn latest_release_tag(&self, repository: &GithubRepository) -> Result<Option<String>> {
        let url = self.latest_release_url(repository);
        let http_err = |e: reqwest::Error| PrefetchError::Http {
            url: url.clone(),
            source: Box::new(e),
        };

        log::debug!("GET {}", url);
        let response = self.http.get(&url).send().map_err(http_err)?;
        if response.status() == StatusCode::NOT_FOUND {
            log::info!("{} has no published release", repository);
            return Ok(None);
        }

        let release: LatestRelease = response
            .error_for_status()
            .map_err(http_err)?
            .json()
            .map_err(http_err)?;
        log::info!("Latest release of {} is {}", repository, release.tag_name);
        Ok(Some(release.tag_name))
    }

    fn remote_list(&self, repository: &GithubRepository) -> Result<RemoteList> {
        let url = repository.url();
        let git_err = |e: git2::Error| PrefetchError::Git {
            url: url.clone(),
            source: Box::new(e),
        };

        log::debug!("Listing refs of {}", url);
        let mut remote = git2::Remote::create_detached(url.as_str()).map_err(git_err)?;
        remote.connect(git2::Direction::Fetch).map_err(git_err)?;
        let refs: Vec<(String, String)> = remote
            .list()
            .map_err(git_err)?
            .iter()
            .map(|head| (head.name().to_string(), head.oid().to_string()))
            .collect();
        remote.disconnect().map_err(git_err)?;

        log::debug!("{} advertised {} refs", url, refs.len());
        Ok(RemoteList::new(refs))
    }
}
