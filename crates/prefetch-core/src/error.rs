//! Error types shared by all prefetch crates

use std::path::PathBuf;

/// Errors raised while resolving a revision or discovering its hash
#[derive(Debug, thiserror::Error)]
pub enum PrefetchError {
    #[error("Remote '{remote}' is not a link to a github repository (url: {url})")]
    NotAGithubRemote { remote: String, url: String },

    #[error("Repository at {} does not contain any commits", .directory.display())]
    NoCommitsYet { directory: PathBuf },

    #[error(
        "Internal Error: Calculate hash value for sources in github repo {repository}{}.\n\noutput was: {output}",
        probe_note(.exit_code)
    )]
    HashNotDiscovered {
        repository: String,
        exit_code: i32,
        output: String,
    },

    #[error("Prefetching {repository} with the discovered hash {sha256} failed (exit code {exit_code}).\n\noutput was: {output}")]
    ConfirmRunFailed {
        repository: String,
        sha256: String,
        exit_code: i32,
        output: String,
    },

    #[error("No release found for {repository}")]
    ReleaseNotFound { repository: String },

    #[error("Revision '{rev}' not found on remote {repository}")]
    RefNotFound { repository: String, rev: String },

    #[error("Invalid repository: {0}")]
    InvalidRepository(String),

    #[error("Failed to run {program}: {source}")]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to list refs of {url}: {source}")]
    Git {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Invalid diagnostic pattern '{name}': {message}")]
    Pattern { name: &'static str, message: String },

    #[error("Prefetch state machine cannot leave {stage} with the given input")]
    InvalidTransition { stage: &'static str },
}

fn probe_note(exit_code: &i32) -> &'static str {
    if *exit_code == 0 {
        " (the probe build succeeded despite the placeholder hash)"
    } else {
        ""
    }
}

/// Result alias used across the workspace
pub type Result<T> = std::result::Result<T, PrefetchError>;
