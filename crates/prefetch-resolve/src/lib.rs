//! Prefetch Resolve - Revision resolution and process plumbing
//!
//! This crate is responsible for:
//! - Running external commands and capturing their output
//! - Reading the GitHub remote and HEAD of a local working tree
//! - Looking up the latest release through the GitHub REST API
//! - Mapping branch and tag names to commit ids via the remote ref listing

pub mod git;
pub mod github;
mod resolver;
mod runner;

pub use github::{GithubClient, GithubRemote, RemoteList, DEFAULT_API_BASE};
pub use resolver::{Resolver, RevisionSource};
pub use runner::{CommandOutput, CommandRunner, SystemRunner};
