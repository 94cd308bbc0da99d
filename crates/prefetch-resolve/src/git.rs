//! Local git working tree queries, run through a `CommandRunner`

use prefetch_core::{GithubRepository, PrefetchError, Result, Revision};
use regex::Regex;
use std::path::Path;

use crate::runner::CommandRunner;

/// State reported by `git diff HEAD --quiet`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkingTree {
    Clean,
    Dirty,
}

fn git(args: &[&str]) -> Vec<String> {
    std::iter::once("git")
        .chain(args.iter().copied())
        .map(String::from)
        .collect()
}

/// Extracts owner and name from an ssh or https GitHub URL
pub fn parse_github_url(url: &str) -> Option<GithubRepository> {
    let re = Regex::new(
        r"^(?:git@github\.com:|https://github\.com/)([^/\s]+)/([^/\s]+?)(?:\.git)?/?$",
    )
    .ok()?;
    let caps = re.captures(url.trim())?;
    GithubRepository::new(caps.get(1)?.as_str(), caps.get(2)?.as_str()).ok()
}

/// Reads the URL of `remote` and maps it to a GitHub repository
pub fn detect_github_repository(
    runner: &dyn CommandRunner,
    directory: &Path,
    remote: &str,
) -> Result<GithubRepository> {
    let out = runner.run(&git(&["remote", "get-url", remote]), Some(directory), false)?;
    parse_github_url(&out.output).ok_or_else(|| PrefetchError::NotAGithubRemote {
        remote: remote.to_string(),
        url: out.output.trim().to_string(),
    })
}

/// Reads the commit id of HEAD
pub fn detect_revision(runner: &dyn CommandRunner, directory: &Path) -> Result<Revision> {
    let out = runner.run(&git(&["rev-parse", "HEAD"]), Some(directory), false)?;
    if !out.success() {
        return Err(PrefetchError::RefNotFound {
            repository: directory.display().to_string(),
            rev: "HEAD".to_string(),
        });
    }
    let rev = out.output.strip_suffix('\n').unwrap_or(&out.output);
    Ok(Revision::new(rev))
}

/// Checks for uncommitted changes.
///
/// Exit code 128 means the repository has no commits and is reported as
/// `NoCommitsYet`, not as a dirty tree.
pub fn check_working_tree(runner: &dyn CommandRunner, directory: &Path) -> Result<WorkingTree> {
    let out = runner.run(&git(&["diff", "HEAD", "--quiet"]), Some(directory), false)?;
    match out.exit_code {
        0 => Ok(WorkingTree::Clean),
        128 => Err(PrefetchError::NoCommitsYet {
            directory: directory.to_path_buf(),
        }),
        _ => Ok(WorkingTree::Dirty),
    }
}
