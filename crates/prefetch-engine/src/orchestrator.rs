//! Effect-performing driver of the prefetch state machine

use prefetch_core::{GithubRepository, PrefetchAttempt, PrefetchError, PrefetchResult, Result};
use prefetch_resolve::{CommandOutput, CommandRunner, GithubRemote, Resolver, RevisionSource};
use std::fs;

use crate::parsers::HashMismatchParser;
use crate::state::{Action, Observation, Plan, Stage};

/// Name of the rendered expression inside the scratch directory
pub const TEMPLATE_FILE_NAME: &str = "prefetch-github.nix";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefetchConfig {
    /// Build tool invoked as `<nix_build> <file> --no-out-link`
    pub nix_build: String,
    /// Run the confirming fetch after the hash is known
    pub confirm: bool,
    pub fetch_submodules: bool,
}

impl Default for PrefetchConfig {
    fn default() -> Self {
        Self {
            nix_build: "nix-build".to_string(),
            confirm: false,
            fetch_submodules: false,
        }
    }
}

/// Drives resolve → probe → parse → confirm for one repository at a time
pub struct Prefetcher<'a> {
    runner: &'a dyn CommandRunner,
    resolver: Resolver<'a>,
    parser: HashMismatchParser,
    config: PrefetchConfig,
}

impl<'a> Prefetcher<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        github: &'a dyn GithubRemote,
        config: PrefetchConfig,
    ) -> Result<Self> {
        Ok(Self {
            runner,
            resolver: Resolver::new(runner, github),
            parser: HashMismatchParser::new()?,
            config,
        })
    }

    pub fn resolver(&self) -> &Resolver<'a> {
        &self.resolver
    }

    /// Discovers the sha256 of `repository` at the revision named by `source`
    pub fn prefetch(&self, repository: &GithubRepository, source: RevisionSource) -> Result<PrefetchResult> {
        let plan = Plan {
            repository: repository.clone(),
            source,
            fetch_submodules: self.config.fetch_submodules,
            confirm: self.config.confirm,
        };
        self.run_plan(&plan)
    }

    fn run_plan(&self, plan: &Plan) -> Result<PrefetchResult> {
        let mut stage = Stage::initial(&plan.source);
        loop {
            log::debug!("{}: {}", plan.repository, stage.name());
            let observation = match stage.action(plan) {
                Action::Resolve => {
                    Observation::Resolved(self.resolver.resolve(&plan.repository, &plan.source)?)
                }
                Action::Prefetch(attempt) => Observation::Ran(self.try_prefetch(&attempt)?),
                Action::Decide => Observation::Nothing,
                Action::Finish(result) => {
                    log::info!("{} at {} has sha256 {}", plan.repository, result.revision, result.sha256);
                    return Ok(result);
                }
            };
            stage = stage.advance(plan, observation, &self.parser)?;
        }
    }

    /// Writes the rendered attempt to a scratch directory and builds it.
    ///
    /// The directory is removed when this returns, whatever the outcome.
    pub fn try_prefetch(&self, attempt: &PrefetchAttempt) -> Result<CommandOutput> {
        if attempt.is_probe() {
            log::info!("Probing {} at {}", attempt.repository, attempt.revision);
        } else {
            log::info!(
                "Fetching {} at {} with sha256 {}",
                attempt.repository,
                attempt.revision,
                attempt.claimed_hash
            );
        }

        let scratch = tempfile::Builder::new()
            .prefix("nix-prefetch-github")
            .tempdir()
            .map_err(|source| PrefetchError::Io {
                context: "Failed to create temporary directory".to_string(),
                source,
            })?;
        let path = scratch.path().join(TEMPLATE_FILE_NAME);
        fs::write(&path, attempt.render()).map_err(|source| PrefetchError::Io {
            context: format!("Failed to write {}", path.display()),
            source,
        })?;

        let command = vec![
            self.config.nix_build.clone(),
            path.display().to_string(),
            "--no-out-link".to_string(),
        ];
        let output = self.runner.run(&command, None, true)?;
        log::debug!("{} output:\n{}", self.config.nix_build, output.output);
        Ok(output)
    }
}
