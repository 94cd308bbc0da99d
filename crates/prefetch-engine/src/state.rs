//! Probe/confirm state machine.
//!
//! Transitions are pure: a [`Stage`] names the [`Action`] the caller must
//! perform and [`Stage::advance`] consumes the resulting [`Observation`].
//! The orchestrator is the only place where actions touch the outside world.

use prefetch_core::{GithubRepository, PrefetchAttempt, PrefetchError, PrefetchResult, Result, Revision};
use prefetch_resolve::{CommandOutput, RevisionSource};

use crate::parsers::HashMismatchParser;

/// Inputs fixed for one prefetch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub repository: GithubRepository,
    pub source: RevisionSource,
    pub fetch_submodules: bool,
    /// Fetch again with the discovered hash so the store keeps the source
    pub confirm: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    ResolvingRevision,
    ProbingHash { revision: Revision },
    HashFound { revision: Revision, sha256: String },
    HashMissing { revision: Revision, output: CommandOutput },
    ConfirmingHash { revision: Revision, sha256: String },
    Done(PrefetchResult),
}

/// Work the caller has to do before the machine can advance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Resolve `plan.source` to a commit id
    Resolve,
    /// Render the attempt and run it through the build tool
    Prefetch(PrefetchAttempt),
    /// Nothing external, advance with `Observation::Nothing`
    Decide,
    Finish(PrefetchResult),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation {
    Resolved(Revision),
    Ran(CommandOutput),
    Nothing,
}

impl Stage {
    /// Explicit commit ids skip resolution
    pub fn initial(source: &RevisionSource) -> Self {
        match source.commit_id() {
            Some(revision) => Stage::ProbingHash {
                revision: revision.clone(),
            },
            None => Stage::ResolvingRevision,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Stage::ResolvingRevision => "ResolvingRevision",
            Stage::ProbingHash { .. } => "ProbingHash",
            Stage::HashFound { .. } => "HashFound",
            Stage::HashMissing { .. } => "HashMissing",
            Stage::ConfirmingHash { .. } => "ConfirmingHash",
            Stage::Done(_) => "Done",
        }
    }

    pub fn action(&self, plan: &Plan) -> Action {
        match self {
            Stage::ResolvingRevision => Action::Resolve,
            Stage::ProbingHash { revision } => Action::Prefetch(PrefetchAttempt::probe(
                plan.repository.clone(),
                revision.clone(),
                plan.fetch_submodules,
            )),
            Stage::HashFound { .. } | Stage::HashMissing { .. } => Action::Decide,
            Stage::ConfirmingHash { revision, sha256 } => Action::Prefetch(PrefetchAttempt::confirm(
                plan.repository.clone(),
                revision.clone(),
                sha256.clone(),
                plan.fetch_submodules,
            )),
            Stage::Done(result) => Action::Finish(result.clone()),
        }
    }

    pub fn advance(
        self,
        plan: &Plan,
        observation: Observation,
        parser: &HashMismatchParser,
    ) -> Result<Stage> {
        let stage = self.name();
        match (self, observation) {
            (Stage::ResolvingRevision, Observation::Resolved(revision)) => {
                Ok(Stage::ProbingHash { revision })
            }
            (Stage::ProbingHash { revision }, Observation::Ran(output)) => {
                match parser.extract_observed_hash(output.lines()) {
                    Some(sha256) => Ok(Stage::HashFound { revision, sha256 }),
                    None => Ok(Stage::HashMissing { revision, output }),
                }
            }
            (Stage::HashFound { revision, sha256 }, Observation::Nothing) => {
                if plan.confirm {
                    Ok(Stage::ConfirmingHash { revision, sha256 })
                } else {
                    Ok(Stage::Done(PrefetchResult { revision, sha256 }))
                }
            }
            (Stage::HashMissing { output, .. }, Observation::Nothing) => {
                Err(PrefetchError::HashNotDiscovered {
                    repository: plan.repository.to_string(),
                    exit_code: output.exit_code,
                    output: output.output,
                })
            }
            (Stage::ConfirmingHash { revision, sha256 }, Observation::Ran(output)) => {
                if output.success() {
                    Ok(Stage::Done(PrefetchResult { revision, sha256 }))
                } else {
                    Err(PrefetchError::ConfirmRunFailed {
                        repository: plan.repository.to_string(),
                        sha256,
                        exit_code: output.exit_code,
                        output: output.output,
                    })
                }
            }
            _ => Err(PrefetchError::InvalidTransition { stage }),
        }
    }
}
