//! Prefetch Engine - Hash discovery for GitHub snapshots
//!
//! The engine asks `nix-build` to fetch a repository with a deliberately
//! wrong hash, reads the real hash from the resulting diagnostic and, when
//! requested, fetches again with that hash so the store keeps the source.
//!
//! Flow:
//!   1. Resolve the revision (skipped for explicit commit ids)
//!   2. Probe with [`prefetch_core::PLACEHOLDER_HASH`]
//!   3. Parse the mismatch diagnostic
//!   4. Optionally confirm with the discovered hash

mod orchestrator;
pub mod parsers;
pub mod state;

pub use orchestrator::{PrefetchConfig, Prefetcher, TEMPLATE_FILE_NAME};
pub use parsers::HashMismatchParser;
pub use state::{Action, Observation, Plan, Stage};
