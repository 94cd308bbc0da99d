//! Command implementations

mod directory;
mod latest_release;
mod prefetch;

pub use directory::{cmd_directory, working_tree_warning};
pub use latest_release::{cmd_latest_release, release_source};
pub use prefetch::cmd_prefetch;
