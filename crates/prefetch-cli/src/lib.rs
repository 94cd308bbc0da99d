//! nix-prefetch-github CLI - shared command implementations
//!
//! Three binaries are built from this crate:
//! - `nix-prefetch-github OWNER REPO` prefetches an explicit or default revision
//! - `nix-prefetch-github-directory` prefetches HEAD of a local checkout
//! - `nix-prefetch-github-latest-release OWNER REPO` prefetches the newest release

pub mod commands;
pub mod options;
mod output;

pub use options::PrefetchOptions;

/// Configures the logger; `RUST_LOG` takes precedence over `level`
pub fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
