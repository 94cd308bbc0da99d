//! Flags shared by all binaries

use clap::Args;
use prefetch_engine::PrefetchConfig;
use prefetch_resolve::DEFAULT_API_BASE;

#[derive(Args, Debug, Clone)]
pub struct PrefetchOptions {
    /// Only calculate the hash, do not keep the source in the Nix store (default)
    #[arg(long, overrides_with = "no_hash_only")]
    pub hash_only: bool,

    /// Fetch the source into the Nix store again using the discovered hash
    #[arg(long, overrides_with = "hash_only")]
    pub no_hash_only: bool,

    /// Include git submodules in the fetched source
    #[arg(long)]
    pub fetch_submodules: bool,

    /// Print a fetchFromGitHub expression instead of JSON
    #[arg(long)]
    pub nix: bool,

    /// Build tool used to realise the fetch
    #[arg(long, value_name = "PROGRAM", default_value = "nix-build")]
    pub nix_build: String,

    /// Base URL of the GitHub REST API
    #[arg(long, value_name = "URL", default_value = DEFAULT_API_BASE)]
    pub github_api: String,

    /// Log level
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl PrefetchOptions {
    pub fn config(&self) -> PrefetchConfig {
        PrefetchConfig {
            nix_build: self.nix_build.clone(),
            confirm: self.no_hash_only,
            fetch_submodules: self.fetch_submodules,
        }
    }
}
