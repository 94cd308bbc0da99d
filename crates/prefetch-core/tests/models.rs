//! Tests for core data models

use prefetch_core::{
    GithubRepository, PrefetchAttempt, PrefetchOutput, PrefetchResult, Revision, PLACEHOLDER_HASH,
};

// ── fixtures ─────────────────────────────────────────────────────────────────

const REV: &str = "50553a665d2700c353ac41ab28c23b1027b7c1f0";

fn pypi2nix() -> GithubRepository {
    GithubRepository::new("seppeljordan", "pypi2nix").unwrap()
}

// ── repository ───────────────────────────────────────────────────────────────

#[test]
fn test_repository_display_and_url() {
    let repo = pypi2nix();
    assert_eq!(repo.to_string(), "seppeljordan/pypi2nix");
    assert_eq!(repo.url(), "https://github.com/seppeljordan/pypi2nix.git");
}

#[test]
fn test_repository_accepts_dots_dashes_underscores() {
    assert!(GithubRepository::new("NixOS", "nixpkgs-channels").is_ok());
    assert!(GithubRepository::new("some_org", "repo.name").is_ok());
}

#[test]
fn test_repository_rejects_invalid_segments() {
    assert!(GithubRepository::new("", "repo").is_err());
    assert!(GithubRepository::new("owner", "").is_err());
    assert!(GithubRepository::new("owner/evil", "repo").is_err());
    assert!(GithubRepository::new("owner", "..").is_err());
    assert!(GithubRepository::new("owner", "re\"po").is_err());
}

// ── revision ─────────────────────────────────────────────────────────────────

#[test]
fn test_revision_commit_id_detection() {
    assert!(Revision::new(REV).is_commit_id());
    assert!(!Revision::new("master").is_commit_id());
    assert!(!Revision::new("v1.0.0").is_commit_id());
    // 39 characters
    assert!(!Revision::new(&REV[1..]).is_commit_id());
}

// ── attempts ─────────────────────────────────────────────────────────────────

#[test]
fn test_probe_and_confirm_attempts() {
    let probe = PrefetchAttempt::probe(pypi2nix(), Revision::new(REV), false);
    assert!(probe.is_probe());
    assert!(probe.render().contains(PLACEHOLDER_HASH));

    let confirm = PrefetchAttempt::confirm(
        pypi2nix(),
        Revision::new(REV),
        "TEST_ACTUALHASH".to_string(),
        false,
    );
    assert!(!confirm.is_probe());
    let nix = confirm.render();
    assert!(nix.contains("sha256 = \"TEST_ACTUALHASH\";"));
    assert!(!nix.contains(PLACEHOLDER_HASH));
}

// ── output ───────────────────────────────────────────────────────────────────

#[test]
fn test_output_json_keys() {
    let result = PrefetchResult {
        revision: Revision::new(REV),
        sha256: "TEST_ACTUALHASH".to_string(),
    };
    let json = PrefetchOutput::new(&pypi2nix(), &result, false).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["owner"], "seppeljordan");
    assert_eq!(value["repo"], "pypi2nix");
    assert_eq!(value["rev"], REV);
    assert_eq!(value["sha256"], "TEST_ACTUALHASH");
    assert!(value.get("fetchSubmodules").is_none());
}

#[test]
fn test_output_json_mentions_submodules_when_enabled() {
    let result = PrefetchResult {
        revision: Revision::new(REV),
        sha256: "abc".to_string(),
    };
    let output = PrefetchOutput::new(&pypi2nix(), &result, true);
    let value: serde_json::Value = serde_json::from_str(&output.to_json().unwrap()).unwrap();
    assert_eq!(value["fetchSubmodules"], true);
    assert!(output.to_nix().contains("fetchSubmodules = true;"));
}
