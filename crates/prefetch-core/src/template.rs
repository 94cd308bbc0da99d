//! fetchFromGitHub template rendering

/// Renders the Nix expression describing a fixed-output fetch of
/// `owner/repo` at `rev`, pinned to `sha256`.
///
/// Every value is emitted as an escaped Nix string literal, so none of the
/// inputs can close the literal or start an interpolation.
///
/// Example output:
/// ```nix
/// let
///   pkgs = import <nixpkgs> {};
/// in
///   pkgs.fetchFromGitHub {
///     owner = "seppeljordan";
///     repo = "pypi2nix";
///     rev = "50553a665d2700c353ac41ab28c23b1027b7c1f0";
///     sha256 = "...";
///     fetchSubmodules = false;
///   }
/// ```
pub fn render(owner: &str, repo: &str, rev: &str, sha256: &str, fetch_submodules: bool) -> String {
    format!(
        r#"let
  pkgs = import <nixpkgs> {{}};
in
  pkgs.fetchFromGitHub {{
    owner = {};
    repo = {};
    rev = {};
    sha256 = {};
    fetchSubmodules = {};
  }}
"#,
        nix_string(owner),
        nix_string(repo),
        nix_string(rev),
        nix_string(sha256),
        fetch_submodules
    )
}

/// Quotes `value` as a double-quoted Nix string literal
pub fn nix_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '$' if chars.peek() == Some(&'{') => quoted.push_str("\\$"),
            other => quoted.push(other),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nix_string_escapes() {
        assert_eq!(nix_string("plain"), "\"plain\"");
        assert_eq!(nix_string("a\"b"), "\"a\\\"b\"");
        assert_eq!(nix_string("${x}"), "\"\\${x}\"");
        assert_eq!(nix_string("$x"), "\"$x\"");
        assert_eq!(nix_string("a\\b"), "\"a\\\\b\"");
    }

    #[test]
    fn test_render_contains_substitutions() {
        let nix = render("owner", "repo", "rev", "hash", true);
        assert!(nix.contains("owner = \"owner\";"));
        assert!(nix.contains("repo = \"repo\";"));
        assert!(nix.contains("rev = \"rev\";"));
        assert!(nix.contains("sha256 = \"hash\";"));
        assert!(nix.contains("fetchSubmodules = true;"));
    }
}
