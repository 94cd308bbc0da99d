//! Tests for the fetchFromGitHub template

use prefetch_core::render;
use rnix::ast::{self, AttrpathValue, Expr, InterpolPart};
use rowan::ast::AstNode;
use std::collections::HashMap;

/// Parses rendered Nix and returns every `name = "literal";` binding.
///
/// Panics on parse errors or interpolated strings.
fn string_bindings(nix: &str) -> HashMap<String, String> {
    let parsed = rnix::Root::parse(nix);
    assert!(parsed.errors().is_empty(), "parse errors: {:?}", parsed.errors());

    let mut bindings = HashMap::new();
    for node in parsed.tree().syntax().descendants() {
        let Some(kv) = AttrpathValue::cast(node) else { continue };
        let Some(attrpath) = kv.attrpath() else { continue };
        let Some(ast::Attr::Ident(ident)) = attrpath.attrs().next() else { continue };
        let Some(token) = ident.ident_token() else { continue };
        let Some(Expr::Str(s)) = kv.value() else { continue };

        let mut value = String::new();
        for part in s.normalized_parts() {
            match part {
                InterpolPart::Literal(text) => value.push_str(&text),
                InterpolPart::Interpolation(_) => panic!("unexpected interpolation in {}", nix),
            }
        }
        bindings.insert(token.text().to_string(), value);
    }
    bindings
}

#[test]
fn test_render_is_deterministic() {
    let a = render("seppeljordan", "pypi2nix", "master", "abc", false);
    let b = render("seppeljordan", "pypi2nix", "master", "abc", false);
    assert_eq!(a, b);
}

#[test]
fn test_render_parses_as_nix_with_all_substitutions() {
    let nix = render(
        "seppeljordan",
        "pypi2nix",
        "50553a665d2700c353ac41ab28c23b1027b7c1f0",
        "TEST_ACTUALHASH",
        false,
    );
    let bindings = string_bindings(&nix);
    assert_eq!(bindings["owner"], "seppeljordan");
    assert_eq!(bindings["repo"], "pypi2nix");
    assert_eq!(bindings["rev"], "50553a665d2700c353ac41ab28c23b1027b7c1f0");
    assert_eq!(bindings["sha256"], "TEST_ACTUALHASH");
    assert!(nix.contains("fetchSubmodules = false;"));
}

#[test]
fn test_render_values_cannot_escape_their_literal() {
    let hostile = [
        "\"; system = \"evil",
        "${builtins.readFile /etc/passwd}",
        "back\\slash\"",
        "line\nbreak\ttab",
    ];
    for value in hostile {
        let nix = render("owner", "repo", value, value, true);
        let bindings = string_bindings(&nix);
        assert_eq!(bindings["rev"], value);
        assert_eq!(bindings["sha256"], value);
        assert!(!bindings.contains_key("system"), "injection in {}", nix);
    }
}
