//! Known phrasings of the fixed-output hash mismatch diagnostic

use prefetch_core::{PrefetchError, Result};
use regex::Regex;

/// Header line of the multi-line mismatch diagnostic
pub const MISMATCH_HEADER: &str = r"hash mismatch in fixed-output derivation";

/// `(name, regex, after_header)` triples, tried in order on every line.
/// Group 1 captures the observed hash. Patterns with `after_header` only
/// apply once a [`MISMATCH_HEADER`] line has been seen.
pub const MISMATCH_PATTERNS: &[(&str, &str, bool)] = &[
    // nix 1.x:
    // output path ‘/nix/store/…’ has r:sha256 hash ‘0abc…’ when ‘1y4l…’ was expected
    ("output-path-has-hash", r"output path .* has .* hash (\S+) when ", false),
    // nix 2.0:
    // fixed-output derivation produced path '/nix/store/…' with sha256 hash '0abc…' instead of the expected hash '1y4l…'
    (
        "produced-path-with-hash",
        r"fixed-output derivation produced path .* with sha256 hash (\S+) instead of the expected hash",
        false,
    ),
    // nix 2.2, single line:
    // hash mismatch in fixed-output derivation '/nix/store/…': wanted: sha256:1y4l… got: sha256:0abc…
    (
        "hash-mismatch-wanted-got",
        r"hash mismatch in fixed-output derivation .*\bgot:\s+(\S+)",
        false,
    ),
    // nix 2.2 and later, multi-line: the header is followed by
    //   specified: sha256-…
    //      got:    sha256-…
    ("got-line", r"^\s*got:\s+(\S+)\s*$", true),
];

const QUOTES: &[char] = &['\'', '"', '`', '‘', '’'];

/// One compiled diagnostic phrasing
pub struct MismatchPattern {
    name: &'static str,
    regex: Regex,
    after_header: bool,
}

impl MismatchPattern {
    pub fn new(name: &'static str, pattern: &str, after_header: bool) -> Result<Self> {
        Ok(Self {
            name,
            regex: compile(name, pattern)?,
            after_header,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Only meaningful after a mismatch header line
    pub fn after_header(&self) -> bool {
        self.after_header
    }

    /// Hash reported on `line`, if the line is this phrasing
    pub fn capture(&self, line: &str) -> Option<String> {
        let raw = self.regex.captures(line)?.get(1)?.as_str();
        let hash = normalize_hash(raw);
        (!hash.is_empty()).then(|| hash.to_string())
    }
}

pub(crate) fn compile(name: &'static str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| PrefetchError::Pattern {
        name,
        message: e.to_string(),
    })
}

/// Strips quotes and a `sha256:` algorithm prefix; SRI hashes are kept whole
pub fn normalize_hash(raw: &str) -> &str {
    let unquoted = raw.trim_matches(QUOTES);
    unquoted.strip_prefix("sha256:").unwrap_or(unquoted)
}
