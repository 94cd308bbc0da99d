//! Parsers for build tool diagnostics.
//!
//! Primary entry point: [`HashMismatchParser::extract_observed_hash`]
//!
//! Each phrasing the build tool has used for a fixed-output hash mismatch
//! is an independent pattern in [`patterns::MISMATCH_PATTERNS`]; supporting a
//! new tool version means appending to that list.

pub mod patterns;

use prefetch_core::Result;
use regex::Regex;

use patterns::MismatchPattern;

/// Extracts the observed hash from the output of a failed build
pub struct HashMismatchParser {
    header: Regex,
    patterns: Vec<MismatchPattern>,
}

impl HashMismatchParser {
    /// Compiles all known diagnostic phrasings
    pub fn new() -> Result<Self> {
        let patterns = patterns::MISMATCH_PATTERNS
            .iter()
            .map(|&(name, pattern, after_header)| MismatchPattern::new(name, pattern, after_header))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            header: patterns::compile("mismatch-header", patterns::MISMATCH_HEADER)?,
            patterns,
        })
    }

    /// Scans `lines` in order and returns the hash reported by the first
    /// line matching any phrasing, quotes stripped.
    ///
    /// A bare `got:` line only counts after a mismatch header, so unrelated
    /// build log lines of that shape are ignored.
    ///
    /// `None` means the output holds no recognised mismatch diagnostic.
    pub fn extract_observed_hash<'l, I>(&self, lines: I) -> Option<String>
    where
        I: IntoIterator<Item = &'l str>,
    {
        let mut seen_header = false;
        for line in lines {
            let hash = self
                .patterns
                .iter()
                .filter(|pattern| seen_header || !pattern.after_header())
                .find_map(|pattern| {
                    let hash = pattern.capture(line)?;
                    log::debug!("[{}] matched: {}", pattern.name(), line.trim());
                    Some(hash)
                });
            if hash.is_some() {
                return hash;
            }
            seen_header |= self.header.is_match(line);
        }
        None
    }
}
