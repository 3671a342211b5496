use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{ParseError, Result};
use crate::rule::Rule;
use crate::types::{ErrorPolicy, ParseOptions};

/// Marker line that opens the private domains section
pub const PRIVATE_DOMAINS_MARKER: &str = "===BEGIN PRIVATE DOMAINS===";

/// Prefix of comment lines
pub const COMMENT_PREFIX: &str = "//";

/// Parse Public Suffix List rules from text.
///
/// Blank lines and `//` comments are skipped. Rules after the private domains
/// marker are flagged private, or not read at all when
/// [`ParseOptions::include_private`] is false. Malformed lines are handled
/// according to [`ParseOptions::error_policy`].
pub fn parse_rules(text: &str, options: &ParseOptions) -> Result<Vec<Rule>> {
    let mut rules = Vec::new();
    let mut private = false;
    let mut skipped = 0usize;

    for (line_num, line) in text.lines().enumerate() {
        let line_num = line_num + 1; // 1-based line numbers
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        // The marker itself sits inside a comment line, so check it first
        if line.contains(PRIVATE_DOMAINS_MARKER) {
            if !options.include_private {
                break;
            }
            private = true;
            continue;
        }

        if line.starts_with(COMMENT_PREFIX) {
            continue;
        }

        match Rule::parse(line) {
            Ok(rule) => rules.push(rule.with_private(private)),
            Err(e) => match options.error_policy {
                ErrorPolicy::Abort => return Err(e.at_line(line_num)),
                ErrorPolicy::Skip => {
                    warn!(line = line_num, error = %e, "skipping malformed rule");
                    skipped += 1;
                }
            },
        }
    }

    debug!(
        rules = rules.len(),
        private = rules.iter().filter(|r| r.is_private()).count(),
        skipped,
        "parsed public suffix rules"
    );

    Ok(rules)
}

/// Parse Public Suffix List rules from a local file.
pub fn parse_rules_from_file(
    path: impl AsRef<Path>,
    options: &ParseOptions,
) -> Result<Vec<Rule>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| ParseError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_rules(&text, options)
}
