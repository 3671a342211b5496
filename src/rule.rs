//! Public Suffix List rules.
//!
//! A rule is one line of the list in one of three forms:
//!
//! | Form | Example | Public suffix of `a.b.example.uk` |
//! |------|---------|-----------------------------------|
//! | Normal | `uk` | `uk` |
//! | Wildcard | `*.uk` | `example.uk` |
//! | Exception | `!example.uk` | `uk` |

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ParseError, Result, RuleErrorKind};
use crate::types::RuleKind;

/// Implicit rule used when nothing in the list matches: every name has at
/// least a one-label public suffix.
static DEFAULT_RULE: Rule = Rule {
    kind: RuleKind::Wildcard,
    value: String::new(),
    labels: Vec::new(),
    specificity: 0,
    private: false,
};

/// A single parsed Public Suffix List rule
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Rule {
    kind: RuleKind,
    /// Literal labels joined by dots, without the `*.` or `!` marker
    value: String,
    #[serde(skip)]
    labels: Vec<String>,
    specificity: usize,
    private: bool,
}

impl Rule {
    /// Parse one trimmed, non-comment rule line.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        if line.is_empty() {
            return Err(invalid(RuleErrorKind::Empty, line));
        }

        let lower = line.to_lowercase();
        let (kind, value) = if let Some(rest) = lower.strip_prefix('*') {
            match rest.strip_prefix('.') {
                _ if rest.is_empty() => (RuleKind::Wildcard, ""),
                Some(value) if !value.is_empty() => (RuleKind::Wildcard, value),
                _ => return Err(invalid(RuleErrorKind::DanglingWildcard, line)),
            }
        } else if let Some(rest) = lower.strip_prefix('!') {
            if rest.is_empty() {
                return Err(invalid(RuleErrorKind::DanglingException, line));
            }
            (RuleKind::Exception, rest)
        } else {
            (RuleKind::Normal, lower.as_str())
        };

        let labels: Vec<String> = if value.is_empty() {
            Vec::new()
        } else {
            value.split('.').map(str::to_string).collect()
        };
        if labels.iter().any(String::is_empty) {
            return Err(invalid(RuleErrorKind::EmptyLabel, line));
        }

        let specificity = match kind {
            RuleKind::Normal => labels.len(),
            RuleKind::Wildcard => labels.len() + 1,
            // The leading label of an exception is registrable, not part of the suffix
            RuleKind::Exception => labels.len() - 1,
        };

        Ok(Self {
            kind,
            value: value.to_string(),
            labels,
            specificity,
            private: false,
        })
    }

    /// The implicit `*` rule with specificity 0.
    pub fn default_rule() -> &'static Rule {
        &DEFAULT_RULE
    }

    /// Mark the rule as coming from the private domains section.
    pub fn with_private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Literal label text without the wildcard/exception marker.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Literal labels, left to right.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Label count used to pick the longest match.
    pub fn specificity(&self) -> usize {
        self.specificity
    }

    pub fn is_private(&self) -> bool {
        self.private
    }

    /// Check if the rule applies to `name`.
    ///
    /// Labels are compared right to left; every literal label must equal the
    /// name's label at the same position. A wildcard also needs one more
    /// non-empty label in the name to stand in for the `*`.
    pub fn matches(&self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }

        let mut name_labels = name.rsplit('.');
        for label in self.labels.iter().rev() {
            if name_labels.next() != Some(label.as_str()) {
                return false;
            }
        }

        match self.kind {
            RuleKind::Wildcard => name_labels.next().is_some_and(|l| !l.is_empty()),
            RuleKind::Normal | RuleKind::Exception => true,
        }
    }

    /// Split `name` into `(remainder, suffix)` around this rule's public suffix.
    ///
    /// Returns `None` when the name does not end in the rule's suffix or when
    /// nothing is left above the suffix.
    pub fn decompose<'n>(&self, name: &'n str) -> Option<(&'n str, &'n str)> {
        let (literal, depth) = match self.kind {
            RuleKind::Normal => (&self.labels[..], self.labels.len()),
            RuleKind::Wildcard => (&self.labels[..], self.labels.len() + 1),
            RuleKind::Exception => (&self.labels[1..], self.labels.len() - 1),
        };
        if depth == 0 {
            return None;
        }

        let (dot, _) = name.rmatch_indices('.').nth(depth - 1)?;
        let (remainder, suffix) = (&name[..dot], &name[dot + 1..]);
        if remainder.is_empty() {
            return None;
        }

        let mut suffix_labels = suffix.rsplit('.');
        for label in literal.iter().rev() {
            if suffix_labels.next() != Some(label.as_str()) {
                return None;
            }
        }
        if self.kind == RuleKind::Wildcard && suffix_labels.next().map_or(true, str::is_empty) {
            return None;
        }

        Some((remainder, suffix))
    }
}

impl FromStr for Rule {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Rule::parse(s)
    }
}

impl fmt::Display for Rule {
    /// Renders the rule in list syntax.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RuleKind::Normal => f.write_str(&self.value),
            RuleKind::Wildcard if self.value.is_empty() => f.write_str("*"),
            RuleKind::Wildcard => write!(f, "*.{}", self.value),
            RuleKind::Exception => write!(f, "!{}", self.value),
        }
    }
}

/// Split a name into its dot-separated labels.
pub fn labels(name: &str) -> Vec<&str> {
    name.split('.').collect()
}

fn invalid(kind: RuleErrorKind, line: &str) -> ParseError {
    ParseError::InvalidRule {
        kind,
        rule: line.to_string(),
    }
}
