use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Classifies malformed rule lines for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleErrorKind {
    /// The line has no content
    Empty,
    /// `*` not followed by `.<labels>`
    DanglingWildcard,
    /// `!` with no labels after it
    DanglingException,
    /// Two consecutive dots, or a leading/trailing dot
    EmptyLabel,
}

impl fmt::Display for RuleErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            RuleErrorKind::Empty => "empty rule",
            RuleErrorKind::DanglingWildcard => "wildcard marker without labels",
            RuleErrorKind::DanglingException => "exception marker without labels",
            RuleErrorKind::EmptyLabel => "empty label",
        };
        f.write_str(msg)
    }
}

/// Errors raised while reading Public Suffix List rules
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid rule '{rule}': {kind}")]
    InvalidRule { kind: RuleErrorKind, rule: String },

    #[error("Invalid rule at line {line} '{rule}': {kind}")]
    InvalidRuleAtLine {
        line: usize,
        kind: RuleErrorKind,
        rule: String,
    },

    #[error("Failed to read rules file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ParseError {
    /// Rule error kind, if this error came from a malformed rule line.
    pub fn kind(&self) -> Option<RuleErrorKind> {
        match self {
            ParseError::InvalidRule { kind, .. } | ParseError::InvalidRuleAtLine { kind, .. } => {
                Some(*kind)
            }
            ParseError::Io { .. } => None,
        }
    }

    /// Attach a 1-based source line number to a rule error.
    pub(crate) fn at_line(self, line: usize) -> Self {
        match self {
            ParseError::InvalidRule { kind, rule } => {
                ParseError::InvalidRuleAtLine { line, kind, rule }
            }
            other => other,
        }
    }
}

/// Errors raised while splitting a name into its domain components
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Name is blank")]
    Blank,

    #[error("Name {0} starts with a dot")]
    LeadingDot(String),

    #[error("{0} is a suffix")]
    IsSuffix(String),
}

pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_error_kind_is_matchable() {
        let err = ParseError::InvalidRule {
            kind: RuleErrorKind::DanglingWildcard,
            rule: "*.".into(),
        };
        match &err {
            ParseError::InvalidRule { kind, .. } => {
                assert!(matches!(kind, RuleErrorKind::DanglingWildcard));
            }
            _ => panic!("expected InvalidRule"),
        }
        assert_eq!(err.kind(), Some(RuleErrorKind::DanglingWildcard));
    }

    #[test]
    fn test_at_line_keeps_kind_and_rule() {
        let err = ParseError::InvalidRule {
            kind: RuleErrorKind::EmptyLabel,
            rule: "a..b".into(),
        }
        .at_line(12);
        match err {
            ParseError::InvalidRuleAtLine { line, kind, rule } => {
                assert_eq!(line, 12);
                assert_eq!(kind, RuleErrorKind::EmptyLabel);
                assert_eq!(rule, "a..b");
            }
            other => panic!("expected InvalidRuleAtLine, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_error_display_includes_line() {
        let err = ParseError::InvalidRuleAtLine {
            line: 7,
            kind: RuleErrorKind::DanglingException,
            rule: "!".into(),
        };
        let display = format!("{}", err);
        assert!(display.contains("line 7"), "got: {}", display);
        assert!(display.contains("exception marker"), "got: {}", display);
    }

    #[test]
    fn test_io_error_has_no_rule_kind() {
        let err = ParseError::Io {
            path: PathBuf::from("/nonexistent/list.dat"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.kind(), None);
        assert!(format!("{}", err).contains("/nonexistent/list.dat"));
    }

    #[test]
    fn test_domain_error_display() {
        assert_eq!(DomainError::Blank.to_string(), "Name is blank");
        assert_eq!(
            DomainError::LeadingDot(".com".into()).to_string(),
            "Name .com starts with a dot"
        );
        assert_eq!(DomainError::IsSuffix("com".into()).to_string(), "com is a suffix");
    }
}
