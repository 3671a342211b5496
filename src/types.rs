use std::fmt;

use serde::Serialize;

use crate::rule::Rule;

/// Public Suffix List rule type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// Plain rule: "co.uk" is itself a public suffix
    Normal,
    /// Wildcard rule: "*.uk" makes every label directly under "uk" a public suffix
    Wildcard,
    /// Exception rule: "!parliament.uk" carves a registrable domain out of a wildcard
    Exception,
}

/// What to do with a rule line that fails to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Skip the line and keep loading
    #[default]
    Skip,
    /// Stop at the first bad line and return its error
    Abort,
}

/// Options for parsing a Public Suffix List source.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Load rules from the private domains section
    pub include_private: bool,
    /// Handling of malformed rule lines
    pub error_policy: ErrorPolicy,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            include_private: true,
            error_policy: ErrorPolicy::Skip,
        }
    }
}

impl ParseOptions {
    /// Create new parse options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the private domains section is loaded.
    pub fn with_private_domains(mut self, include: bool) -> Self {
        self.include_private = include;
        self
    }

    /// Set the malformed line policy.
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }
}

/// Options for looking up rules in a list.
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    /// Skip rules from the private domains section
    pub ignore_private: bool,
}

impl FindOptions {
    /// Create new find options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether private rules are ignored.
    pub fn with_ignore_private(mut self, ignore: bool) -> Self {
        self.ignore_private = ignore;
        self
    }
}

/// A domain name split around its public suffix
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainName {
    /// Public suffix, possibly multi-label ("co.uk")
    pub tld: String,
    /// Label directly above the public suffix
    pub sld: String,
    /// Everything below `sld`, possibly empty
    pub trd: String,
    /// Rule that produced the split
    pub rule: Rule,
}

impl DomainName {
    /// The registrable domain (`sld.tld`).
    pub fn registrable(&self) -> String {
        format!("{}.{}", self.sld, self.tld)
    }
}

impl fmt::Display for DomainName {
    /// Joins the non-empty components back into a name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.tld.is_empty(), self.sld.is_empty(), self.trd.is_empty()) {
            (true, _, _) => Ok(()),
            (false, true, _) => write!(f, "{}", self.tld),
            (false, false, true) => write!(f, "{}.{}", self.sld, self.tld),
            (false, false, false) => write!(f, "{}.{}.{}", self.trd, self.sld, self.tld),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(tld: &str, sld: &str, trd: &str) -> DomainName {
        DomainName {
            tld: tld.to_string(),
            sld: sld.to_string(),
            trd: trd.to_string(),
            rule: Rule::default_rule().clone(),
        }
    }

    #[test]
    fn test_domain_name_display() {
        assert_eq!(name("com", "example", "").to_string(), "example.com");
        assert_eq!(name("com", "example", "www").to_string(), "www.example.com");
        assert_eq!(name("co.uk", "example", "a.b").to_string(), "a.b.example.co.uk");
        assert_eq!(name("com", "", "").to_string(), "com");
        assert_eq!(name("", "", "").to_string(), "");
    }

    #[test]
    fn test_registrable() {
        assert_eq!(name("co.uk", "example", "www").registrable(), "example.co.uk");
    }

    #[test]
    fn test_option_builders() {
        let opts = ParseOptions::new()
            .with_private_domains(false)
            .with_error_policy(ErrorPolicy::Abort);
        assert!(!opts.include_private);
        assert_eq!(opts.error_policy, ErrorPolicy::Abort);

        let defaults = ParseOptions::default();
        assert!(defaults.include_private);
        assert_eq!(defaults.error_policy, ErrorPolicy::Skip);

        assert!(FindOptions::new().with_ignore_private(true).ignore_private);
        assert!(!FindOptions::default().ignore_private);
    }
}
