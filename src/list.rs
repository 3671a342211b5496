//! Rule set module.
//!
//! Holds the parsed Public Suffix List and picks the rule that applies to a name.

use std::path::Path;

use crate::domain;
use crate::error::{DomainError, Result};
use crate::parser::{parse_rules, parse_rules_from_file};
use crate::rule::Rule;
use crate::types::{DomainName, FindOptions, ParseOptions, RuleKind};

/// An ordered collection of Public Suffix List rules.
///
/// Built once, then only read. A `RuleSet` is `Send + Sync` and can be shared
/// across threads behind an `Arc` without locking.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a rule set from Public Suffix List source text.
    pub fn parse(source: &str, options: &ParseOptions) -> Result<Self> {
        Ok(Self {
            rules: parse_rules(source, options)?,
        })
    }

    /// Parse a rule set from a Public Suffix List file.
    pub fn from_file(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Self> {
        Ok(Self {
            rules: parse_rules_from_file(path, options)?,
        })
    }

    /// Append a rule.
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Get the number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate the rules in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// All rules matching `name`, in insertion order.
    pub fn select(&self, name: &str, options: &FindOptions) -> Vec<&Rule> {
        self.rules
            .iter()
            .filter(|rule| accepts(rule, name, options))
            .collect()
    }

    /// The rule that decides the public suffix of `name`.
    ///
    /// An exception wins outright (the first one in list order). Otherwise the
    /// most specific match wins, earlier rules winning ties. With no match the
    /// implicit `*` rule is returned.
    pub fn find(&self, name: &str, options: &FindOptions) -> &Rule {
        match self.find_position(name, options) {
            Some(i) => &self.rules[i],
            None => Rule::default_rule(),
        }
    }

    /// Index of the winning rule, `None` meaning the default rule.
    pub(crate) fn find_position(&self, name: &str, options: &FindOptions) -> Option<usize> {
        let mut best: Option<(usize, &Rule)> = None;

        for (i, rule) in self.rules.iter().enumerate() {
            if !accepts(rule, name, options) {
                continue;
            }
            if rule.kind() == RuleKind::Exception {
                return Some(i);
            }
            if best.map_or(true, |(_, b)| rule.specificity() > b.specificity()) {
                best = Some((i, rule));
            }
        }

        best.map(|(i, _)| i)
    }

    /// Rule at a position returned by [`find_position`](Self::find_position).
    pub(crate) fn rule_at(&self, position: Option<usize>) -> &Rule {
        position
            .and_then(|i| self.rules.get(i))
            .unwrap_or_else(|| Rule::default_rule())
    }

    /// Split `name` into its domain components.
    pub fn parse_domain(
        &self,
        name: &str,
        options: &FindOptions,
    ) -> std::result::Result<DomainName, DomainError> {
        domain::parse_domain(self, name, options)
    }

    /// The registrable domain of `name` (`sld.tld`).
    pub fn domain(
        &self,
        name: &str,
        options: &FindOptions,
    ) -> std::result::Result<String, DomainError> {
        domain::registrable_domain(self, name, options)
    }
}

fn accepts(rule: &Rule, name: &str, options: &FindOptions) -> bool {
    !(options.ignore_private && rule.is_private()) && rule.matches(name)
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
