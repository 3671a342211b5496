//! Domain assembly.
//!
//! Turns the rule picked for a name into its `trd.sld.tld` components.

use crate::error::{DomainError, Result};
use crate::list::RuleSet;
use crate::rule::Rule;
use crate::types::{DomainName, FindOptions, ParseOptions};

/// Parse Public Suffix List source text into a rule set.
pub fn load_rules(text: &str, options: &ParseOptions) -> Result<RuleSet> {
    RuleSet::parse(text, options)
}

/// Find the rule that decides the public suffix of `name`. Never fails: with
/// no match the implicit `*` rule is returned.
pub fn find_rule<'a>(rule_set: &'a RuleSet, name: &str, options: &FindOptions) -> &'a Rule {
    rule_set.find(name, options)
}

/// Split `name` into its public suffix (`tld`), the registrable label above it
/// (`sld`) and everything below that (`trd`).
///
/// # Examples
///
/// ```
/// use psl_engine_r::{parse_domain, FindOptions, ParseOptions, RuleSet};
///
/// let list = RuleSet::parse("*.uk", &ParseOptions::default()).unwrap();
/// let dn = parse_domain(&list, "foo.verybritish.co.uk", &FindOptions::default()).unwrap();
/// assert_eq!(dn.tld, "co.uk");
/// assert_eq!(dn.sld, "verybritish");
/// assert_eq!(dn.trd, "foo");
/// ```
pub fn parse_domain(
    rule_set: &RuleSet,
    name: &str,
    options: &FindOptions,
) -> std::result::Result<DomainName, DomainError> {
    let name = normalize(name)?;
    let rule = rule_set.find(&name, options);
    assemble(rule, &name)
}

/// The registrable domain of `name`: its public suffix plus one label.
pub fn registrable_domain(
    rule_set: &RuleSet,
    name: &str,
    options: &FindOptions,
) -> std::result::Result<String, DomainError> {
    parse_domain(rule_set, name, options).map(|dn| dn.registrable())
}

/// Lowercase `name` and reject the inputs that can never be split.
pub(crate) fn normalize(name: &str) -> std::result::Result<String, DomainError> {
    let name = name.to_lowercase();

    if name.is_empty() {
        return Err(DomainError::Blank);
    }
    if name.starts_with('.') {
        return Err(DomainError::LeadingDot(name));
    }

    Ok(name)
}

/// Split an already normalized name with the rule chosen for it.
pub(crate) fn assemble(rule: &Rule, name: &str) -> std::result::Result<DomainName, DomainError> {
    let (remainder, suffix) = rule
        .decompose(name)
        .ok_or_else(|| DomainError::IsSuffix(name.to_string()))?;

    let (trd, sld) = match remainder.rsplit_once('.') {
        Some((trd, sld)) => (trd, sld),
        None => ("", remainder),
    };

    Ok(DomainName {
        tld: suffix.to_string(),
        sld: sld.to_string(),
        trd: trd.to_string(),
        rule: rule.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(text: &str) -> RuleSet {
        load_rules(text, &ParseOptions::default()).unwrap()
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("WWW.Example.COM").unwrap(), "www.example.com");
        assert_eq!(normalize(""), Err(DomainError::Blank));
        assert_eq!(
            normalize(".Example.com"),
            Err(DomainError::LeadingDot(".example.com".to_string()))
        );
    }

    #[test]
    fn test_parse_domain_components() {
        let set = list("com\nco.uk\n");
        let opts = FindOptions::default();

        let dn = parse_domain(&set, "example.com", &opts).unwrap();
        assert_eq!((dn.tld.as_str(), dn.sld.as_str(), dn.trd.as_str()), ("com", "example", ""));
        assert_eq!(dn.rule.to_string(), "com");

        let dn = parse_domain(&set, "a.b.example.co.uk", &opts).unwrap();
        assert_eq!(dn.tld, "co.uk");
        assert_eq!(dn.sld, "example");
        assert_eq!(dn.trd, "a.b");
    }

    #[test]
    fn test_parse_domain_lowercases() {
        let set = list("com");
        let dn = parse_domain(&set, "WWW.Example.COM", &FindOptions::default()).unwrap();
        assert_eq!(dn.to_string(), "www.example.com");
    }

    #[test]
    fn test_parse_domain_is_suffix() {
        let set = list("com\n*.uk\n");
        let opts = FindOptions::default();
        assert_eq!(
            parse_domain(&set, "com", &opts),
            Err(DomainError::IsSuffix("com".to_string()))
        );
        assert_eq!(
            parse_domain(&set, "co.uk", &opts),
            Err(DomainError::IsSuffix("co.uk".to_string()))
        );
        // Unlisted single label falls back to the default rule
        assert_eq!(
            parse_domain(&set, "test", &opts),
            Err(DomainError::IsSuffix("test".to_string()))
        );
    }

    #[test]
    fn test_registrable_domain() {
        let set = list("com\n*.uk\n!parliament.uk\n");
        let opts = FindOptions::default();
        assert_eq!(registrable_domain(&set, "foo.example.com", &opts).unwrap(), "example.com");
        assert_eq!(
            registrable_domain(&set, "a.b.example.co.uk", &opts).unwrap(),
            "example.co.uk"
        );
        assert_eq!(
            registrable_domain(&set, "www.parliament.uk", &opts).unwrap(),
            "parliament.uk"
        );
        assert_eq!(registrable_domain(&set, "", &opts), Err(DomainError::Blank));
    }

    #[test]
    fn test_find_rule_falls_back_to_default() {
        let set = list("com");
        let rule = find_rule(&set, "example.test", &FindOptions::default());
        assert_eq!(rule, Rule::default_rule());
    }
}
