use crate::cache::CachedRuleSet;
use crate::list::RuleSet;
use crate::types::FindOptions;

/// Capability to report the public suffix of a domain, for cookie jars and
/// similar scoping code.
pub trait PublicSuffixProvider: Send + Sync {
    /// Public suffix of `domain`, or an empty string when `domain` has no
    /// label above its suffix.
    ///
    /// `domain` is expected to be lowercase.
    fn public_suffix(&self, domain: &str) -> String;
}

impl PublicSuffixProvider for RuleSet {
    fn public_suffix(&self, domain: &str) -> String {
        let rule = self.find(domain, &FindOptions::default());
        rule.decompose(domain)
            .map(|(_, suffix)| suffix.to_string())
            .unwrap_or_default()
    }
}

impl PublicSuffixProvider for CachedRuleSet {
    fn public_suffix(&self, domain: &str) -> String {
        let rule = self.find(domain, &FindOptions::default());
        rule.decompose(domain)
            .map(|(_, suffix)| suffix.to_string())
            .unwrap_or_default()
    }
}
