use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;
use tracing::trace;

use crate::domain::{assemble, normalize};
use crate::error::DomainError;
use crate::list::RuleSet;
use crate::rule::Rule;
use crate::types::{DomainName, FindOptions};

/// Default LRU cache size
pub const DEFAULT_CACHE_SIZE: usize = 1024;

/// Cache key: normalized name and whether private rules were ignored
type CacheKey = (String, bool);

/// Cache value: position of the winning rule, `None` for the default rule
type CacheValue = Option<usize>;

/// Rule set with LRU-cached lookups.
///
/// Wraps a frozen [`RuleSet`]. Only the cache is mutable; answers are always
/// the same as the wrapped set would give.
pub struct CachedRuleSet {
    rule_set: RuleSet,
    cache: Mutex<LruCache<CacheKey, CacheValue>>,
}

impl CachedRuleSet {
    /// Create a new cached rule set
    pub fn new(rule_set: RuleSet, cache_size: usize) -> Self {
        let cache_size = NonZeroUsize::new(cache_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            rule_set,
            cache: Mutex::new(LruCache::new(cache_size)),
        }
    }

    /// Find the rule for `name`, consulting the cache first.
    ///
    /// `name` is expected to be lowercase, as for [`RuleSet::find`].
    pub fn find(&self, name: &str, options: &FindOptions) -> &Rule {
        let key = (name.to_string(), options.ignore_private);

        let mut cache = self.cache.lock();

        if let Some(position) = cache.get(&key) {
            return self.rule_set.rule_at(*position);
        }

        // Lookups are CPU-only, so computing under the lock is acceptable
        let position = self.rule_set.find_position(name, options);
        cache.put(key, position);

        self.rule_set.rule_at(position)
    }

    /// Split `name` into its domain components.
    pub fn parse_domain(
        &self,
        name: &str,
        options: &FindOptions,
    ) -> Result<DomainName, DomainError> {
        let name = normalize(name)?;
        let rule = self.find(&name, options);
        assemble(rule, &name)
    }

    /// The registrable domain of `name` (`sld.tld`).
    pub fn domain(&self, name: &str, options: &FindOptions) -> Result<String, DomainError> {
        self.parse_domain(name, options).map(|dn| dn.registrable())
    }

    /// The wrapped rule set
    pub fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }

    /// Get the number of rules
    pub fn rule_count(&self) -> usize {
        self.rule_set.len()
    }

    /// Get the number of cached lookups
    pub fn cached_len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Clear the cache
    pub fn clear_cache(&self) {
        let mut cache = self.cache.lock();
        trace!(entries = cache.len(), "clearing suffix lookup cache");
        cache.clear();
    }
}

impl From<RuleSet> for CachedRuleSet {
    fn from(rule_set: RuleSet) -> Self {
        Self::new(rule_set, DEFAULT_CACHE_SIZE)
    }
}
