//! PSL Engine - Public Suffix List rule matching for Rust
//!
//! This library splits domain names around their public suffix:
//! - Parsing of Public Suffix List source text (ICANN and private sections)
//! - Normal, wildcard and exception rules
//! - Longest-match rule selection with exception precedence
//! - Decomposition into `trd.sld.tld` components
//! - LRU caching for repeated lookups
//!
//! # Example
//!
//! ```rust
//! use psl_engine_r::{FindOptions, ParseOptions, RuleSet};
//!
//! let list_text = "
//! // ===BEGIN ICANN DOMAINS===
//! com
//! *.uk
//! !parliament.uk
//! // ===END ICANN DOMAINS===
//! // ===BEGIN PRIVATE DOMAINS===
//! blogspot.com
//! // ===END PRIVATE DOMAINS===
//! ";
//!
//! // Build the rule set once, then share it read-only
//! let list = RuleSet::parse(list_text, &ParseOptions::default()).unwrap();
//! let opts = FindOptions::default();
//!
//! assert_eq!(list.domain("www.example.com", &opts).unwrap(), "example.com");
//! assert_eq!(list.domain("foo.example.co.uk", &opts).unwrap(), "example.co.uk");
//! assert_eq!(list.domain("www.parliament.uk", &opts).unwrap(), "parliament.uk");
//! assert!(list.domain("blogspot.com", &opts).is_err());
//!
//! let dn = list.parse_domain("a.b.example.co.uk", &opts).unwrap();
//! assert_eq!((dn.trd.as_str(), dn.sld.as_str(), dn.tld.as_str()), ("a.b", "example", "co.uk"));
//! ```
//!
//! # Rule Syntax
//!
//! | Type | Example | Description |
//! |------|---------|-------------|
//! | Normal | `co.uk` | The rule itself is a public suffix |
//! | Wildcard | `*.kobe.jp` | Any label under `kobe.jp` is a public suffix |
//! | Exception | `!city.kobe.jp` | Registrable despite a wildcard above it |
//! | Comment | `// text` | Ignored |
//!
//! Rules after a line containing `===BEGIN PRIVATE DOMAINS===` are private.

pub mod cache;
pub mod domain;
pub mod error;
pub mod list;
pub mod parser;
pub mod rule;
pub mod suffix;
pub mod types;

// Re-export commonly used items
pub use cache::{CachedRuleSet, DEFAULT_CACHE_SIZE};
pub use domain::{find_rule, load_rules, parse_domain, registrable_domain};
pub use error::{DomainError, ParseError, Result, RuleErrorKind};
pub use list::RuleSet;
pub use parser::{parse_rules, parse_rules_from_file, COMMENT_PREFIX, PRIVATE_DOMAINS_MARKER};
pub use rule::{labels, Rule};
pub use suffix::PublicSuffixProvider;
pub use types::{DomainName, ErrorPolicy, FindOptions, ParseOptions, RuleKind};
