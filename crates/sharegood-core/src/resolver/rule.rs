//! Rule table types and the first-match scan.

use std::sync::LazyLock;

use regex::Regex;
use sharegood_types::error::ResolverError;
use tracing::debug;

use super::table::{BUILTIN_RULES, DEFAULT_RESPONSE};

/// Uncompiled predicate, as written in a rule table.
#[derive(Debug, Clone, Copy)]
pub enum PredicateSpec {
    /// Regular expression tested against the lowercased message.
    Pattern(&'static str),
    /// Matches when the lowercased message contains any of these substrings.
    Keywords(&'static [&'static str]),
}

/// One entry of a rule table before compilation.
#[derive(Debug, Clone, Copy)]
pub struct RuleSpec {
    pub name: &'static str,
    pub predicate: PredicateSpec,
    pub response: &'static str,
}

/// Compiled predicate.
#[derive(Debug, Clone)]
pub enum Predicate {
    Pattern(Regex),
    Keywords(&'static [&'static str]),
}

impl Predicate {
    fn compile(name: &str, spec: PredicateSpec) -> Result<Self, ResolverError> {
        match spec {
            PredicateSpec::Pattern(pattern) => Regex::new(pattern)
                .map(Predicate::Pattern)
                .map_err(|e| ResolverError::InvalidPattern {
                    rule: name.to_string(),
                    reason: e.to_string(),
                }),
            PredicateSpec::Keywords(keywords) => {
                if keywords.is_empty() {
                    return Err(ResolverError::EmptyKeywords(name.to_string()));
                }
                Ok(Predicate::Keywords(keywords))
            }
        }
    }

    /// Test an already-lowercased message.
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            Predicate::Pattern(re) => re.is_match(normalized),
            Predicate::Keywords(keywords) => keywords.iter().any(|k| normalized.contains(k)),
        }
    }

    /// Short label for listings ("pattern" / "keywords").
    pub fn kind(&self) -> &'static str {
        match self {
            Predicate::Pattern(_) => "pattern",
            Predicate::Keywords(_) => "keywords",
        }
    }

    /// Human-readable form of the predicate: the regex source or the keyword list.
    pub fn describe(&self) -> String {
        match self {
            Predicate::Pattern(re) => re.as_str().to_string(),
            Predicate::Keywords(keywords) => keywords.join(", "),
        }
    }
}

/// A compiled (predicate, response) pair.
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub name: &'static str,
    pub predicate: Predicate,
    pub response: &'static str,
}

/// Outcome of classifying one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Name of the rule that fired, `None` for the fallback.
    pub rule: Option<&'static str>,
    pub response: &'static str,
}

impl Resolution {
    pub fn is_fallback(&self) -> bool {
        self.rule.is_none()
    }
}

/// Priority-ordered rule table with a fallback response.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<PatternRule>,
    fallback: &'static str,
}

static BUILTIN: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(BUILTIN_RULES, DEFAULT_RESPONSE).expect("built-in rule table must compile")
});

impl RuleSet {
    /// Compile a rule table. Declaration order of `specs` is evaluation order.
    pub fn new(specs: &[RuleSpec], fallback: &'static str) -> Result<Self, ResolverError> {
        let rules = specs
            .iter()
            .map(|spec| {
                Ok(PatternRule {
                    name: spec.name,
                    predicate: Predicate::compile(spec.name, spec.predicate)?,
                    response: spec.response,
                })
            })
            .collect::<Result<Vec<_>, ResolverError>>()?;

        Ok(Self { rules, fallback })
    }

    /// The ShareGood rule table, compiled once per process.
    pub fn builtin() -> &'static RuleSet {
        &BUILTIN
    }

    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    pub fn fallback(&self) -> &'static str {
        self.fallback
    }

    /// Find the reply for `message` and report which rule produced it.
    pub fn classify(&self, message: &str) -> Resolution {
        let normalized = message.to_lowercase();

        match self.rules.iter().find(|rule| rule.predicate.matches(&normalized)) {
            Some(rule) => {
                debug!(rule = rule.name, "chat rule matched");
                Resolution {
                    rule: Some(rule.name),
                    response: rule.response,
                }
            }
            None => {
                debug!("no chat rule matched, using fallback");
                Resolution {
                    rule: None,
                    response: self.fallback,
                }
            }
        }
    }
}
