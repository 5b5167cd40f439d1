pub mod builtin;

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{LeakscanError, Result};
use crate::finding::{Category, Severity};

/// Source definition for one detection rule. The registry compiles these
/// into [`Pattern`]s at construction.
#[derive(Debug, Clone, Copy)]
pub struct PatternSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub regex: &'static str,
    pub severity: Severity,
    pub category: Category,
}

/// A compiled detection rule: regex signature plus classification metadata.
#[derive(Debug, Clone)]
pub struct Pattern {
    /// Stable short identifier, unique across the registry.
    pub id: &'static str,
    /// Human-readable label.
    pub name: &'static str,
    /// One-line explanation of what the pattern detects.
    pub description: &'static str,
    /// Compiled matcher. `find_iter` enumerates all non-overlapping
    /// occurrences; the regex itself carries no cursor state, so nothing
    /// leaks across blobs or calls.
    pub matcher: Regex,
    pub severity: Severity,
    pub category: Category,
}

/// Immutable, ordered catalog of detection rules.
///
/// Iteration order follows the source table and is stable across calls —
/// it has no semantic priority, but it determines which duplicate of an
/// identical match survives de-duplication.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    patterns: Vec<Pattern>,
}

impl PatternRegistry {
    /// Compile a spec table into a validated registry.
    ///
    /// Fails fast on a regex that doesn't compile or a duplicate id: a
    /// malformed rule silently disables detection, so initialization
    /// aborts rather than degrading.
    pub fn from_specs(specs: &[PatternSpec]) -> Result<Self> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(specs.len());
        let mut patterns = Vec::with_capacity(specs.len());

        for spec in specs {
            if !seen.insert(spec.id) {
                return Err(LeakscanError::DuplicatePattern(spec.id.to_string()));
            }
            let matcher = Regex::new(spec.regex).map_err(|e| LeakscanError::Pattern {
                pattern_id: spec.id.to_string(),
                message: e.to_string(),
            })?;
            patterns.push(Pattern {
                id: spec.id,
                name: spec.name,
                description: spec.description,
                matcher,
                severity: spec.severity,
                category: spec.category,
            });
        }

        Ok(Self { patterns })
    }

    /// Build the registry from the built-in rule table.
    pub fn builtin() -> Result<Self> {
        Self::from_specs(builtin::PATTERN_SPECS)
    }

    /// All patterns in stable table order.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Look up a pattern by id.
    pub fn find(&self, id: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Shared built-in registry, compiled once on first use.
///
/// The built-in table is static data validated by tests; if it is ever
/// broken the process aborts at first use instead of scanning with a
/// partially-valid catalog.
pub fn builtin_registry() -> &'static PatternRegistry {
    static REGISTRY: Lazy<PatternRegistry> =
        Lazy::new(|| PatternRegistry::builtin().expect("built-in pattern table is valid"));
    &REGISTRY
}
