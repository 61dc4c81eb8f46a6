use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

/// Opaque identity of one configured rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct RuleId(String);

impl RuleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for RuleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RuleId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RuleId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Per-visitor storage of rule match results.
///
/// Hosts back this with whatever session mechanism they have; a rule only
/// reads and writes its own entry.
pub trait SessionStore {
    /// Previously stored result for `rule`, if any.
    fn get(&self, rule: &RuleId) -> Option<bool>;

    /// Store `matched` for `rule` and hand it back.
    fn set(&mut self, rule: &RuleId, matched: bool) -> bool;
}

/// In-memory [`SessionStore`] for a single visitor session.
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    entries: HashMap<RuleId, bool>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl SessionStore for MemorySession {
    fn get(&self, rule: &RuleId) -> Option<bool> {
        self.entries.get(rule).copied()
    }

    fn set(&mut self, rule: &RuleId, matched: bool) -> bool {
        self.entries.insert(rule.clone(), matched);
        matched
    }
}
