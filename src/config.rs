//! Rule definitions loaded from YAML.
//!
//! A rule file is a list of records:
//!
//! ```yaml
//! - id: phones
//!   kind: device
//!   use_session: true
//!   settings:
//!     field_is_phone: 1
//! - id: not-chrome
//!   kind: browser
//!   invert: true
//!   settings:
//!     field_browsers: "Chrome, Chrome Mobile"
//! ```

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::detection::{DetectionService, RequestContext};
use crate::error::{Error, Result};
use crate::rule::{BrowserRule, DeviceClassRule, Rule, RuleKind};
use crate::session::{RuleId, SessionStore};

pub(crate) fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

/// Named configuration values of one rule, as the host stores them.
///
/// YAML scalars are kept as strings: `1` becomes `"1"`, `true`/`false`
/// become `"1"`/`"0"` and `null` becomes `""`. Nested values are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSettings(IndexMap<String, String>);

impl RuleSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for RuleSettings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = IndexMap::<String, serde_yaml::Value>::deserialize(deserializer)?;
        Ok(Self(
            raw.into_iter()
                .filter_map(|(key, value)| scalar_to_string(value).map(|v| (key, v)))
                .collect(),
        ))
    }
}

fn scalar_to_string(value: serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::Null => Some(String::new()),
        serde_yaml::Value::Bool(b) => Some(if b { "1" } else { "0" }.to_string()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::String(s) => Some(s),
        serde_yaml::Value::Tagged(tagged) => scalar_to_string(tagged.value),
        serde_yaml::Value::Sequence(_) | serde_yaml::Value::Mapping(_) => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleType {
    Device,
    Browser,
}

/// One rule as written in a rule file.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleRecord {
    pub id: RuleId,
    pub kind: RuleType,
    #[serde(default)]
    pub invert: bool,
    #[serde(default)]
    pub use_session: bool,
    #[serde(default)]
    pub settings: RuleSettings,
}

impl From<RuleRecord> for Rule {
    fn from(record: RuleRecord) -> Self {
        let kind = match record.kind {
            RuleType::Device => RuleKind::Device(DeviceClassRule::from_settings(&record.settings)),
            RuleType::Browser => RuleKind::Browser(BrowserRule::from_settings(&record.settings)),
        };
        Rule::new(record.id, kind)
            .inverted(record.invert)
            .with_session(record.use_session)
    }
}

/// Ordered collection of rules with unique ids.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: IndexMap<RuleId, Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let records: Vec<RuleRecord> = serde_yaml::from_str(yaml)?;
        Self::from_records(records)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let records: Vec<RuleRecord> = load_yaml(path.as_ref())?;
        Self::from_records(records)
    }

    pub fn from_records(records: impl IntoIterator<Item = RuleRecord>) -> Result<Self> {
        let mut set = Self::new();
        for record in records {
            set.insert(record.into())?;
        }
        Ok(set)
    }

    /// Add a rule; fails if its id is already taken.
    pub fn insert(&mut self, rule: Rule) -> Result<()> {
        if self.rules.contains_key(&rule.id) {
            return Err(Error::DuplicateRule(rule.id));
        }
        self.rules.insert(rule.id.clone(), rule);
        Ok(())
    }

    pub fn get(&self, id: &RuleId) -> Option<&Rule> {
        self.rules.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.values()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate every rule for one request, in definition order.
    pub fn evaluate_all(
        &self,
        detection: &DetectionService,
        request: Option<&RequestContext>,
        session: &mut dyn SessionStore,
    ) -> IndexMap<RuleId, bool> {
        self.rules
            .iter()
            .map(|(id, rule)| (id.clone(), rule.evaluate(detection, request, session)))
            .collect()
    }
}
