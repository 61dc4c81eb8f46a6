use std::collections::HashMap;
use std::path::Path;

use crate::config::load_yaml;
use crate::error::Result;
use crate::types::RawClassification;

/// Turns a raw User-Agent string into device and browser signals.
///
/// Returning `None` means the classifier could not say anything about the
/// string; callers treat that the same as an unknown visitor.
pub trait Classifier: Send + Sync {
    fn classify(&self, user_agent: &str) -> Option<RawClassification>;
}

impl<F> Classifier for F
where
    F: Fn(&str) -> Option<RawClassification> + Send + Sync,
{
    fn classify(&self, user_agent: &str) -> Option<RawClassification> {
        self(user_agent)
    }
}

/// Exact-match table of already classified User-Agent strings.
///
/// Strings missing from the table are reported as unclassifiable.
#[derive(Debug, Clone, Default)]
pub struct StaticClassifier {
    entries: HashMap<String, RawClassification>,
}

impl StaticClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a YAML mapping of User-Agent → classification.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let entries: HashMap<String, RawClassification> = serde_yaml::from_str(yaml)?;
        Ok(Self { entries })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let entries: HashMap<String, RawClassification> = load_yaml(path.as_ref())?;
        Ok(Self { entries })
    }

    pub fn with(mut self, user_agent: impl Into<String>, raw: RawClassification) -> Self {
        self.insert(user_agent, raw);
        self
    }

    pub fn insert(&mut self, user_agent: impl Into<String>, raw: RawClassification) {
        self.entries.insert(user_agent.into(), raw);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Classifier for StaticClassifier {
    fn classify(&self, user_agent: &str) -> Option<RawClassification> {
        self.entries.get(user_agent).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"
"Mozilla/5.0 (iPad; CPU OS 17_2 like Mac OS X)":
  is_mobile: true
  is_tablet: true
  browser_name: Mobile Safari
  os_name: iPadOS
  device_brand: Apple
  device_model: iPad
"Googlebot/2.1 (+http://www.google.com/bot.html)":
  is_bot: true
"#;

    #[test]
    fn static_table_from_yaml() {
        let classifier = StaticClassifier::from_yaml_str(TABLE).unwrap();
        assert_eq!(classifier.len(), 2);

        let ipad = classifier
            .classify("Mozilla/5.0 (iPad; CPU OS 17_2 like Mac OS X)")
            .unwrap();
        assert!(ipad.is_mobile && ipad.is_tablet);
        assert!(!ipad.is_bot);
        assert_eq!(ipad.browser_name.as_deref(), Some("Mobile Safari"));

        let bot = classifier
            .classify("Googlebot/2.1 (+http://www.google.com/bot.html)")
            .unwrap();
        assert!(bot.is_bot);
        assert_eq!(bot.browser_name, None);
    }

    #[test]
    fn static_table_is_exact_match() {
        let classifier = StaticClassifier::new().with(
            "Agent/1.0",
            RawClassification {
                is_desktop: true,
                ..Default::default()
            },
        );
        assert!(classifier.classify("Agent/1.0").is_some());
        assert!(classifier.classify("agent/1.0").is_none());
        assert!(classifier.classify(" Agent/1.0").is_none());
    }

    #[test]
    fn closures_are_classifiers() {
        let classifier = |ua: &str| {
            Some(RawClassification {
                is_bot: ua.contains("bot"),
                ..Default::default()
            })
        };
        assert!(classifier.classify("somebot").unwrap().is_bot);
        assert!(!classifier.classify("Firefox").unwrap().is_bot);
    }
}
