use indexmap::IndexSet;

use super::Predicate;
use crate::config::RuleSettings;
use crate::types::DeviceInfo;

const BROWSERS_FIELD: &str = "field_browsers";

/// Matches visitors whose detected browser is one of a configured set of
/// names, compared case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserRule {
    browsers: IndexSet<String>,
}

impl BrowserRule {
    /// Parse a comma-separated list such as `"Chrome, Firefox"`. Entries are
    /// trimmed and lowercased; blank entries and duplicates are dropped.
    pub fn parse(list: &str) -> Self {
        let browsers = list
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_lowercase)
            .collect();
        Self { browsers }
    }

    pub fn from_settings(settings: &RuleSettings) -> Self {
        Self::parse(settings.get(BROWSERS_FIELD).unwrap_or_default())
    }

    /// Configured names, lowercased, in first-seen order.
    pub fn browsers(&self) -> impl Iterator<Item = &str> {
        self.browsers.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.browsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.browsers.is_empty()
    }
}

impl Predicate for BrowserRule {
    fn is_configured(&self) -> bool {
        !self.browsers.is_empty()
    }

    fn matches(&self, device: &DeviceInfo) -> bool {
        // Detected names come from the classifier already trimmed.
        device
            .browser_name
            .as_deref()
            .is_some_and(|name| self.browsers.contains(&name.to_lowercase()))
    }
}
