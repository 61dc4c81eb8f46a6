use std::sync::Arc;

use moka::sync::Cache;
use tracing::{debug, trace};

use crate::classifier::Classifier;
use crate::types::DeviceInfo;

/// The parts of an incoming HTTP request the detection layer looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    user_agent: String,
}

impl RequestContext {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }

    /// Build from an optional `User-Agent` header value; a missing header
    /// reads as an empty string.
    pub fn from_header(user_agent: Option<&str>) -> Self {
        Self::new(user_agent.unwrap_or_default())
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// Classifies User-Agent strings and remembers the result per exact string.
///
/// One service is meant to be built at startup and shared by reference across
/// request handlers; the cache is safe for concurrent lookups and inserts.
pub struct DetectionService {
    classifier: Box<dyn Classifier>,
    cache: Cache<String, Arc<DeviceInfo>>,
}

impl DetectionService {
    /// Service with an unbounded cache.
    pub fn new(classifier: impl Classifier + 'static) -> Self {
        Self {
            classifier: Box::new(classifier),
            cache: Cache::builder().build(),
        }
    }

    /// Service whose cache holds at most `max_entries` User-Agents; colder
    /// entries are evicted first.
    pub fn with_capacity(classifier: impl Classifier + 'static, max_entries: u64) -> Self {
        Self {
            classifier: Box::new(classifier),
            cache: Cache::builder().max_capacity(max_entries).build(),
        }
    }

    /// Classify `user_agent`, reusing an earlier result for the identical string.
    ///
    /// Returns `None` for an empty string, and when the classifier cannot
    /// classify the string. Neither case touches the cache.
    pub fn detect(&self, user_agent: &str) -> Option<Arc<DeviceInfo>> {
        if user_agent.is_empty() {
            return None;
        }

        let entry = self
            .cache
            .entry_by_ref(user_agent)
            .or_optionally_insert_with(|| self.classify(user_agent))?;
        if !entry.is_fresh() {
            trace!(user_agent, "device info cache hit");
        }
        Some(entry.into_value())
    }

    pub fn detect_for(&self, request: &RequestContext) -> Option<Arc<DeviceInfo>> {
        self.detect(request.user_agent())
    }

    /// Drop every cached result. Later lookups classify again and hand out
    /// fresh `DeviceInfo` instances.
    pub fn clear_cache(&self) {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks();
    }

    /// Approximate number of cached User-Agents.
    pub fn cached_entries(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    fn classify(&self, user_agent: &str) -> Option<Arc<DeviceInfo>> {
        match self.classifier.classify(user_agent) {
            Some(raw) => {
                let info = DeviceInfo::from(raw);
                debug!(
                    user_agent,
                    mobile = info.is_mobile,
                    tablet = info.is_tablet,
                    desktop = info.is_desktop,
                    bot = info.is_bot,
                    browser = info.browser_name.as_deref().unwrap_or(""),
                    "classified user agent"
                );
                Some(Arc::new(info))
            }
            None => {
                debug!(user_agent, "classifier could not classify user agent");
                None
            }
        }
    }
}

impl std::fmt::Debug for DetectionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetectionService")
            .field("cached_entries", &self.cache.entry_count())
            .finish_non_exhaustive()
    }
}
