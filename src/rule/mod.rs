mod browser;
mod device;

pub use browser::BrowserRule;
pub use device::DeviceClassRule;

use tracing::{debug, trace};

use crate::detection::{DetectionService, RequestContext};
use crate::session::{RuleId, SessionStore};
use crate::types::DeviceInfo;

/// The check a rule kind runs against a classified device.
pub trait Predicate {
    /// `false` when the rule has nothing to look for. Such a rule never
    /// matches, and the device is not classified at all.
    fn is_configured(&self) -> bool;

    fn matches(&self, device: &DeviceInfo) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleKind {
    Device(DeviceClassRule),
    Browser(BrowserRule),
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Device(_) => "device",
            Self::Browser(_) => "browser",
        }
    }
}

impl Predicate for RuleKind {
    fn is_configured(&self) -> bool {
        match self {
            Self::Device(rule) => rule.is_configured(),
            Self::Browser(rule) => rule.is_configured(),
        }
    }

    fn matches(&self, device: &DeviceInfo) -> bool {
        match self {
            Self::Device(rule) => rule.matches(device),
            Self::Browser(rule) => rule.matches(device),
        }
    }
}

/// A configured visitor-targeting rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub id: RuleId,
    pub kind: RuleKind,
    /// Negate the final result.
    pub invert: bool,
    /// Remember the result in the visitor's session and reuse it.
    pub use_session: bool,
}

impl Rule {
    pub fn new(id: impl Into<RuleId>, kind: RuleKind) -> Self {
        Self {
            id: id.into(),
            kind,
            invert: false,
            use_session: false,
        }
    }

    pub fn device(id: impl Into<RuleId>, rule: DeviceClassRule) -> Self {
        Self::new(id, RuleKind::Device(rule))
    }

    pub fn browser(id: impl Into<RuleId>, rule: BrowserRule) -> Self {
        Self::new(id, RuleKind::Browser(rule))
    }

    pub fn inverted(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    pub fn with_session(mut self, use_session: bool) -> Self {
        self.use_session = use_session;
        self
    }

    /// Decide whether the visitor behind `request` matches this rule.
    ///
    /// A missing request, an empty or unclassifiable User-Agent and an
    /// unconfigured rule all count as "no match" before inversion. With
    /// `use_session` set, the final (inverted) result is written to `session`,
    /// and a stored entry short-circuits later calls: it is returned through
    /// the inversion again without classifying the visitor.
    pub fn evaluate(
        &self,
        detection: &DetectionService,
        request: Option<&RequestContext>,
        session: &mut dyn SessionStore,
    ) -> bool {
        if self.use_session {
            if let Some(stored) = session.get(&self.id) {
                trace!(rule = %self.id, stored, "rule result from session");
                return self.apply_invert(stored);
            }
        }

        let matched = self.kind.is_configured()
            && request
                .and_then(|request| detection.detect_for(request))
                .is_some_and(|device| self.kind.matches(&device));

        let mut result = self.apply_invert(matched);
        if self.use_session {
            result = session.set(&self.id, result);
        }

        debug!(
            rule = %self.id,
            kind = self.kind.as_str(),
            matched,
            invert = self.invert,
            result,
            "evaluated rule"
        );
        result
    }

    fn apply_invert(&self, matched: bool) -> bool {
        matched != self.invert
    }
}
