mod classifier;
mod config;
mod detection;
mod error;
mod helpers;
mod rule;
mod session;
mod types;

pub use classifier::{Classifier, StaticClassifier};
pub use config::{RuleRecord, RuleSet, RuleSettings, RuleType};
pub use detection::{DetectionService, RequestContext};
pub use error::{Error, Result};
pub use rule::{BrowserRule, DeviceClassRule, Predicate, Rule, RuleKind};
pub use session::{MemorySession, RuleId, SessionStore};
pub use types::*;
