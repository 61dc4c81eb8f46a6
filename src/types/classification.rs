use serde::Deserialize;

/// Signals a [`Classifier`](crate::Classifier) extracts from one User-Agent.
///
/// String fields may be empty; [`DeviceInfo`](super::DeviceInfo) treats an
/// empty string the same as a missing one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawClassification {
    pub is_mobile: bool,
    pub is_tablet: bool,
    pub is_desktop: bool,
    pub is_bot: bool,
    pub browser_name: Option<String>,
    pub browser_version: Option<String>,
    pub os_name: Option<String>,
    pub os_version: Option<String>,
    pub device_brand: Option<String>,
    pub device_model: Option<String>,
}
