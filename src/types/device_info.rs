use super::{DeviceClass, RawClassification};
use crate::helpers::non_empty;

/// Normalized, immutable result of classifying one User-Agent.
///
/// Shared behind an `Arc` by [`DetectionService`](crate::DetectionService);
/// string fields are never `Some("")`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceInfo {
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

impl DeviceInfo {
    /// Mobile devices that are not tablets.
    pub fn is_phone(&self) -> bool {
        self.is_mobile && !self.is_tablet
    }

    pub fn has_browser_info(&self) -> bool {
        self.browser_name.is_some()
    }

    pub fn has_os_info(&self) -> bool {
        self.os_name.is_some()
    }

    pub fn has_device_info(&self) -> bool {
        self.device_brand.is_some() || self.device_model.is_some()
    }

    /// Whether this device belongs to `class`.
    pub fn is(&self, class: DeviceClass) -> bool {
        match class {
            DeviceClass::Mobile => self.is_mobile,
            DeviceClass::Phone => self.is_phone(),
            DeviceClass::Tablet => self.is_tablet,
            DeviceClass::Desktop => self.is_desktop,
            DeviceClass::Bot => self.is_bot,
        }
    }
}

impl From<RawClassification> for DeviceInfo {
    fn from(raw: RawClassification) -> Self {
        Self {
            is_mobile: raw.is_mobile,
            is_tablet: raw.is_tablet,
            is_desktop: raw.is_desktop,
            is_bot: raw.is_bot,
            browser_name: non_empty(raw.browser_name),
            browser_version: non_empty(raw.browser_version),
            os_name: non_empty(raw.os_name),
            os_version: non_empty(raw.os_version),
            device_brand: non_empty(raw.device_brand),
            device_model: non_empty(raw.device_model),
        }
    }
}
