use super::Predicate;
use crate::config::RuleSettings;
use crate::helpers::is_enabled;
use crate::types::{DeviceClass, DeviceInfo};

/// Matches visitors whose device falls in any of the enabled classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceClassRule {
    pub match_mobile: bool,
    pub match_phone: bool,
    pub match_tablet: bool,
    pub match_desktop: bool,
    pub match_bot: bool,
}

impl DeviceClassRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the five `field_is_*` flags. Only the exact value `"1"` enables a
    /// class; missing keys leave it disabled.
    pub fn from_settings(settings: &RuleSettings) -> Self {
        DeviceClass::ALL
            .into_iter()
            .filter(|class| is_enabled(settings.get(class.field_name())))
            .fold(Self::default(), Self::with)
    }

    /// Enable `class`.
    pub fn with(mut self, class: DeviceClass) -> Self {
        *self.flag_mut(class) = true;
        self
    }

    pub fn enabled(&self, class: DeviceClass) -> bool {
        match class {
            DeviceClass::Mobile => self.match_mobile,
            DeviceClass::Phone => self.match_phone,
            DeviceClass::Tablet => self.match_tablet,
            DeviceClass::Desktop => self.match_desktop,
            DeviceClass::Bot => self.match_bot,
        }
    }

    pub fn enabled_classes(&self) -> impl Iterator<Item = DeviceClass> + '_ {
        DeviceClass::ALL.into_iter().filter(|c| self.enabled(*c))
    }

    fn flag_mut(&mut self, class: DeviceClass) -> &mut bool {
        match class {
            DeviceClass::Mobile => &mut self.match_mobile,
            DeviceClass::Phone => &mut self.match_phone,
            DeviceClass::Tablet => &mut self.match_tablet,
            DeviceClass::Desktop => &mut self.match_desktop,
            DeviceClass::Bot => &mut self.match_bot,
        }
    }
}

impl Predicate for DeviceClassRule {
    fn is_configured(&self) -> bool {
        self.enabled_classes().next().is_some()
    }

    fn matches(&self, device: &DeviceInfo) -> bool {
        self.enabled_classes().any(|class| device.is(class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tablet() -> DeviceInfo {
        DeviceInfo {
            is_mobile: true,
            is_tablet: true,
            ..Default::default()
        }
    }

    #[test]
    fn settings_enable_only_exact_one() {
        let settings = RuleSettings::from_pairs([
            ("field_is_mobile", "1"),
            ("field_is_phone", "0"),
            ("field_is_tablet", "yes"),
            ("field_is_bot", "1"),
            ("field_unrelated", "1"),
        ]);
        let rule = DeviceClassRule::from_settings(&settings);

        assert_eq!(
            rule,
            DeviceClassRule {
                match_mobile: true,
                match_bot: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn nothing_enabled_never_matches() {
        let rule = DeviceClassRule::from_settings(&RuleSettings::default());
        assert!(!rule.is_configured());
        for device in [
            tablet(),
            DeviceInfo {
                is_mobile: true,
                is_tablet: true,
                is_desktop: true,
                is_bot: true,
                ..Default::default()
            },
        ] {
            assert!(!rule.matches(&device));
        }
    }

    #[test]
    fn tablets_are_mobile_but_not_phones() {
        assert!(DeviceClassRule::new().with(DeviceClass::Mobile).matches(&tablet()));
        assert!(DeviceClassRule::new().with(DeviceClass::Tablet).matches(&tablet()));
        assert!(!DeviceClassRule::new().with(DeviceClass::Phone).matches(&tablet()));
    }

    #[test]
    fn any_enabled_class_matches() {
        let rule = DeviceClassRule::new()
            .with(DeviceClass::Desktop)
            .with(DeviceClass::Bot);
        let bot = DeviceInfo {
            is_bot: true,
            ..Default::default()
        };
        let phone = DeviceInfo {
            is_mobile: true,
            ..Default::default()
        };

        assert!(rule.matches(&bot));
        assert!(!rule.matches(&phone));
        assert_eq!(
            rule.enabled_classes().collect::<Vec<_>>(),
            vec![DeviceClass::Desktop, DeviceClass::Bot]
        );
    }

    #[test]
    fn overlapping_classes_stay_permissive() {
        let desktop_bot = DeviceInfo {
            is_desktop: true,
            is_bot: true,
            ..Default::default()
        };
        assert!(DeviceClassRule::new().with(DeviceClass::Desktop).matches(&desktop_bot));
        assert!(DeviceClassRule::new().with(DeviceClass::Bot).matches(&desktop_bot));
    }
}
