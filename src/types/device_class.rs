/// Device classes a rule can target.
///
/// The classes overlap: a tablet is also mobile, and nothing stops a classifier
/// from reporting a desktop bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    Mobile,
    Phone,
    Tablet,
    Desktop,
    Bot,
}

impl DeviceClass {
    /// Every class, in the order a device rule checks them.
    pub const ALL: [DeviceClass; 5] = [
        Self::Mobile,
        Self::Phone,
        Self::Tablet,
        Self::Desktop,
        Self::Bot,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Phone => "phone",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
            Self::Bot => "bot",
        }
    }

    /// Configuration key that enables this class on a device rule.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Mobile => "field_is_mobile",
            Self::Phone => "field_is_phone",
            Self::Tablet => "field_is_tablet",
            Self::Desktop => "field_is_desktop",
            Self::Bot => "field_is_bot",
        }
    }
}

impl std::fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
