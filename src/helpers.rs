/// Collapse an empty string into `None`.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// A checkbox-style configuration value is on only when it is exactly `"1"`.
pub(crate) fn is_enabled(value: Option<&str>) -> bool {
    value == Some("1")
}
