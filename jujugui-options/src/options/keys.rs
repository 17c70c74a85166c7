//! The settings table: every recognized key, its default and its kind.

use std::collections::HashSet;

use super::defaults::{
    DEFAULT_CHARMSTORE_URL, DEFAULT_PLANS_URL, DEFAULT_SOCKET_TEMPLATE, DEFAULT_TERMS_URL,
};
use super::schemas::SettingSpec;

/// All recognized settings, in normalization order
pub const SETTINGS_TABLE: &[SettingSpec] = &[
    SettingSpec::string("auth", None),
    SettingSpec::string("base_url", Some("")),
    SettingSpec::string("charmstore_url", Some(DEFAULT_CHARMSTORE_URL)),
    SettingSpec::boolean("combine", true),
    SettingSpec::boolean("GTM_enabled", false),
    SettingSpec::boolean("gzip", true),
    SettingSpec::boolean("interactive_login", false),
    SettingSpec::string("jem_url", None),
    SettingSpec::string("password", None),
    SettingSpec::boolean("raw", false),
    SettingSpec::boolean("sandbox", false),
    SettingSpec::string("socketTemplate", Some(DEFAULT_SOCKET_TEMPLATE)),
    SettingSpec::string("user", None),
    SettingSpec::boolean("insecure", false),
    SettingSpec::boolean("gisf", false),
    SettingSpec::string("plans_url", Some(DEFAULT_PLANS_URL)),
    SettingSpec::string("terms_url", Some(DEFAULT_TERMS_URL)),
];

/// Get all recognized (unprefixed) keys as a HashSet
pub fn valid_keys() -> HashSet<&'static str> {
    SETTINGS_TABLE.iter().map(|spec| spec.key).collect()
}

/// Look up the table entry for an unprefixed key
pub fn spec_for(key: &str) -> Option<&'static SettingSpec> {
    SETTINGS_TABLE.iter().find(|spec| spec.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SettingKind;

    #[test]
    fn test_table_keys_are_unique() {
        assert_eq!(valid_keys().len(), SETTINGS_TABLE.len());
        assert_eq!(SETTINGS_TABLE.len(), 17);
    }

    #[test]
    fn test_spec_for() {
        let gzip = spec_for("gzip").unwrap();
        assert_eq!(gzip.kind, SettingKind::Boolean);

        let socket = spec_for("socketTemplate").unwrap();
        assert_eq!(socket.kind, SettingKind::StringOrNull);

        // Lookups are exact: the table uses the host's mixed-case names
        assert!(spec_for("gtm_enabled").is_none());
        assert!(spec_for("jujugui.gzip").is_none());
    }

    #[test]
    fn test_boolean_defaults_are_booleans() {
        for spec in SETTINGS_TABLE {
            let default = spec.default.to_value();
            match spec.kind {
                SettingKind::Boolean => assert!(default.is_boolean(), "{}", spec.key),
                SettingKind::StringOrNull => {
                    assert!(default.is_string() || default.is_null(), "{}", spec.key)
                }
            }
        }
    }
}
