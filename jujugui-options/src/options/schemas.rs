//! Type definitions for the settings table and the typed options view.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};

use super::defaults::DEFAULT_SOCKET_TEMPLATE;
use super::keys::spec_for;

/// Canonical type a setting holds after normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SettingKind {
    /// Coerced from the truthy/falsy string vocabulary
    Boolean,
    /// Kept as given
    StringOrNull,
}

/// Value substituted for an absent or empty setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Bool(bool),
    Str(&'static str),
    Null,
}

impl DefaultValue {
    pub fn to_value(self) -> Value {
        match self {
            DefaultValue::Bool(b) => Value::Bool(b),
            DefaultValue::Str(s) => Value::String(s.to_string()),
            DefaultValue::Null => Value::Null,
        }
    }
}

/// Declarative description of one recognized setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingSpec {
    pub key: &'static str,
    pub default: DefaultValue,
    pub kind: SettingKind,
}

impl SettingSpec {
    pub const fn boolean(key: &'static str, default: bool) -> Self {
        Self {
            key,
            default: DefaultValue::Bool(default),
            kind: SettingKind::Boolean,
        }
    }

    pub const fn string(key: &'static str, default: Option<&'static str>) -> Self {
        let default = match default {
            Some(s) => DefaultValue::Str(s),
            None => DefaultValue::Null,
        };
        Self {
            key,
            default,
            kind: SettingKind::StringOrNull,
        }
    }
}

/// Typed view of a normalized settings mapping
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GuiOptions {
    pub auth: Option<String>,

    pub base_url: Option<String>,

    pub charmstore_url: Option<String>,

    /// Serve combined static assets
    pub combine: bool,

    #[serde(rename = "GTM_enabled")]
    pub gtm_enabled: bool,

    pub gzip: bool,

    pub interactive_login: bool,

    pub jem_url: Option<String>,

    pub password: Option<String>,

    /// Serve unminified sources
    pub raw: bool,

    pub sandbox: bool,

    #[serde(rename = "socketTemplate")]
    pub socket_template: Option<String>,

    pub user: Option<String>,

    pub insecure: bool,

    /// Running as the hosted ("GUI in storefront") deployment
    pub gisf: bool,

    pub plans_url: Option<String>,

    pub terms_url: Option<String>,
}

// Defaults are read from the settings table so values live in one place
impl Default for GuiOptions {
    fn default() -> Self {
        Self {
            auth: table_string("auth"),
            base_url: table_string("base_url"),
            charmstore_url: table_string("charmstore_url"),
            combine: table_bool("combine"),
            gtm_enabled: table_bool("GTM_enabled"),
            gzip: table_bool("gzip"),
            interactive_login: table_bool("interactive_login"),
            jem_url: table_string("jem_url"),
            password: table_string("password"),
            raw: table_bool("raw"),
            sandbox: table_bool("sandbox"),
            socket_template: table_string("socketTemplate"),
            user: table_string("user"),
            insecure: table_bool("insecure"),
            gisf: table_bool("gisf"),
            plans_url: table_string("plans_url"),
            terms_url: table_string("terms_url"),
        }
    }
}

fn table_default(key: &str) -> DefaultValue {
    spec_for(key).map_or(DefaultValue::Null, |spec| spec.default)
}

fn table_bool(key: &str) -> bool {
    matches!(table_default(key), DefaultValue::Bool(true))
}

fn table_string(key: &str) -> Option<String> {
    match table_default(key) {
        DefaultValue::Str(s) => Some(s.to_string()),
        DefaultValue::Bool(_) | DefaultValue::Null => None,
    }
}

impl GuiOptions {
    /// Build the model connection path by substituting `$uuid` in the socket template
    pub fn socket_url(&self, uuid: &str) -> String {
        self.socket_template
            .as_deref()
            .unwrap_or(DEFAULT_SOCKET_TEMPLATE)
            .replace("$uuid", uuid)
    }
}
