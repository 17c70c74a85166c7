//! GUI options: the settings table, its defaults, and the normalizer that
//! fills in and coerces a host settings mapping.
//!
//! The host web server owns a flat `key -> value` mapping (usually parsed from
//! its ini file, so everything arrives as strings). Normalizing it guarantees
//! every recognized key is present with a value of the declared kind.

mod defaults;
mod keys;
mod normalize;
mod schemas;

use std::collections::HashMap;

pub use defaults::{
    DEFAULT_CHARMSTORE_URL, DEFAULT_PLANS_URL, DEFAULT_SOCKET_TEMPLATE, DEFAULT_TERMS_URL,
    JUJUGUI_PREFIX,
};
pub use keys::{SETTINGS_TABLE, spec_for, valid_keys};
pub use normalize::{FALSY, Normalizer, TRUTHY, normalize, parse_bool};
pub use schemas::{DefaultValue, GuiOptions, SettingKind, SettingSpec};

/// Caller-owned settings mapping, mutated in place by the normalizer
pub type Settings = HashMap<String, serde_json::Value>;
