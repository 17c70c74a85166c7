//! Settings normalization for the Juju GUI web-server plugin.
//!
//! The host calls [`normalize`] (or a configured [`Normalizer`]) once on its
//! settings mapping before reading any GUI option from it.

pub mod config;
pub mod error;
pub mod options;

pub use crate::config::{
    CoercionPolicy, NormalizerConfig, load_normalizer_config, load_normalizer_config_from,
};
pub use crate::error::{OptionsError, OptionsResult};
pub use crate::options::{
    DEFAULT_CHARMSTORE_URL, DEFAULT_PLANS_URL, DEFAULT_SOCKET_TEMPLATE, DEFAULT_TERMS_URL,
    GuiOptions, JUJUGUI_PREFIX, Normalizer, SETTINGS_TABLE, SettingKind, SettingSpec, Settings,
    normalize,
};
