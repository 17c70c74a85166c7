//! Default substitution and boolean coercion over a settings mapping.

use serde_json::Value;

use crate::config::{CoercionPolicy, NormalizerConfig};
use crate::error::{OptionsError, OptionsResult};

use super::Settings;
use super::defaults::JUJUGUI_PREFIX;
use super::keys::SETTINGS_TABLE;
use super::schemas::{GuiOptions, SettingKind, SettingSpec};

/// Strings coerced to `true` (compared case-insensitively)
pub const TRUTHY: &[&str] = &["true", "on"];

/// Strings coerced to `false` (compared case-insensitively)
pub const FALSY: &[&str] = &["false", "off"];

/// Parse a string from the truthy/falsy vocabulary
pub fn parse_bool(value: &str) -> Option<bool> {
    if TRUTHY.iter().any(|t| value.eq_ignore_ascii_case(t)) {
        Some(true)
    } else if FALSY.iter().any(|f| value.eq_ignore_ascii_case(f)) {
        Some(false)
    } else {
        None
    }
}

/// Normalize unprefixed settings in place with the lenient policy.
///
/// Every key of the settings table ends up present: absent, null and empty
/// string values are replaced by the default, and boolean settings given as
/// `"true"`/`"on"`/`"false"`/`"off"` are coerced. Unknown keys are untouched.
pub fn normalize(settings: &mut Settings) {
    Normalizer::new().normalize_lenient(settings);
}

/// Result of normalizing a single entry
enum Outcome {
    Defaulted,
    Coerced(bool),
    Kept,
    Unrecognized(Value),
}

/// Applies the settings table to host settings mappings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalizer {
    prefix: Option<String>,
    policy: CoercionPolicy,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizer for the host's `jujugui.`-namespaced keys
    pub fn namespaced() -> Self {
        Self::new().with_prefix(JUJUGUI_PREFIX)
    }

    pub fn from_config(config: &NormalizerConfig) -> Self {
        Self {
            prefix: config.prefix.clone().filter(|p| !p.is_empty()),
            policy: config.policy,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_policy(mut self, policy: CoercionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn policy(&self) -> CoercionPolicy {
        self.policy
    }

    /// Full key of a table entry in the host mapping
    pub fn key_for(&self, spec: &SettingSpec) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, spec.key),
            None => spec.key.to_string(),
        }
    }

    /// All recognized keys, prefixed, in table order
    pub fn keys(&self) -> Vec<String> {
        SETTINGS_TABLE.iter().map(|spec| self.key_for(spec)).collect()
    }

    /// The mapping produced by normalizing an empty mapping
    pub fn defaults(&self) -> Settings {
        SETTINGS_TABLE
            .iter()
            .map(|spec| (self.key_for(spec), spec.default.to_value()))
            .collect()
    }

    /// Normalize in place, leaving unrecognized boolean values unchanged.
    ///
    /// Ignores the configured policy; use [`Normalizer::try_normalize`] to honor it.
    pub fn normalize_lenient(&self, settings: &mut Settings) {
        for spec in SETTINGS_TABLE {
            let key = self.key_for(spec);
            if let Outcome::Unrecognized(value) = self.normalize_entry(spec, &key, settings) {
                warn_unrecognized(&key, &value);
            }
        }
    }

    /// Normalize in place, honoring the configured coercion policy.
    ///
    /// Under the strict policy the first boolean setting (in table order)
    /// outside the vocabulary is reported and the mapping is left untouched.
    pub fn try_normalize(&self, settings: &mut Settings) -> OptionsResult<()> {
        if self.policy == CoercionPolicy::Strict {
            if let Some((key, value)) = self.first_unrecognized(settings) {
                return Err(OptionsError::InvalidBoolean { key, value });
            }
        }
        self.normalize_lenient(settings);
        Ok(())
    }

    /// First boolean setting whose value cannot be coerced, without mutating
    fn first_unrecognized(&self, settings: &Settings) -> Option<(String, Value)> {
        SETTINGS_TABLE
            .iter()
            .filter(|spec| spec.kind == SettingKind::Boolean)
            .find_map(|spec| {
                let key = self.key_for(spec);
                match settings.get(&key) {
                    None | Some(Value::Null | Value::Bool(_)) => None,
                    Some(Value::String(s)) if s.is_empty() || parse_bool(s).is_some() => None,
                    Some(value) => Some((key, value.clone())),
                }
            })
    }

    /// Build the typed view from a normalized mapping
    pub fn options(&self, settings: &Settings) -> OptionsResult<GuiOptions> {
        let view: serde_json::Map<String, Value> = SETTINGS_TABLE
            .iter()
            .filter_map(|spec| {
                settings
                    .get(&self.key_for(spec))
                    .map(|value| (spec.key.to_string(), value.clone()))
            })
            .collect();

        serde_json::from_value(Value::Object(view))
            .map_err(|source| OptionsError::Deserialize { source })
    }

    fn normalize_entry(&self, spec: &SettingSpec, key: &str, settings: &mut Settings) -> Outcome {
        // An explicit `false` is a value, not an absence
        let outcome = match settings.get(key) {
            None | Some(Value::Null) => Outcome::Defaulted,
            Some(Value::String(s)) if s.is_empty() => Outcome::Defaulted,
            Some(Value::Bool(_)) => Outcome::Kept,
            Some(value) if spec.kind == SettingKind::Boolean => {
                match value.as_str().and_then(parse_bool) {
                    Some(b) => Outcome::Coerced(b),
                    None => Outcome::Unrecognized(value.clone()),
                }
            }
            Some(_) => Outcome::Kept,
        };

        match &outcome {
            Outcome::Defaulted => {
                tracing::debug!(key = %key, "Setting defaulted");
                settings.insert(key.to_string(), spec.default.to_value());
            }
            Outcome::Coerced(b) => {
                tracing::debug!(key = %key, value = *b, "Setting coerced to boolean");
                settings.insert(key.to_string(), Value::Bool(*b));
            }
            Outcome::Kept | Outcome::Unrecognized(_) => {}
        }

        outcome
    }
}

fn warn_unrecognized(key: &str, value: &Value) {
    tracing::warn!(
        key = %key,
        value = %value,
        "Unrecognized boolean setting value, leaving unchanged"
    );
}
