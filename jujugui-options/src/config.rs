//! Configuration for the normalizer itself: key namespace and coercion policy.

mod loader;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub use loader::{CONFIG_FILE_NAME, load_normalizer_config, load_normalizer_config_from};

/// What to do with a boolean setting whose value is outside the string vocabulary
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CoercionPolicy {
    /// Leave the value unchanged and log a warning
    #[default]
    Lenient,
    /// Report `OptionsError::InvalidBoolean`
    Strict,
}

/// Normalizer configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Namespace prepended to every table key, e.g. `jujugui.`
    #[serde(default)]
    pub prefix: Option<String>,

    #[serde(default)]
    pub policy: CoercionPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_policy_names() {
        assert_eq!(CoercionPolicy::from_str("strict").unwrap(), CoercionPolicy::Strict);
        assert_eq!(CoercionPolicy::Lenient.to_string(), "lenient");
        assert!(CoercionPolicy::from_str("loose").is_err());
    }

    #[test]
    fn test_config_deserialize_defaults() {
        let config: NormalizerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, NormalizerConfig::default());
        assert_eq!(config.policy, CoercionPolicy::Lenient);
        assert!(config.prefix.is_none());
    }
}
