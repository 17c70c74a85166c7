//! Configuration loading from files.

use ::config::{Config, File};

use crate::error::{OptionsError, OptionsResult};

use super::NormalizerConfig;

/// Base name of the optional config file (any extension the config crate understands)
pub const CONFIG_FILE_NAME: &str = "jujugui-options";

/// Load normalizer configuration from `jujugui-options.{toml,json,yaml,ini,...}`
/// in the working directory, falling back to defaults when absent
pub fn load_normalizer_config() -> OptionsResult<NormalizerConfig> {
    load_normalizer_config_from(CONFIG_FILE_NAME)
}

/// Load normalizer configuration from the named file source
pub fn load_normalizer_config_from(name: &str) -> OptionsResult<NormalizerConfig> {
    let config: NormalizerConfig = Config::builder()
        .add_source(File::with_name(name).required(false))
        .build()
        .map_err(|e| OptionsError::Config {
            message: format!("Failed to build config: {}", e),
        })?
        .try_deserialize()
        .map_err(|e| OptionsError::Config {
            message: format!("Failed to deserialize normalizer config: {}", e),
        })?;

    tracing::debug!(
        source = %name,
        prefix = ?config.prefix,
        policy = %config.policy,
        "Normalizer configuration loaded"
    );

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CoercionPolicy;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let name = dir.path().join("absent");

        let config = load_normalizer_config_from(name.to_str().unwrap()).unwrap();
        assert_eq!(config, NormalizerConfig::default());
    }

    #[test]
    fn test_load_toml_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "prefix = \"jujugui.\"").unwrap();
        writeln!(file, "policy = \"strict\"").unwrap();
        file.flush().unwrap();

        let config = load_normalizer_config_from(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.prefix.as_deref(), Some("jujugui."));
        assert_eq!(config.policy, CoercionPolicy::Strict);
    }

    #[test]
    fn test_unknown_policy_is_config_error() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "policy = \"sometimes\"").unwrap();
        file.flush().unwrap();

        let err = load_normalizer_config_from(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, OptionsError::Config { .. }));
    }
}
