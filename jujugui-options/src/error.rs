use thiserror::Error;

/// Errors raised while building or applying the GUI options
#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("Invalid boolean value for {key}: {value}")]
    InvalidBoolean {
        key: String,
        value: serde_json::Value,
    },

    #[error("Settings do not match the options schema")]
    Deserialize {
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("IO error")]
    Io(#[from] std::io::Error),
}

impl OptionsError {
    /// Stable machine-readable code for the error kind
    pub fn error_code(&self) -> &'static str {
        match self {
            OptionsError::InvalidBoolean { .. } => "invalid_boolean",
            OptionsError::Deserialize { .. } => "options_schema_mismatch",
            OptionsError::Config { .. } => "config_error",
            OptionsError::InvalidInput { .. } => "invalid_input",
            OptionsError::Io(_) => "io_error",
        }
    }
}

/// Result type alias for options operations
pub type OptionsResult<T> = Result<T, OptionsError>;
