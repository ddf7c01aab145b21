//! Error types for the plugin contract.

/// Errors raised at the host boundary: option validation, option loading,
/// and template validation.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A set option contains a key outside its valid keys.
    #[error("invalid value '{key}' for option '{option}'")]
    InvalidOptionKey {
        /// The option name.
        option: String,
        /// The rejected key.
        key: String,
    },

    /// A template declares data for a placeholder its label never uses.
    #[error("placeholder '{placeholder}' does not appear in label '{label}'")]
    UnusedPlaceholder {
        /// The template label.
        label: String,
        /// The missing placeholder token.
        placeholder: String,
    },

    /// A template has a weight of zero.
    #[error("template '{0}' has zero weight")]
    ZeroWeight(String),

    /// A placeholder asks for zero values.
    #[error("placeholder '{placeholder}' in '{label}' draws zero values")]
    ZeroCount {
        /// The template label.
        label: String,
        /// The placeholder token.
        placeholder: String,
    },

    /// Option values could not be parsed.
    #[error("invalid options: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for contract operations.
pub type CoreResult<T> = Result<T, CoreError>;
