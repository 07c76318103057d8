use thiserror::Error;

/// Top-level error type for wordex.
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// The lookup table has no top-level keys.
    #[error("The supplied lookup JSON contains no keywords.")]
    EmptyLookup,

    /// The requested locale is not a top-level key of the lookup table.
    #[error("The target localisation '{0}' was not found in the supplied lookup JSON.")]
    MissingLocale(String),

    /// Lookup JSON with an unsupported shape.
    #[error("invalid lookup: {0}")]
    InvalidLookup(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
