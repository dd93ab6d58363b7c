//! Error types for the sequence codecs.

use thiserror::Error;

/// Boxed cause carried by [`SeqError::Parse`].
pub type ParseCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for encode and decode operations.
#[derive(Error, Debug)]
pub enum SeqError {
    /// A membership clause was requested for a sequence with no elements.
    #[error("cannot build an IN clause from an empty {kind} sequence")]
    EmptyInput { kind: &'static str },

    /// The driver handed over a value of a shape this codec does not read.
    #[error("type mismatch: expected {expected}, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A single token failed to parse as an element.
    #[error("converting '{token}' into {kind}: {source}")]
    Parse {
        token: String,
        kind: &'static str,
        #[source]
        source: ParseCause,
    },

    /// Binary array payload inconsistent with its own header.
    #[error("malformed binary array payload: {0}")]
    MalformedPayload(String),

    /// Text array literal without a usable `{...}` envelope.
    #[error("malformed array literal: {0}")]
    MalformedLiteral(String),

    /// JSON value is neither an array of strings nor an array of numbers.
    #[error("JSON couldn't be read as an array of strings nor an array of numbers: {0}")]
    UnsupportedJsonShape(#[source] serde_json::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error (invalid YAML values, out of range settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (config file reads)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl SeqError {
    /// Create a Parse error for the offending token.
    pub fn parse<E>(token: impl Into<String>, kind: &'static str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        SeqError::Parse {
            token: token.into(),
            kind,
            source: Box::new(source),
        }
    }

    /// Create a MalformedPayload error
    pub fn malformed(message: impl Into<String>) -> Self {
        SeqError::MalformedPayload(message.into())
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, SeqError>;
