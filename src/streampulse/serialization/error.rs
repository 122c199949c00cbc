//! Error types for wire serialization

/// Serialization error type shared by every wire format
#[derive(Debug)]
pub enum SerializationError {
    SerializationFailed(String),
    DeserializationFailed(String),
    SchemaError(String),
}

impl std::fmt::Display for SerializationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SerializationError::SerializationFailed(msg) => {
                write!(f, "Serialization failed: {}", msg)
            }
            SerializationError::DeserializationFailed(msg) => {
                write!(f, "Deserialization failed: {}", msg)
            }
            SerializationError::SchemaError(msg) => {
                write!(f, "Schema error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SerializationError {}

impl SerializationError {
    /// Helper to wrap a serde_json error with context
    pub fn json_error(context: &str, err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            SerializationError::DeserializationFailed(format!("{}: {}", context, err))
        } else {
            SerializationError::SerializationFailed(format!("{}: {}", context, err))
        }
    }
}
