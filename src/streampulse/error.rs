/*!
Top-level application error for the runnable binaries.
*/

use thiserror::Error;

use crate::streampulse::config::ConfigError;
use crate::streampulse::kafka::BusError;
use crate::streampulse::serialization::SerializationError;

/// Main application error type
#[derive(Debug, Error)]
pub enum PulseError {
    /// Kafka-related errors with context
    #[error("Kafka operation failed: {message}")]
    Kafka {
        #[source]
        source: BusError,
        message: String,
    },

    /// Configuration errors are fatal at startup
    #[error("Configuration error")]
    Config(#[from] ConfigError),

    /// Serialization errors that escape the per-message containment
    #[error("Serialization failed")]
    Serialization(#[from] SerializationError),
}

impl PulseError {
    /// Helper to create Kafka errors with context
    pub fn kafka(source: impl Into<BusError>, message: impl Into<String>) -> Self {
        Self::Kafka {
            source: source.into(),
            message: message.into(),
        }
    }
}
