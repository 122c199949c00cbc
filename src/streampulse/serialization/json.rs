use serde::{Deserialize, Serialize};

use crate::streampulse::serialization::{SerializationError, Serializer};

/// Serialize a struct to JSON bytes
pub fn to_json<T: Serialize>(value: &T) -> Result<Vec<u8>, SerializationError> {
    serde_json::to_vec(value)
        .map_err(|e| SerializationError::json_error("Failed to serialize to JSON bytes", e))
}

/// Deserialize JSON bytes to a struct
pub fn from_json<T: for<'de> Deserialize<'de>>(bytes: &[u8]) -> Result<T, SerializationError> {
    serde_json::from_slice(bytes)
        .map_err(|e| SerializationError::json_error("Failed to deserialize from JSON bytes", e))
}

/// JSON serializer: one UTF-8 encoded JSON object per message
pub struct JsonSerializer;

impl<T> Serializer<T> for JsonSerializer
where
    T: Serialize + for<'de> Deserialize<'de>,
{
    fn serialize(&self, value: &T) -> Result<Vec<u8>, SerializationError> {
        to_json(value)
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<T, SerializationError> {
        from_json(bytes)
    }
}
