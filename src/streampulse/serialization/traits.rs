use crate::streampulse::serialization::SerializationError;

/// Trait for serializers that convert between records and message bytes
pub trait Serializer<T> {
    /// Serialize a record to bytes
    fn serialize(&self, value: &T) -> Result<Vec<u8>, SerializationError>;

    /// Deserialize bytes to a record
    fn deserialize(&self, bytes: &[u8]) -> Result<T, SerializationError>;
}
