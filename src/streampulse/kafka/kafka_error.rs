use rdkafka::error::KafkaError;
use thiserror::Error;

use crate::streampulse::serialization::SerializationError;

/// Everything that can go wrong at the bus boundary.
///
/// The loops contain each of these within a single iteration: transport
/// failures are retried on the next tick or poll, codec failures drop the one
/// offending message, and an expired poll window is not a failure at all.
#[derive(Debug, Error)]
pub enum BusError {
    /// The broker or client library rejected the operation
    #[error("broker transport failure: {0}")]
    Transport(#[from] KafkaError),

    /// The payload could not be converted at the wire boundary
    #[error("payload codec failure: {0}")]
    Codec(#[from] SerializationError),

    /// The poll window elapsed with nothing to read
    #[error("no message within the poll window")]
    PollExpired,

    /// A message arrived without any payload bytes
    #[error("message carried no payload")]
    EmptyPayload,
}

impl BusError {
    /// True for conditions that just mean "nothing to do right now",
    /// as opposed to something actually going wrong
    pub fn is_idle(&self) -> bool {
        matches!(self, BusError::PollExpired)
    }
}
