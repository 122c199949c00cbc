//! Typed wrappers over the rdkafka client.
//!
//! The broker does the heavy lifting; this module only adds type-safe
//! serialization at the send/receive boundary, a clean [`Headers`] API, and
//! log-facade routing for librdkafka's internal diagnostics.

mod headers;
mod kafka_consumer;
mod kafka_error;
mod kafka_producer;
mod message;
mod producer_context;

pub use headers::Headers;
pub use kafka_consumer::KafkaConsumer;
pub use kafka_error::BusError;
pub use kafka_producer::KafkaProducer;
pub use message::Message;
pub use producer_context::{convert_kafka_log_level, LoggingClientContext};
