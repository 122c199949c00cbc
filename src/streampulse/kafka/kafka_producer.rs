use log::{debug, error, info};
use rdkafka::config::ClientConfig;
use rdkafka::error::KafkaError;
use rdkafka::producer::{FutureProducer, FutureRecord, ProducerContext};
use rdkafka::util::Timeout;
use std::marker::PhantomData;
use std::time::Duration;

use crate::streampulse::kafka::headers::Headers;
use crate::streampulse::kafka::kafka_error::BusError;
use crate::streampulse::kafka::producer_context::LoggingClientContext;
use crate::streampulse::serialization::Serializer;

/// How long a single send may wait for delivery confirmation
const SEND_WAIT_SECS: u64 = 30;

/// A typed producer over rdkafka's `FutureProducer`.
///
/// Values are serialized through the configured [`Serializer`] on every send,
/// so call sites only ever handle record structs, never byte arrays.
///
/// # Examples
///
/// ```rust,no_run
/// # use streampulse::streampulse::kafka::{KafkaProducer, Headers};
/// # use streampulse::streampulse::serialization::JsonSerializer;
/// # use streampulse::streampulse::records::WeatherReading;
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let producer = KafkaProducer::<WeatherReading, _>::new(
///     "localhost:9092",
///     "weather-readings",
///     JsonSerializer,
/// )?;
///
/// let reading = WeatherReading::now("temperature", 21.5);
/// producer
///     .send(Some("temperature"), &reading, Headers::new(), None)
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct KafkaProducer<T, S, C = LoggingClientContext>
where
    S: Serializer<T>,
    C: ProducerContext + 'static,
{
    producer: FutureProducer<C>,
    default_topic: String,
    serializer: S,
    _phantom: PhantomData<T>,
}

impl<T, S> KafkaProducer<T, S, LoggingClientContext>
where
    S: Serializer<T>,
{
    /// Creates a new producer with the default logging context
    ///
    /// # Arguments
    ///
    /// * `brokers` - Comma-separated broker list (e.g. "localhost:9092")
    /// * `default_topic` - Topic used by [`send`](Self::send)
    /// * `serializer` - Wire format for message values
    pub fn new(brokers: &str, default_topic: &str, serializer: S) -> Result<Self, KafkaError> {
        Self::new_with_context(brokers, default_topic, serializer, LoggingClientContext::new())
    }
}

impl<T, S, C> KafkaProducer<T, S, C>
where
    S: Serializer<T>,
    C: ProducerContext + 'static,
{
    /// Creates a new producer with a custom client context
    pub fn new_with_context(
        brokers: &str,
        default_topic: &str,
        serializer: S,
        context: C,
    ) -> Result<Self, KafkaError> {
        let producer: FutureProducer<C> = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("message.timeout.ms", "5000")
            .create_with_context(context)?;

        info!(
            "Created producer connected to {} with default topic {}",
            brokers, default_topic
        );

        Ok(KafkaProducer {
            producer,
            default_topic: default_topic.to_string(),
            serializer,
            _phantom: PhantomData,
        })
    }

    /// Sends a record to the default topic
    ///
    /// # Arguments
    ///
    /// * `key` - Optional message key (drives partition assignment)
    /// * `value` - The record to serialize and send
    /// * `headers` - Message headers
    /// * `timestamp` - Optional timestamp in milliseconds since the Unix epoch
    pub async fn send(
        &self,
        key: Option<&str>,
        value: &T,
        headers: Headers,
        timestamp: Option<i64>,
    ) -> Result<(i32, i64), BusError> {
        self.send_to_topic(&self.default_topic, key, value, headers, timestamp)
            .await
    }

    /// Sends a record to a specific topic
    pub async fn send_to_topic(
        &self,
        topic: &str,
        key: Option<&str>,
        value: &T,
        headers: Headers,
        timestamp: Option<i64>,
    ) -> Result<(i32, i64), BusError> {
        let payload = self.serializer.serialize(value)?;

        let mut record = FutureRecord::to(topic)
            .payload(&payload)
            .key(key.unwrap_or(""))
            .headers(headers.to_rdkafka_headers());
        if let Some(ts) = timestamp {
            record = record.timestamp(ts);
        }

        match self
            .producer
            .send(record, Timeout::After(Duration::from_secs(SEND_WAIT_SECS)))
            .await
        {
            Ok(delivery) => {
                debug!("Message sent to topic '{}'", topic);
                Ok(delivery)
            }
            Err((err, _owned_message)) => {
                error!("Failed to send message to topic '{}': {}", topic, err);
                Err(err.into())
            }
        }
    }

    /// Flushes any pending messages, waiting up to `timeout_ms`
    pub fn flush(&self, timeout_ms: u64) -> Result<(), KafkaError> {
        use rdkafka::producer::Producer;
        self.producer
            .flush(Timeout::After(Duration::from_millis(timeout_ms)))
    }

    /// The topic used by [`send`](Self::send)
    pub fn default_topic(&self) -> &str {
        &self.default_topic
    }

    /// Access the serializer
    pub fn serializer(&self) -> &S {
        &self.serializer
    }
}
