use futures::StreamExt;
use rdkafka::config::ClientConfig;
use rdkafka::consumer::{Consumer, ConsumerContext, DefaultConsumerContext, StreamConsumer};
use rdkafka::error::KafkaError;
use rdkafka::message::Message as KafkaMessage;
use std::marker::PhantomData;
use std::time::Duration;

use crate::streampulse::kafka::headers::Headers;
use crate::streampulse::kafka::kafka_error::BusError;
use crate::streampulse::kafka::message::Message;
use crate::streampulse::serialization::Serializer;

/// A typed consumer over rdkafka's `StreamConsumer`.
///
/// Each received payload is deserialized through the configured
/// [`Serializer`]; keys are decoded as UTF-8 strings and headers are exposed
/// through the crate's [`Headers`] type.
///
/// # Examples
///
/// ```rust,no_run
/// # use streampulse::streampulse::kafka::KafkaConsumer;
/// # use streampulse::streampulse::serialization::JsonSerializer;
/// # use streampulse::streampulse::records::RideEvent;
/// # use std::time::Duration;
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let consumer = KafkaConsumer::<RideEvent, _>::new(
///     "localhost:9092",
///     "ride-analytics",
///     JsonSerializer,
/// )?;
/// consumer.subscribe(&["transportation-events"])?;
///
/// let message = consumer.poll_message(Duration::from_secs(5)).await?;
/// println!("ride from {}", message.value().service);
/// # Ok(())
/// # }
/// ```
pub struct KafkaConsumer<T, S, C = DefaultConsumerContext>
where
    S: Serializer<T>,
    C: ConsumerContext + 'static,
{
    consumer: StreamConsumer<C>,
    serializer: S,
    _phantom: PhantomData<T>,
}

impl<T, S> KafkaConsumer<T, S, DefaultConsumerContext>
where
    S: Serializer<T>,
{
    /// Creates a new consumer with the default context
    ///
    /// # Arguments
    ///
    /// * `brokers` - Comma-separated broker list
    /// * `group_id` - Consumer group id
    /// * `serializer` - Wire format for message values
    pub fn new(brokers: &str, group_id: &str, serializer: S) -> Result<Self, KafkaError> {
        let consumer: StreamConsumer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("group.id", group_id)
            .set("auto.offset.reset", "earliest")
            .create()?;

        Ok(KafkaConsumer {
            consumer,
            serializer,
            _phantom: PhantomData,
        })
    }
}

impl<T, S, C> KafkaConsumer<T, S, C>
where
    S: Serializer<T>,
    C: ConsumerContext + 'static,
{
    /// Creates a new consumer with a custom context
    pub fn new_with_context(
        brokers: &str,
        group_id: &str,
        serializer: S,
        context: C,
    ) -> Result<Self, KafkaError> {
        let consumer: StreamConsumer<C> = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("group.id", group_id)
            .set("auto.offset.reset", "earliest")
            .create_with_context(context)?;

        Ok(KafkaConsumer {
            consumer,
            serializer,
            _phantom: PhantomData,
        })
    }

    /// Subscribe to topics
    pub fn subscribe(&self, topics: &[&str]) -> Result<(), KafkaError> {
        self.consumer.subscribe(topics)
    }

    /// Wait for the next message, up to `timeout`.
    ///
    /// Returns [`BusError::PollExpired`] when no message arrives in time and
    /// [`BusError::Codec`] when a payload fails to decode; both are
    /// per-iteration conditions the receive loop is expected to absorb.
    pub async fn poll_message(&self, timeout: Duration) -> Result<Message<T>, BusError> {
        let mut stream = self.consumer.stream();

        match tokio::time::timeout(timeout, stream.next()).await {
            Ok(Some(Ok(msg))) => {
                let payload = msg.payload().ok_or(BusError::EmptyPayload)?;
                let value = self.serializer.deserialize(payload)?;

                let key = msg
                    .key()
                    .map(|bytes| String::from_utf8_lossy(bytes).into_owned());
                let headers = match msg.headers() {
                    Some(kafka_headers) => Headers::from_rdkafka_headers(kafka_headers),
                    None => Headers::new(),
                };

                Ok(Message::new(key, value, headers))
            }
            Ok(Some(Err(e))) => Err(BusError::Transport(e)),
            Ok(None) => Err(BusError::PollExpired),
            Err(_) => Err(BusError::PollExpired),
        }
    }

    /// Commit the current consumer state
    pub fn commit(&self) -> Result<(), KafkaError> {
        use rdkafka::consumer::CommitMode;
        self.consumer.commit_consumer_state(CommitMode::Sync)
    }

    /// Access the serializer
    pub fn serializer(&self) -> &S {
        &self.serializer
    }
}
