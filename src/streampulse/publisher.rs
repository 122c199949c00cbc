//! The publish loop: generate one record per tick and hand it to the bus.
//!
//! Publish failures are logged and the loop keeps ticking; the broker being
//! briefly unreachable must not take the producer down. Only the external
//! stop signal ends the loop.

use log::{debug, info, warn};
use std::time::Duration;

use crate::streampulse::generator::RecordSource;
use crate::streampulse::kafka::{Headers, KafkaProducer};
use crate::streampulse::records::StreamRecord;
use crate::streampulse::serialization::Serializer;
use crate::streampulse::shutdown::StopToken;

const FLUSH_TIMEOUT_MS: u64 = 5_000;

/// Ties a [`RecordSource`] to a typed producer and runs the tick loop.
pub struct Publisher<T, S, G>
where
    T: StreamRecord,
    S: Serializer<T>,
    G: RecordSource<Record = T>,
{
    producer: KafkaProducer<T, S>,
    source: G,
    interval: Duration,
}

impl<T, S, G> Publisher<T, S, G>
where
    T: StreamRecord,
    S: Serializer<T>,
    G: RecordSource<Record = T>,
{
    pub fn new(producer: KafkaProducer<T, S>, source: G, interval: Duration) -> Self {
        Self {
            producer,
            source,
            interval,
        }
    }

    /// Publish one record per tick until a stop is requested.
    ///
    /// Returns the number of records successfully delivered. The producer is
    /// flushed before the loop returns so in-flight messages are not lost on
    /// a graceful stop.
    pub async fn run(mut self, mut stop: StopToken) -> u64 {
        let mut ticker = tokio::time::interval(self.interval);
        let mut published: u64 = 0;

        info!(
            "Publishing to topic '{}' every {:?}",
            self.producer.default_topic(),
            self.interval
        );

        loop {
            tokio::select! {
                biased;

                reason = stop.stopped() => {
                    info!("Publisher stopping ({})", reason);
                    break;
                }
                _ = ticker.tick() => {
                    let record = self.source.next_record();
                    let key = record.category().to_string();
                    let headers = Headers::with("category", key.as_str());
                    let timestamp = record.timestamp().timestamp_millis();

                    match self
                        .producer
                        .send(Some(&key), &record, headers, Some(timestamp))
                        .await
                    {
                        Ok(_delivery) => {
                            published += 1;
                            debug!("Published record {} for category '{}'", published, key);
                        }
                        // Non-fatal: log and keep the loop ticking
                        Err(e) => warn!("Publish failed, will retry next tick: {}", e),
                    }
                }
            }
        }

        if let Err(e) = self.producer.flush(FLUSH_TIMEOUT_MS) {
            warn!("Flush on shutdown failed: {}", e);
        }
        info!("Publisher stopped after {} records", published);
        published
    }
}
