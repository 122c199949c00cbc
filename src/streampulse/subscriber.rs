//! The receive loop: decode each message and feed it to the analytics engine.
//!
//! Error containment per message: an undecodable payload is dropped with a
//! warning, a transport error is logged and retried on the next poll. Neither
//! interrupts the loop; only the external stop signal does.

use log::{debug, error, info, warn};
use std::time::Duration;

use crate::streampulse::analytics::AnalyticsEngine;
use crate::streampulse::kafka::{BusError, KafkaConsumer};
use crate::streampulse::records::Record;
use crate::streampulse::serialization::Serializer;
use crate::streampulse::shutdown::StopToken;

const POLL_TIMEOUT: Duration = Duration::from_secs(1);

/// Ties a typed consumer to an [`AnalyticsEngine`] and runs the receive loop.
///
/// The engine executes synchronously inside the loop: each ingest completes
/// before the next message is decoded, so the engine needs no locking as long
/// as one subscriber owns it.
pub struct Subscriber<T, S>
where
    T: Into<Record>,
    S: Serializer<T>,
{
    consumer: KafkaConsumer<T, S>,
    engine: AnalyticsEngine,
}

impl<T, S> Subscriber<T, S>
where
    T: Into<Record>,
    S: Serializer<T>,
{
    pub fn new(consumer: KafkaConsumer<T, S>, engine: AnalyticsEngine) -> Self {
        Self { consumer, engine }
    }

    pub fn engine(&self) -> &AnalyticsEngine {
        &self.engine
    }

    /// Consume and ingest until a stop is requested.
    ///
    /// Returns the engine so callers (and tests) can inspect the final
    /// statistics after the loop ends. Offsets are committed best-effort on
    /// the way out.
    pub async fn run(mut self, mut stop: StopToken) -> AnalyticsEngine {
        info!("Polling for messages...");

        loop {
            tokio::select! {
                biased;

                reason = stop.stopped() => {
                    info!("Subscriber stopping ({})", reason);
                    break;
                }
                result = self.consumer.poll_message(POLL_TIMEOUT) => {
                    match result {
                        Ok(message) => {
                            let record: Record = message.into_value().into();
                            let stats = self.engine.ingest(&record);
                            if let Some(anomaly) = &stats.anomaly {
                                warn!(
                                    "Anomaly in '{}': sample {:.2} deviates {:.2} from mean {:.2}",
                                    stats.category,
                                    anomaly.sample,
                                    anomaly.deviation,
                                    anomaly.baseline_mean
                                );
                            }
                            info!("{}", stats);
                        }
                        // Quiet between messages; keep waiting
                        Err(e) if e.is_idle() => {
                            debug!("No message within {:?}", POLL_TIMEOUT);
                        }
                        // Malformed or empty payload: drop the single message
                        Err(e @ BusError::Codec(_)) | Err(e @ BusError::EmptyPayload) => {
                            warn!("Dropping message: {}", e);
                        }
                        // Transport trouble: retried on the next poll
                        Err(e) => {
                            error!("{}, retrying", e);
                        }
                    }
                }
            }
        }

        if let Err(e) = self.consumer.commit() {
            debug!("Commit on shutdown failed (no assignment yet?): {}", e);
        }
        self.engine
    }
}
