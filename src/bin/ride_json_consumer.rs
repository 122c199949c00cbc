//! Consumes JSON ride events and reports rolling per-service statistics.

use log::info;

use streampulse::streampulse::config::{analytics_from_env, SubscriberSettings};
use streampulse::streampulse::records::RideEvent;
use streampulse::streampulse::shutdown::stop_channel;
use streampulse::streampulse::subscriber::Subscriber;
use streampulse::{AnalyticsEngine, JsonSerializer, KafkaConsumer, PulseError};

#[tokio::main]
async fn main() -> Result<(), PulseError> {
    pretty_env_logger::init();

    let settings = SubscriberSettings::ride_from_env()?;
    let analytics = analytics_from_env()?;
    info!(
        "START ride JSON consumer: topic '{}', group '{}', window {}",
        settings.topic, settings.group_id, analytics.window_capacity
    );

    let consumer =
        KafkaConsumer::<RideEvent, _>::new(&settings.brokers, &settings.group_id, JsonSerializer)
            .map_err(|e| PulseError::kafka(e, "creating ride consumer"))?;
    consumer
        .subscribe(&[&settings.topic])
        .map_err(|e| PulseError::kafka(e, "subscribing to ride topic"))?;

    let (stop, token) = stop_channel();
    tokio::spawn(stop.stop_on_signal());

    let subscriber = Subscriber::new(consumer, AnalyticsEngine::new(analytics));
    let engine = subscriber.run(token).await;

    for category in engine.categories() {
        if let Some(stats) = engine.stats(category) {
            info!("final: {}", stats);
        }
    }
    info!("END ride JSON consumer");
    Ok(())
}
