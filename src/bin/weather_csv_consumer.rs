//! Consumes CSV weather readings and reports rolling statistics with
//! trend/anomaly detection.

use log::info;

use streampulse::streampulse::config::{analytics_from_env, SubscriberSettings};
use streampulse::streampulse::records::WeatherReading;
use streampulse::streampulse::shutdown::stop_channel;
use streampulse::streampulse::subscriber::Subscriber;
use streampulse::{AnalyticsEngine, CsvSerializer, KafkaConsumer, PulseError};

#[tokio::main]
async fn main() -> Result<(), PulseError> {
    pretty_env_logger::init();

    let settings = SubscriberSettings::weather_from_env()?;
    let analytics = analytics_from_env()?;
    info!(
        "START weather CSV consumer: topic '{}', group '{}', window {}, delta {}",
        settings.topic, settings.group_id, analytics.window_capacity, analytics.anomaly_delta
    );

    let consumer = KafkaConsumer::new(
        &settings.brokers,
        &settings.group_id,
        CsvSerializer::<WeatherReading>::new(),
    )
    .map_err(|e| PulseError::kafka(e, "creating weather consumer"))?;
    consumer
        .subscribe(&[&settings.topic])
        .map_err(|e| PulseError::kafka(e, "subscribing to weather topic"))?;

    let (stop, token) = stop_channel();
    tokio::spawn(stop.stop_on_signal());

    let subscriber = Subscriber::new(consumer, AnalyticsEngine::new(analytics));
    let engine = subscriber.run(token).await;

    for category in engine.categories() {
        if let Some(stats) = engine.stats(category) {
            info!("final: {}", stats);
        }
    }
    info!("END weather CSV consumer");
    Ok(())
}
