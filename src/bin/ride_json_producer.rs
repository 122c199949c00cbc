//! Publishes synthetic transportation ride events as JSON messages.

use log::info;

use streampulse::streampulse::config::PublisherSettings;
use streampulse::streampulse::generator::RideGenerator;
use streampulse::streampulse::publisher::Publisher;
use streampulse::streampulse::shutdown::stop_channel;
use streampulse::{JsonSerializer, KafkaProducer, PulseError};

#[tokio::main]
async fn main() -> Result<(), PulseError> {
    pretty_env_logger::init();

    let settings = PublisherSettings::ride_from_env()?;
    info!(
        "START ride JSON producer: topic '{}' on {}",
        settings.topic, settings.brokers
    );

    let producer = KafkaProducer::new(&settings.brokers, &settings.topic, JsonSerializer)
        .map_err(|e| PulseError::kafka(e, "creating ride producer"))?;

    let (stop, token) = stop_channel();
    tokio::spawn(stop.stop_on_signal());

    let publisher = Publisher::new(producer, RideGenerator::new(), settings.interval);
    let published = publisher.run(token).await;

    info!("END ride JSON producer: {} events published", published);
    Ok(())
}
