//! Publishes synthetic weather readings as single-line CSV messages.

use log::info;

use streampulse::streampulse::config::PublisherSettings;
use streampulse::streampulse::generator::WeatherGenerator;
use streampulse::streampulse::publisher::Publisher;
use streampulse::streampulse::records::WeatherReading;
use streampulse::streampulse::shutdown::stop_channel;
use streampulse::{CsvSerializer, KafkaProducer, PulseError};

#[tokio::main]
async fn main() -> Result<(), PulseError> {
    pretty_env_logger::init();

    let settings = PublisherSettings::weather_from_env()?;
    info!(
        "START weather CSV producer: topic '{}' on {}",
        settings.topic, settings.brokers
    );

    let producer = KafkaProducer::new(
        &settings.brokers,
        &settings.topic,
        CsvSerializer::<WeatherReading>::new(),
    )
    .map_err(|e| PulseError::kafka(e, "creating weather producer"))?;

    let (stop, token) = stop_channel();
    tokio::spawn(stop.stop_on_signal());

    let publisher = Publisher::new(producer, WeatherGenerator::temperature(), settings.interval);
    let published = publisher.run(token).await;

    info!("END weather CSV producer: {} readings published", published);
    Ok(())
}
