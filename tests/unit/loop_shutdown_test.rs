//! Deterministic shutdown of the publish and receive loops.
//!
//! Both loops prefer the stop branch of their select, so a stop requested
//! before the loop starts ends it before any bus traffic is attempted; no
//! broker is needed here.

use std::time::Duration;

use streampulse::streampulse::generator::WeatherGenerator;
use streampulse::streampulse::publisher::Publisher;
use streampulse::streampulse::records::WeatherReading;
use streampulse::streampulse::shutdown::stop_channel;
use streampulse::streampulse::subscriber::Subscriber;
use streampulse::{AnalyticsConfig, AnalyticsEngine, CsvSerializer, KafkaConsumer, KafkaProducer};

#[tokio::test]
async fn test_publisher_stops_on_request() {
    let producer = KafkaProducer::new(
        "localhost:9092",
        "weather-readings",
        CsvSerializer::<WeatherReading>::new(),
    )
    .expect("producer creation is local");

    let publisher = Publisher::new(
        producer,
        WeatherGenerator::temperature().with_seed(1),
        Duration::from_secs(60),
    );

    let (stop, token) = stop_channel();
    stop.stop("test stop");

    let published = tokio::time::timeout(Duration::from_secs(10), publisher.run(token))
        .await
        .expect("publisher should stop promptly");
    assert_eq!(published, 0);
}

#[tokio::test]
async fn test_subscriber_stops_and_returns_engine() {
    let consumer = KafkaConsumer::new(
        "localhost:9092",
        "weather-analytics-test",
        CsvSerializer::<WeatherReading>::new(),
    )
    .expect("consumer creation is local");
    consumer
        .subscribe(&["weather-readings"])
        .expect("subscribe is local");

    let subscriber = Subscriber::new(consumer, AnalyticsEngine::new(AnalyticsConfig::default()));

    let (stop, token) = stop_channel();
    stop.stop("test stop");

    let engine = tokio::time::timeout(Duration::from_secs(10), subscriber.run(token))
        .await
        .expect("subscriber should stop promptly");
    assert_eq!(engine.categories().count(), 0);
}
