//! # streampulse
//!
//! A pair of educational Kafka pipelines: a JSON stream of synthetic
//! transportation ("ride") events and a CSV stream of synthetic weather
//! readings, each with a producer that publishes on a timer and a consumer
//! that folds the stream into rolling-window statistics (per-category counts,
//! moving average, trend and anomaly flags).
//!
//! The broker does all the transport work; this crate adds typed
//! producer/consumer wrappers over `rdkafka`, two wire formats behind one
//! serializer trait, and the rolling-window analytics engine.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use streampulse::{
//!     AnalyticsConfig, AnalyticsEngine, Headers, JsonSerializer, KafkaProducer,
//! };
//! use streampulse::streampulse::records::WeatherReading;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let producer = KafkaProducer::<WeatherReading, _>::new(
//!         "localhost:9092",
//!         "weather-readings",
//!         JsonSerializer,
//!     )?;
//!
//!     let reading = WeatherReading::now("temperature", 21.5);
//!     producer
//!         .send(Some("temperature"), &reading, Headers::new(), None)
//!         .await?;
//!
//!     let mut engine = AnalyticsEngine::new(AnalyticsConfig::default());
//!     let stats = engine.ingest(&reading.into());
//!     println!("{}", stats);
//!
//!     Ok(())
//! }
//! ```

pub mod streampulse;

// Re-export the main API at the crate root for easy access
pub use streampulse::analytics::{
    AnalyticsConfig, AnalyticsEngine, Anomaly, CategoryStats, RollingWindow, Trend,
};
pub use streampulse::error::PulseError;
pub use streampulse::kafka::{BusError, Headers, KafkaConsumer, KafkaProducer, Message};
pub use streampulse::serialization::{
    CsvSerde, CsvSerializer, JsonSerializer, SerializationError, Serializer,
};
