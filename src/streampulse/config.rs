//! Startup configuration from environment variables.
//!
//! Every knob has a default suitable for a local single-broker setup; a set
//! but malformed value is a fatal startup error, per the containment policy
//! (config errors are the only errors allowed to terminate the process).

use std::time::Duration;
use thiserror::Error;

use crate::streampulse::analytics::AnalyticsConfig;

pub const ENV_BROKERS: &str = "KAFKA_BOOTSTRAP_SERVERS";
pub const ENV_RIDE_TOPIC: &str = "RIDE_TOPIC";
pub const ENV_RIDE_INTERVAL: &str = "RIDE_INTERVAL_SECONDS";
pub const ENV_RIDE_GROUP: &str = "RIDE_CONSUMER_GROUP";
pub const ENV_WEATHER_TOPIC: &str = "WEATHER_TOPIC";
pub const ENV_WEATHER_INTERVAL: &str = "WEATHER_INTERVAL_SECONDS";
pub const ENV_WEATHER_GROUP: &str = "WEATHER_CONSUMER_GROUP";
pub const ENV_WINDOW_SIZE: &str = "ROLLING_WINDOW_SIZE";
pub const ENV_ANOMALY_DELTA: &str = "ANOMALY_DELTA";

const DEFAULT_BROKERS: &str = "localhost:9092";
const DEFAULT_RIDE_TOPIC: &str = "transportation-events";
const DEFAULT_WEATHER_TOPIC: &str = "weather-readings";
const DEFAULT_RIDE_GROUP: &str = "ride-analytics";
const DEFAULT_WEATHER_GROUP: &str = "weather-analytics";
const DEFAULT_INTERVAL_SECS: u64 = 2;
const DEFAULT_WINDOW_SIZE: usize = 5;
const DEFAULT_ANOMALY_DELTA: f64 = 20.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

fn env_or(key: &'static str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn interval_from_env(key: &'static str) -> Result<Duration, ConfigError> {
    let secs = parse_env(key, DEFAULT_INTERVAL_SECS)?;
    if secs == 0 {
        return Err(ConfigError::InvalidValue {
            key,
            value: "0".to_string(),
            reason: "publish interval must be at least one second".to_string(),
        });
    }
    Ok(Duration::from_secs(secs))
}

fn parse_env<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Err(_) => Ok(default),
        Ok(raw) => raw.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            value: raw,
            reason: e.to_string(),
        }),
    }
}

/// Settings for a publisher binary
#[derive(Debug, Clone)]
pub struct PublisherSettings {
    pub brokers: String,
    pub topic: String,
    pub interval: Duration,
}

impl PublisherSettings {
    pub fn ride_from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            brokers: env_or(ENV_BROKERS, DEFAULT_BROKERS),
            topic: env_or(ENV_RIDE_TOPIC, DEFAULT_RIDE_TOPIC),
            interval: interval_from_env(ENV_RIDE_INTERVAL)?,
        })
    }

    pub fn weather_from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            brokers: env_or(ENV_BROKERS, DEFAULT_BROKERS),
            topic: env_or(ENV_WEATHER_TOPIC, DEFAULT_WEATHER_TOPIC),
            interval: interval_from_env(ENV_WEATHER_INTERVAL)?,
        })
    }
}

/// Settings for a subscriber binary
#[derive(Debug, Clone)]
pub struct SubscriberSettings {
    pub brokers: String,
    pub topic: String,
    pub group_id: String,
}

impl SubscriberSettings {
    pub fn ride_from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            brokers: env_or(ENV_BROKERS, DEFAULT_BROKERS),
            topic: env_or(ENV_RIDE_TOPIC, DEFAULT_RIDE_TOPIC),
            group_id: env_or(ENV_RIDE_GROUP, DEFAULT_RIDE_GROUP),
        })
    }

    pub fn weather_from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            brokers: env_or(ENV_BROKERS, DEFAULT_BROKERS),
            topic: env_or(ENV_WEATHER_TOPIC, DEFAULT_WEATHER_TOPIC),
            group_id: env_or(ENV_WEATHER_GROUP, DEFAULT_WEATHER_GROUP),
        })
    }
}

/// Analytics knobs shared by both consumer binaries
pub fn analytics_from_env() -> Result<AnalyticsConfig, ConfigError> {
    Ok(AnalyticsConfig {
        window_capacity: parse_env(ENV_WINDOW_SIZE, DEFAULT_WINDOW_SIZE)?,
        anomaly_delta: parse_env(ENV_ANOMALY_DELTA, DEFAULT_ANOMALY_DELTA)?,
        ..AnalyticsConfig::default()
    })
}
