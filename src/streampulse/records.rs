//! Record types flowing through the pipelines.
//!
//! Two variants exist: transportation ride events (the JSON pipeline) and
//! weather readings (the CSV pipeline). Both are immutable once created and
//! carry everything the analytics engine needs: a category key and a numeric
//! sample. The [`Record`] sum type keeps variant handling exhaustive at the
//! serialization boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::streampulse::serialization::{parse_field, split_columns, CsvSerde, SerializationError};

/// Ride lifecycle state as published by the transportation feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RideStatus {
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl std::fmt::Display for RideStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RideStatus::InProgress => write!(f, "In Progress"),
            RideStatus::Completed => write!(f, "Completed"),
        }
    }
}

impl std::str::FromStr for RideStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "In Progress" => Ok(RideStatus::InProgress),
            "Completed" => Ok(RideStatus::Completed),
            other => Err(format!("unknown ride status '{}'", other)),
        }
    }
}

/// One transportation service event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideEvent {
    pub ride_id: String,
    pub service: String,
    pub status: RideStatus,
    pub duration_minutes: u32,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub timestamp: DateTime<Utc>,
}

/// One weather metric reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub metric: String,
    pub value: f64,
    pub timestamp: DateTime<Utc>,
}

impl WeatherReading {
    /// A reading stamped with the current time
    pub fn now(metric: impl Into<String>, value: f64) -> Self {
        Self {
            metric: metric.into(),
            value,
            timestamp: Utc::now(),
        }
    }
}

/// A record of either variant, as handed to the analytics engine
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Ride(RideEvent),
    Weather(WeatherReading),
}

impl Record {
    /// The analytics category this record belongs to
    pub fn category(&self) -> &str {
        match self {
            Record::Ride(ride) => &ride.service,
            Record::Weather(reading) => &reading.metric,
        }
    }

    /// The numeric sample this record contributes to its rolling window
    pub fn sample(&self) -> f64 {
        match self {
            Record::Ride(ride) => f64::from(ride.duration_minutes),
            Record::Weather(reading) => reading.value,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Record::Ride(ride) => ride.timestamp,
            Record::Weather(reading) => reading.timestamp,
        }
    }
}

impl From<RideEvent> for Record {
    fn from(event: RideEvent) -> Self {
        Record::Ride(event)
    }
}

impl From<WeatherReading> for Record {
    fn from(reading: WeatherReading) -> Self {
        Record::Weather(reading)
    }
}

/// Pipeline-facing view shared by both record variants: every record knows
/// its category key (also used as the message key) and its event time.
pub trait StreamRecord: Into<Record> + Clone {
    fn category(&self) -> &str;
    fn timestamp(&self) -> DateTime<Utc>;
}

impl StreamRecord for RideEvent {
    fn category(&self) -> &str {
        &self.service
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl StreamRecord for WeatherReading {
    fn category(&self) -> &str {
        &self.metric
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

// CSV column layouts. Timestamps are RFC 3339, which never contains the
// delimiter; free-text fields are drawn from fixed sets without commas, and
// the serializer rejects any line whose column count comes out wrong.

impl CsvSerde for WeatherReading {
    const COLUMNS: usize = 3;

    fn to_csv_line(&self) -> String {
        format!("{},{},{}", self.timestamp.to_rfc3339(), self.metric, self.value)
    }

    fn from_csv_line(line: &str) -> Result<Self, SerializationError> {
        let fields = split_columns(line, Self::COLUMNS)?;
        let timestamp = parse_timestamp(fields[0])?;
        Ok(WeatherReading {
            metric: fields[1].to_string(),
            value: parse_field(fields[2], "value")?,
            timestamp,
        })
    }
}

impl CsvSerde for RideEvent {
    const COLUMNS: usize = 7;

    fn to_csv_line(&self) -> String {
        format!(
            "{},{},{},{},{},{},{}",
            self.ride_id,
            self.service,
            self.status,
            self.duration_minutes,
            self.pickup_location,
            self.dropoff_location,
            self.timestamp.to_rfc3339(),
        )
    }

    fn from_csv_line(line: &str) -> Result<Self, SerializationError> {
        let fields = split_columns(line, Self::COLUMNS)?;
        Ok(RideEvent {
            ride_id: fields[0].to_string(),
            service: fields[1].to_string(),
            status: parse_field(fields[2], "status")?,
            duration_minutes: parse_field(fields[3], "duration_minutes")?,
            pickup_location: fields[4].to_string(),
            dropoff_location: fields[5].to_string(),
            timestamp: parse_timestamp(fields[6])?,
        })
    }
}

fn parse_timestamp(field: &str) -> Result<DateTime<Utc>, SerializationError> {
    DateTime::parse_from_rfc3339(field)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| {
            SerializationError::DeserializationFailed(format!(
                "invalid timestamp '{}': {}",
                field, e
            ))
        })
}
