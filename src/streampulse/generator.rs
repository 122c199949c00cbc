//! Synthetic record generation for the demo producers.
//!
//! Generation is pure and infallible: each call yields one record drawn from
//! realistic ranges. Generators accept an explicit seed for reproducible
//! sequences in tests; the default constructors seed from entropy.

use chrono::Utc;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::streampulse::records::{RideEvent, RideStatus, WeatherReading};

/// A source of synthetic records, one per invocation
pub trait RecordSource {
    type Record;

    fn next_record(&mut self) -> Self::Record;
}

const SERVICES: &[&str] = &["Uber", "Lyft", "Waymo"];
const LOCATIONS: &[&str] = &["Downtown", "Airport", "Hotel", "University", "Stadium"];

/// Generates transportation service events
pub struct RideGenerator {
    rng: SmallRng,
    next_ride_id: u64,
}

impl RideGenerator {
    pub fn new() -> Self {
        Self::from_rng(SmallRng::from_entropy())
    }

    /// Deterministic sequence for a given seed
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    fn from_rng(rng: SmallRng) -> Self {
        Self {
            rng,
            next_ride_id: 1,
        }
    }
}

impl Default for RideGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordSource for RideGenerator {
    type Record = RideEvent;

    fn next_record(&mut self) -> RideEvent {
        let ride_id = self.next_ride_id;
        self.next_ride_id += 1;

        let service = SERVICES[self.rng.gen_range(0..SERVICES.len())];
        let pickup = LOCATIONS[self.rng.gen_range(0..LOCATIONS.len())];
        // Dropoff differs from pickup; shift within the fixed set
        let dropoff_offset = self.rng.gen_range(1..LOCATIONS.len());
        let dropoff = LOCATIONS[(LOCATIONS.iter().position(|l| *l == pickup).unwrap_or(0)
            + dropoff_offset)
            % LOCATIONS.len()];
        let status = if self.rng.gen_bool(0.5) {
            RideStatus::Completed
        } else {
            RideStatus::InProgress
        };

        RideEvent {
            ride_id: ride_id.to_string(),
            service: service.to_string(),
            status,
            duration_minutes: self.rng.gen_range(5..=60),
            pickup_location: pickup.to_string(),
            dropoff_location: dropoff.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Generates readings for one weather metric, with occasional injected
/// out-of-range anomalies so downstream detection has something to find.
pub struct WeatherGenerator {
    rng: SmallRng,
    metric: String,
    base_value: f64,
    spread: f64,
    anomaly_probability: f64,
    anomaly_offset: f64,
}

impl WeatherGenerator {
    pub fn new(metric: impl Into<String>, base_value: f64, spread: f64) -> Self {
        Self {
            rng: SmallRng::from_entropy(),
            metric: metric.into(),
            base_value,
            spread,
            anomaly_probability: 0.05,
            anomaly_offset: 25.0,
        }
    }

    /// Fahrenheit temperature feed around a mild day
    pub fn temperature() -> Self {
        Self::new("temperature", 68.0, 6.0)
    }

    /// Deterministic sequence for a given seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    /// How often an out-of-range value is injected (0.0 disables)
    pub fn with_anomaly_probability(mut self, probability: f64) -> Self {
        self.anomaly_probability = probability.clamp(0.0, 1.0);
        self
    }
}

impl RecordSource for WeatherGenerator {
    type Record = WeatherReading;

    fn next_record(&mut self) -> WeatherReading {
        let mut value = self.base_value + self.rng.gen_range(-self.spread..=self.spread);

        if self.anomaly_probability > 0.0 && self.rng.gen_bool(self.anomaly_probability) {
            let sign = if self.rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            value += sign * self.anomaly_offset;
        }

        WeatherReading {
            metric: self.metric.clone(),
            value: (value * 10.0).round() / 10.0,
            timestamp: Utc::now(),
        }
    }
}
