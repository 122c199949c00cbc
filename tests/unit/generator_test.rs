use streampulse::streampulse::generator::{RecordSource, RideGenerator, WeatherGenerator};

const SERVICES: &[&str] = &["Uber", "Lyft", "Waymo"];

#[test]
fn test_rides_draw_from_fixed_service_set() {
    let mut generator = RideGenerator::with_seed(99);
    for _ in 0..50 {
        let ride = generator.next_record();
        assert!(SERVICES.contains(&ride.service.as_str()));
        assert!((5..=60).contains(&ride.duration_minutes));
        assert_ne!(ride.pickup_location, ride.dropoff_location);
    }
}

#[test]
fn test_seeded_generators_are_reproducible() {
    let mut a = WeatherGenerator::temperature().with_seed(5);
    let mut b = WeatherGenerator::temperature().with_seed(5);

    for _ in 0..25 {
        assert_eq!(a.next_record().value, b.next_record().value);
    }
}

#[test]
fn test_forced_anomaly_leaves_normal_range() {
    let mut generator = WeatherGenerator::temperature()
        .with_seed(11)
        .with_anomaly_probability(1.0);

    // Base 68 ± 6 spread, shifted ±25: every value escapes the normal band
    for _ in 0..20 {
        let reading = generator.next_record();
        assert!(
            reading.value < 62.0 || reading.value > 74.0,
            "value {} should be outside the normal range",
            reading.value
        );
    }
}

#[test]
fn test_disabled_anomalies_stay_in_band() {
    let mut generator = WeatherGenerator::new("humidity", 55.0, 10.0)
        .with_seed(3)
        .with_anomaly_probability(0.0);

    for _ in 0..100 {
        let reading = generator.next_record();
        assert_eq!(reading.metric, "humidity");
        assert!(reading.value >= 45.0 && reading.value <= 65.0);
    }
}
