use serial_test::serial;
use std::time::Duration;

use streampulse::streampulse::config::{
    analytics_from_env, PublisherSettings, SubscriberSettings, ENV_ANOMALY_DELTA, ENV_BROKERS,
    ENV_RIDE_GROUP, ENV_RIDE_INTERVAL, ENV_RIDE_TOPIC, ENV_WEATHER_TOPIC, ENV_WINDOW_SIZE,
};

fn clear_env() {
    for key in [
        ENV_BROKERS,
        ENV_RIDE_TOPIC,
        ENV_RIDE_INTERVAL,
        ENV_RIDE_GROUP,
        ENV_WEATHER_TOPIC,
        ENV_WINDOW_SIZE,
        ENV_ANOMALY_DELTA,
    ] {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_apply_when_env_is_unset() {
    clear_env();

    let publisher = PublisherSettings::ride_from_env().unwrap();
    assert_eq!(publisher.brokers, "localhost:9092");
    assert_eq!(publisher.topic, "transportation-events");
    assert_eq!(publisher.interval, Duration::from_secs(2));

    let subscriber = SubscriberSettings::ride_from_env().unwrap();
    assert_eq!(subscriber.group_id, "ride-analytics");

    let analytics = analytics_from_env().unwrap();
    assert_eq!(analytics.window_capacity, 5);
    assert_eq!(analytics.anomaly_delta, 20.0);
}

#[test]
#[serial]
fn test_env_overrides_are_honored() {
    clear_env();
    std::env::set_var(ENV_BROKERS, "broker1:9092,broker2:9092");
    std::env::set_var(ENV_RIDE_TOPIC, "rides-test");
    std::env::set_var(ENV_RIDE_INTERVAL, "7");
    std::env::set_var(ENV_WINDOW_SIZE, "12");
    std::env::set_var(ENV_ANOMALY_DELTA, "3.5");

    let publisher = PublisherSettings::ride_from_env().unwrap();
    assert_eq!(publisher.brokers, "broker1:9092,broker2:9092");
    assert_eq!(publisher.topic, "rides-test");
    assert_eq!(publisher.interval, Duration::from_secs(7));

    let analytics = analytics_from_env().unwrap();
    assert_eq!(analytics.window_capacity, 12);
    assert_eq!(analytics.anomaly_delta, 3.5);

    clear_env();
}

#[test]
#[serial]
fn test_malformed_interval_is_fatal() {
    clear_env();
    std::env::set_var(ENV_RIDE_INTERVAL, "two seconds");

    let result = PublisherSettings::ride_from_env();
    assert!(result.is_err());
    let message = result.unwrap_err().to_string();
    assert!(message.contains(ENV_RIDE_INTERVAL));
    assert!(message.contains("two seconds"));

    clear_env();
}

#[test]
#[serial]
fn test_zero_interval_is_rejected() {
    clear_env();
    std::env::set_var(ENV_RIDE_INTERVAL, "0");

    assert!(PublisherSettings::ride_from_env().is_err());

    clear_env();
}

#[test]
#[serial]
fn test_malformed_window_size_is_fatal() {
    clear_env();
    std::env::set_var(ENV_WINDOW_SIZE, "-1");

    assert!(analytics_from_env().is_err());

    clear_env();
}

#[test]
#[serial]
fn test_weather_settings_read_their_own_topic() {
    clear_env();
    std::env::set_var(ENV_WEATHER_TOPIC, "weather-test");

    let publisher = PublisherSettings::weather_from_env().unwrap();
    assert_eq!(publisher.topic, "weather-test");

    // The ride pipeline is unaffected
    let ride = PublisherSettings::ride_from_env().unwrap();
    assert_eq!(ride.topic, "transportation-events");

    clear_env();
}
