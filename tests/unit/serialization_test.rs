use chrono::{TimeZone, Utc};
use streampulse::streampulse::records::{RideEvent, RideStatus, WeatherReading};
use streampulse::{CsvSerde, CsvSerializer, JsonSerializer, SerializationError, Serializer};

fn sample_ride() -> RideEvent {
    RideEvent {
        ride_id: "42".to_string(),
        service: "Lyft".to_string(),
        status: RideStatus::InProgress,
        duration_minutes: 25,
        pickup_location: "University".to_string(),
        dropoff_location: "Airport".to_string(),
        timestamp: Utc.with_ymd_and_hms(2026, 8, 4, 9, 30, 0).unwrap(),
    }
}

fn sample_reading() -> WeatherReading {
    WeatherReading {
        metric: "temperature".to_string(),
        value: 68.4,
        timestamp: Utc.with_ymd_and_hms(2026, 8, 4, 9, 30, 0).unwrap(),
    }
}

#[test]
fn test_json_round_trip_ride() {
    let serializer = JsonSerializer;
    let ride = sample_ride();

    let bytes = serializer.serialize(&ride).unwrap();
    let decoded: RideEvent = serializer.deserialize(&bytes).unwrap();
    assert_eq!(ride, decoded);
}

#[test]
fn test_json_round_trip_weather() {
    let serializer = JsonSerializer;
    let reading = sample_reading();

    let bytes = serializer.serialize(&reading).unwrap();
    let decoded: WeatherReading = serializer.deserialize(&bytes).unwrap();
    assert_eq!(reading, decoded);
}

#[test]
fn test_json_status_uses_human_readable_names() {
    let bytes = JsonSerializer.serialize(&sample_ride()).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.contains("\"In Progress\""));
}

#[test]
fn test_truncated_json_is_a_decode_error() {
    let serializer = JsonSerializer;
    let mut bytes = serializer.serialize(&sample_reading()).unwrap();
    bytes.truncate(bytes.len() / 2);

    let result: Result<WeatherReading, _> = serializer.deserialize(&bytes);
    assert!(matches!(
        result,
        Err(SerializationError::DeserializationFailed(_))
    ));
}

#[test]
fn test_json_with_missing_field_is_a_decode_error() {
    let serializer = JsonSerializer;
    let result: Result<WeatherReading, _> =
        serializer.deserialize(br#"{"metric": "temperature"}"#);
    assert!(result.is_err());
}

#[test]
fn test_csv_round_trip_weather() {
    let serializer = CsvSerializer::<WeatherReading>::new();
    let reading = sample_reading();

    let bytes = serializer.serialize(&reading).unwrap();
    let decoded = serializer.deserialize(&bytes).unwrap();
    assert_eq!(reading, decoded);
}

#[test]
fn test_csv_round_trip_ride() {
    let serializer = CsvSerializer::<RideEvent>::new();
    let ride = sample_ride();

    let bytes = serializer.serialize(&ride).unwrap();
    let decoded = serializer.deserialize(&bytes).unwrap();
    assert_eq!(ride, decoded);
}

#[test]
fn test_csv_weather_column_order() {
    let line = sample_reading().to_csv_line();
    let columns: Vec<&str> = line.split(',').collect();

    assert_eq!(columns.len(), 3);
    assert!(columns[0].starts_with("2026-08-04T09:30:00"));
    assert_eq!(columns[1], "temperature");
    assert_eq!(columns[2], "68.4");
}

#[test]
fn test_csv_wrong_column_count_is_a_decode_error() {
    let serializer = CsvSerializer::<WeatherReading>::new();
    let result = serializer.deserialize(b"2026-08-04T09:30:00+00:00,temperature");
    assert!(matches!(
        result,
        Err(SerializationError::DeserializationFailed(_))
    ));
}

#[test]
fn test_csv_non_numeric_value_is_a_decode_error() {
    let serializer = CsvSerializer::<WeatherReading>::new();
    let result = serializer.deserialize(b"2026-08-04T09:30:00+00:00,temperature,warm");
    assert!(matches!(
        result,
        Err(SerializationError::DeserializationFailed(_))
    ));
}

#[test]
fn test_csv_bad_timestamp_is_a_decode_error() {
    let serializer = CsvSerializer::<WeatherReading>::new();
    let result = serializer.deserialize(b"yesterday,temperature,68.4");
    assert!(result.is_err());
}

#[test]
fn test_csv_rejects_embedded_delimiter_on_encode() {
    let serializer = CsvSerializer::<WeatherReading>::new();
    let reading = WeatherReading {
        metric: "temperature,indoor".to_string(),
        ..sample_reading()
    };

    let result = serializer.serialize(&reading);
    assert!(matches!(
        result,
        Err(SerializationError::SerializationFailed(_))
    ));
}

#[test]
fn test_csv_tolerates_trailing_newline() {
    let serializer = CsvSerializer::<WeatherReading>::new();
    let mut bytes = serializer.serialize(&sample_reading()).unwrap();
    bytes.extend_from_slice(b"\n");

    let decoded = serializer.deserialize(&bytes).unwrap();
    assert_eq!(decoded, sample_reading());
}

#[test]
fn test_csv_invalid_utf8_is_a_schema_error() {
    let serializer = CsvSerializer::<WeatherReading>::new();
    let result = serializer.deserialize(&[0xff, 0xfe, 0x2c, 0x2c]);
    assert!(matches!(result, Err(SerializationError::SchemaError(_))));
}
