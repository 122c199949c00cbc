use std::marker::PhantomData;

use crate::streampulse::serialization::{SerializationError, Serializer};

/// Per-type CSV encoding: a fixed column order over a single delimited line.
///
/// Implementors define their column layout once; `CsvSerializer` turns any
/// `CsvSerde` type into a message codec. Field values must not contain the
/// delimiter; `CsvSerializer::serialize` rejects lines where an embedded
/// delimiter would corrupt the column count.
pub trait CsvSerde: Sized {
    /// Number of columns in the wire layout
    const COLUMNS: usize;

    /// Encode as a single delimiter-joined line (no trailing newline)
    fn to_csv_line(&self) -> String;

    /// Decode from a single line; fails on wrong column count or an
    /// unparseable field
    fn from_csv_line(line: &str) -> Result<Self, SerializationError>;
}

pub const CSV_DELIMITER: char = ',';

/// CSV serializer: one UTF-8 text line per message, columns per `CsvSerde`
pub struct CsvSerializer<T: CsvSerde>(PhantomData<T>);

impl<T: CsvSerde> Default for CsvSerializer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CsvSerde> CsvSerializer<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: CsvSerde> Serializer<T> for CsvSerializer<T> {
    fn serialize(&self, value: &T) -> Result<Vec<u8>, SerializationError> {
        let line = value.to_csv_line();
        let columns = line.split(CSV_DELIMITER).count();
        if columns != T::COLUMNS {
            return Err(SerializationError::SerializationFailed(format!(
                "record encodes to {} columns, expected {} (embedded delimiter in a field?)",
                columns,
                T::COLUMNS
            )));
        }
        Ok(line.into_bytes())
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<T, SerializationError> {
        let line = std::str::from_utf8(bytes)
            .map_err(|e| SerializationError::SchemaError(format!("Invalid UTF-8: {}", e)))?;
        T::from_csv_line(line.trim_end())
    }
}

/// Split a line into exactly `expected` columns, or report a decode error
pub fn split_columns(line: &str, expected: usize) -> Result<Vec<&str>, SerializationError> {
    let fields: Vec<&str> = line.split(CSV_DELIMITER).collect();
    if fields.len() != expected {
        return Err(SerializationError::DeserializationFailed(format!(
            "expected {} columns, got {}: '{}'",
            expected,
            fields.len(),
            line
        )));
    }
    Ok(fields)
}

/// Parse a single CSV field, naming the column in the error
pub fn parse_field<F: std::str::FromStr>(
    field: &str,
    column: &str,
) -> Result<F, SerializationError>
where
    F::Err: std::fmt::Display,
{
    field.parse().map_err(|e| {
        SerializationError::DeserializationFailed(format!(
            "invalid value '{}' for column '{}': {}",
            field, column, e
        ))
    })
}
