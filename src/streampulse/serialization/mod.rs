//! Wire formats for pipeline messages.
//!
//! Two encodings are supported, selected per pipeline: JSON (one serde_json
//! object per message) and CSV (one delimited text line per message with a
//! fixed column order). Both go through the common [`Serializer`] trait so
//! producers and consumers stay generic over the format.

mod csv;
mod error;
mod json;
mod traits;

pub use csv::{parse_field, split_columns, CsvSerde, CsvSerializer, CSV_DELIMITER};
pub use error::SerializationError;
pub use json::{from_json, to_json, JsonSerializer};
pub use traits::Serializer;
