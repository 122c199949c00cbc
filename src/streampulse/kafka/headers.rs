use rdkafka::message::Headers as RdHeaders;

/// Message metadata as an ordered list of key/value pairs.
///
/// Backed by a small vector rather than a map: messages here carry at most a
/// handful of headers, insertion order survives onto the wire, and [`set`]
/// replaces an existing key in place. Value-less headers are representable.
///
/// [`set`]: Headers::set
///
/// # Examples
///
/// ```rust
/// # use streampulse::streampulse::kafka::Headers;
/// let headers = Headers::with("category", "temperature").set("encoding", "csv");
/// assert_eq!(headers.get("encoding"), Some("csv"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Headers {
    entries: Vec<(String, Option<String>)>,
}

impl Headers {
    /// An empty header list
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Shorthand for a list holding a single header
    pub fn with(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new().set(key, value)
    }

    /// Sets a header, replacing any previous value under the same key
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.put(key.into(), Some(value.into()));
        self
    }

    /// Sets a header that carries no value
    pub fn set_empty(mut self, key: impl Into<String>) -> Self {
        self.put(key.into(), None);
        self
    }

    fn put(&mut self, key: String, value: Option<String>) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// The value stored under a key, if the header exists and has one
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .and_then(|(_, value)| value.as_deref())
    }

    /// Whether a header exists under this key, valued or not
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(existing, _)| existing == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Headers in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    /// Producer-side conversion onto the wire
    pub(crate) fn to_rdkafka_headers(&self) -> rdkafka::message::OwnedHeaders {
        self.entries.iter().fold(
            rdkafka::message::OwnedHeaders::new_with_capacity(self.entries.len()),
            |headers, (key, value)| {
                headers.insert(rdkafka::message::Header {
                    key: key.as_str(),
                    value: value.as_deref(),
                })
            },
        )
    }

    /// Consumer-side conversion off the wire; non-UTF-8 values are replaced
    /// lossily rather than dropped
    pub(crate) fn from_rdkafka_headers<H: RdHeaders>(kafka_headers: &H) -> Self {
        let entries = (0..kafka_headers.count())
            .map(|i| {
                let header = kafka_headers.get(i);
                (
                    header.key.to_string(),
                    header
                        .value
                        .map(|bytes| String::from_utf8_lossy(bytes).into_owned()),
                )
            })
            .collect();
        Self { entries }
    }
}
