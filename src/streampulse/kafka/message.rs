use crate::streampulse::kafka::headers::Headers;

/// A consumed message: deserialized value, optional UTF-8 key, and headers.
#[derive(Debug)]
pub struct Message<V> {
    pub key: Option<String>,
    pub value: V,
    pub headers: Headers,
}

impl<V> Message<V> {
    /// Creates a new message with the given key, value, and headers
    pub fn new(key: Option<String>, value: V, headers: Headers) -> Self {
        Self {
            key,
            value,
            headers,
        }
    }

    /// Returns the message key, if one was set
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Returns a reference to the message value
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns a reference to the message headers
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Consumes the message and returns the owned value
    pub fn into_value(self) -> V {
        self.value
    }

    /// Consumes the message and returns all components as a tuple
    pub fn into_parts(self) -> (Option<String>, V, Headers) {
        (self.key, self.value, self.headers)
    }
}
