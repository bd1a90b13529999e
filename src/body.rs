use bytes::Bytes;
use futures::stream::Stream;
use serde::Serialize;
use std::pin::Pin;

use crate::error::GatewayError;

pub type BoxStream<T> = Pin<Box<dyn Stream<Item = T> + Send + 'static>>;

/// HTTP request body.
///
/// Request bodies are always buffered; streaming is a response-side
/// concern (see [`crate::Response::into_stream`]).
#[derive(Clone, PartialEq, Eq, Default)]
pub enum Body {
    /// Empty body
    #[default]
    Empty,
    /// Buffered bytes
    Bytes(Bytes),
}

impl std::fmt::Debug for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Body::Empty => write!(f, "Body::Empty"),
            Body::Bytes(bytes) => f.debug_tuple("Body::Bytes").field(&bytes.len()).finish(),
        }
    }
}

impl Body {
    /// Create an empty body
    pub fn empty() -> Self {
        Body::Empty
    }

    /// Create a body from bytes
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        Body::Bytes(bytes.into())
    }

    /// Create a body from a JSON-serializable value
    pub fn from_json<T: Serialize>(value: &T) -> Result<Self, GatewayError> {
        let json = serde_json::to_vec(value)?;
        Ok(Body::Bytes(Bytes::from(json)))
    }

    /// Check if body is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, Body::Empty)
    }

    /// View the buffered bytes, if any
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Body::Empty => None,
            Body::Bytes(bytes) => Some(bytes),
        }
    }
}

// Convenient From trait implementations
impl From<()> for Body {
    fn from(_: ()) -> Self {
        Body::Empty
    }
}

impl From<String> for Body {
    fn from(s: String) -> Self {
        Body::Bytes(Bytes::from(s))
    }
}

impl From<&str> for Body {
    fn from(s: &str) -> Self {
        Body::Bytes(Bytes::from(s.to_string()))
    }
}

impl From<Vec<u8>> for Body {
    fn from(v: Vec<u8>) -> Self {
        Body::Bytes(Bytes::from(v))
    }
}

impl From<Bytes> for Body {
    fn from(b: Bytes) -> Self {
        Body::Bytes(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_sets_bytes() {
        let body = Body::from_json(&json!({"id": 1})).unwrap();
        assert_eq!(body.as_bytes().unwrap().as_ref(), br#"{"id":1}"#);
    }

    #[test]
    fn test_default_is_empty() {
        assert!(Body::default().is_empty());
        assert!(Body::from("").as_bytes().is_some());
    }
}
