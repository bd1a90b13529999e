use bytes::Bytes;
use futures::StreamExt;
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

use crate::body::BoxStream;
use crate::error::GatewayError;

/// HTTP response with flexible consumption patterns.
///
/// The body stays lazy until consumed: a streaming response performs no
/// further I/O unless `bytes`/`json`/`text`/`into_stream` is driven, and
/// dropping the response aborts the underlying transfer.
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: ResponseBody,
}

impl std::fmt::Debug for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .field("body", &self.body)
            .finish()
    }
}

enum ResponseBody {
    Buffered(Bytes),
    Streaming(BoxStream<Result<Bytes, GatewayError>>),
}

impl std::fmt::Debug for ResponseBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseBody::Buffered(bytes) => f
                .debug_tuple("ResponseBody::Buffered")
                .field(&bytes.len())
                .finish(),
            ResponseBody::Streaming(_) => write!(f, "ResponseBody::Streaming(..)"),
        }
    }
}

impl Response {
    /// Create a new response from a body stream
    pub fn new(
        status: StatusCode,
        headers: HeaderMap,
        stream: BoxStream<Result<Bytes, GatewayError>>,
    ) -> Self {
        Self {
            status,
            headers,
            body: ResponseBody::Streaming(stream),
        }
    }

    /// Create a response from buffered bytes
    pub fn from_bytes(status: StatusCode, headers: HeaderMap, bytes: Bytes) -> Self {
        Self {
            status,
            headers,
            body: ResponseBody::Buffered(bytes),
        }
    }

    /// Get the HTTP status code
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the response headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Consume the response and return the entire body as bytes
    pub async fn bytes(self) -> Result<Bytes, GatewayError> {
        match self.body {
            ResponseBody::Buffered(bytes) => Ok(bytes),
            ResponseBody::Streaming(mut stream) => {
                let mut buf = Vec::new();
                while let Some(chunk) = stream.next().await {
                    let chunk = chunk?;
                    buf.extend_from_slice(&chunk);
                }
                Ok(Bytes::from(buf))
            }
        }
    }

    /// Blocking version of bytes() for sync contexts
    pub fn bytes_blocking(self) -> Result<Bytes, GatewayError> {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle.block_on(self.bytes()),
            Err(_) => tokio::runtime::Runtime::new()?.block_on(self.bytes()),
        }
    }

    /// Consume the response and deserialize as JSON
    pub async fn json<T: DeserializeOwned>(self) -> Result<T, GatewayError> {
        let bytes = self.bytes().await?;
        let value = serde_json::from_slice(&bytes)?;
        Ok(value)
    }

    /// Blocking version of json() for sync contexts
    pub fn json_blocking<T: DeserializeOwned>(self) -> Result<T, GatewayError> {
        let bytes = self.bytes_blocking()?;
        let value = serde_json::from_slice(&bytes)?;
        Ok(value)
    }

    /// Consume the response and return the body as a string
    pub async fn text(self) -> Result<String, GatewayError> {
        let bytes = self.bytes().await?;
        String::from_utf8(bytes.to_vec())
            .map_err(|e| GatewayError::InvalidResponse(format!("Invalid UTF-8: {}", e)))
    }

    /// Blocking version of text() for sync contexts
    pub fn text_blocking(self) -> Result<String, GatewayError> {
        let bytes = self.bytes_blocking()?;
        String::from_utf8(bytes.to_vec())
            .map_err(|e| GatewayError::InvalidResponse(format!("Invalid UTF-8: {}", e)))
    }

    /// Convert the response into a byte stream for streaming consumption
    pub fn into_stream(self) -> BoxStream<Result<Bytes, GatewayError>> {
        match self.body {
            ResponseBody::Buffered(bytes) => {
                Box::pin(futures::stream::once(async move { Ok(bytes) }))
            }
            ResponseBody::Streaming(stream) => stream,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_buffered_bytes() {
        let resp = Response::from_bytes(
            StatusCode::OK,
            HeaderMap::new(),
            Bytes::from_static(b"hello"),
        );
        assert_eq!(resp.bytes().await.unwrap(), Bytes::from_static(b"hello"));
    }

    #[tokio::test]
    async fn test_streaming_collects_chunks() {
        let chunks = vec![Ok(Bytes::from_static(b"he")), Ok(Bytes::from_static(b"llo"))];
        let resp = Response::new(
            StatusCode::OK,
            HeaderMap::new(),
            Box::pin(futures::stream::iter(chunks)),
        );
        assert_eq!(resp.text().await.unwrap(), "hello");
    }

    #[tokio::test]
    async fn test_json_deserializes() {
        let resp = Response::from_bytes(
            StatusCode::OK,
            HeaderMap::new(),
            Bytes::from_static(br#"{"name":"test"}"#),
        );
        let value: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(value["name"], "test");
    }

    #[tokio::test]
    async fn test_invalid_utf8_text() {
        let resp = Response::from_bytes(
            StatusCode::OK,
            HeaderMap::new(),
            Bytes::from_static(&[0xff, 0xfe]),
        );
        let err = resp.text().await.unwrap_err();
        assert!(matches!(err, GatewayError::InvalidResponse(_)));
    }
}
