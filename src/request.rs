use http::Method;
use serde::Serialize;
use std::collections::HashMap;

use crate::body::Body;
use crate::error::GatewayError;
use crate::options::{Observe, RequestOptions, ResponseType};

/// A fully-built request with an absolute URL.
///
/// This is the escape hatch accepted by [`crate::HttpGateway::send`]:
/// descriptors bypass base-URL resolution and options merging entirely and
/// reach the transport exactly as built.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    method: Method,
    url: String,
    options: RequestOptions,
    body: Body,
}

impl RequestDescriptor {
    /// Create a new descriptor builder
    pub fn builder() -> RequestDescriptorBuilder {
        RequestDescriptorBuilder::default()
    }

    /// Get the HTTP method
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Get the absolute request URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the request options
    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    /// Get the request body
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Take the request body
    pub fn into_body(self) -> Body {
        self.body
    }
}

/// Builder for constructing request descriptors with a fluent API
#[derive(Debug, Default)]
pub struct RequestDescriptorBuilder {
    method: Option<Method>,
    url: Option<String>,
    options: RequestOptions,
    body: Body,
}

impl RequestDescriptorBuilder {
    /// Set the HTTP method
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Set the absolute request URL
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options
            .headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Add a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options
            .params
            .get_or_insert_with(Vec::new)
            .push((key.into(), value.into()));
        self
    }

    /// Set the observation mode
    pub fn observe(mut self, observe: Observe) -> Self {
        self.options.observe = Some(observe);
        self
    }

    /// Set the response type
    pub fn response_type(mut self, response_type: ResponseType) -> Self {
        self.options.response_type = Some(response_type);
        self
    }

    /// Replace the whole options record
    pub fn options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the body to a JSON-serialized value and add Content-Type header
    pub fn json<T: Serialize>(mut self, value: &T) -> Result<Self, GatewayError> {
        self.body = Body::from_json(value)?;
        self.options
            .headers
            .get_or_insert_with(HashMap::new)
            .insert("Content-Type".to_string(), "application/json".to_string());
        Ok(self)
    }

    /// Set the request body
    pub fn body<B: Into<Body>>(mut self, body: B) -> Self {
        self.body = body.into();
        self
    }

    /// Build the descriptor
    pub fn build(self) -> Result<RequestDescriptor, GatewayError> {
        let method = self.method.unwrap_or(Method::GET);
        let url = self
            .url
            .ok_or_else(|| GatewayError::Build("Request URL is required".into()))?;

        Ok(RequestDescriptor {
            method,
            url,
            options: self.options,
            body: self.body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_requires_url() {
        let err = RequestDescriptor::builder()
            .method(Method::GET)
            .build()
            .unwrap_err();
        assert!(matches!(err, GatewayError::Build(_)));
    }

    #[test]
    fn test_method_defaults_to_get() {
        let req = RequestDescriptor::builder()
            .url("https://api.example.com/ping")
            .build()
            .unwrap();
        assert_eq!(req.method(), &Method::GET);
    }

    #[test]
    fn test_json_sets_content_type() {
        let req = RequestDescriptor::builder()
            .method(Method::POST)
            .url("https://api.example.com/orders")
            .json(&json!({"id": 1}))
            .unwrap()
            .build()
            .unwrap();

        let headers = req.options().headers.as_ref().unwrap();
        assert_eq!(headers.get("Content-Type").unwrap(), "application/json");
        assert_eq!(req.body().as_bytes().unwrap().as_ref(), br#"{"id":1}"#);
    }
}
