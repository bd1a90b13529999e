//! Configuration-aware request gateway over a generic HTTP transport.
//!
//! The gateway is a pure request-shaping boundary: it resolves relative
//! endpoint paths against a configured base URL, shallow-merges per-call
//! options over configured defaults, and delegates to a [`Transport`]
//! that does the actual network I/O. It performs no caching, no retries,
//! and no response transformation.
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```no_run
//! use http_gateway::{GatewayConfig, HttpGateway, RequestOptions, ResponseType};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GatewayConfig::new("https://api.example.com")
//!     .with_default_options(RequestOptions {
//!         with_credentials: Some(true),
//!         ..Default::default()
//!     });
//! let gateway = HttpGateway::new(config)?;
//!
//! let response = gateway
//!     .get(
//!         "/users/42",
//!         Some(RequestOptions {
//!             response_type: Some(ResponseType::Text),
//!             ..Default::default()
//!         }),
//!     )
//!     .await?;
//! let text = response.text().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Body-bearing verbs
//!
//! ```no_run
//! use http_gateway::{Body, GatewayConfig, HttpGateway};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let gateway = HttpGateway::new(GatewayConfig::new("https://api.example.com"))?;
//!
//! let response = gateway
//!     .post("orders", Body::from_json(&json!({"id": 1}))?, None)
//!     .await?;
//! let created: serde_json::Value = response.json().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Escape hatch: pre-built requests
//!
//! A [`RequestDescriptor`] carries an absolute URL and skips both URL
//! resolution and options merging:
//!
//! ```no_run
//! use http_gateway::{GatewayConfig, HttpGateway, Method, RequestDescriptor};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let gateway = HttpGateway::new(GatewayConfig::new("https://api.example.com"))?;
//!
//! let request = RequestDescriptor::builder()
//!     .method(Method::GET)
//!     .url("https://other-host.example.com/status")
//!     .header("X-Trace", "abc")
//!     .build()?;
//!
//! let response = gateway.send(request).await?;
//! # Ok(())
//! # }
//! ```

mod body;
mod config;
mod error;
mod gateway;
mod options;
mod request;
mod response;
mod transport;

// Re-export public API
pub use body::{Body, BoxStream};
pub use config::{GatewayConfig, BASE_URL_ENV};
pub use error::GatewayError;
pub use gateway::HttpGateway;
pub use options::{Observe, RequestOptions, ResponseType, TransferCache};
pub use request::{RequestDescriptor, RequestDescriptorBuilder};
pub use response::Response;
pub use transport::{HttpTransport, Transport};

// Re-export commonly used types from dependencies
pub use http::{Method, StatusCode};
