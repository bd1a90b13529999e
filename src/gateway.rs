use http::Method;

use crate::body::Body;
use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::options::RequestOptions;
use crate::request::RequestDescriptor;
use crate::response::Response;
use crate::transport::{HttpTransport, Transport};

/// Configuration-aware façade over an HTTP [`Transport`].
///
/// Every verb method performs the same two pure steps before delegating:
/// resolve the relative path against the configured base URL, and
/// shallow-merge the per-call options over the configured defaults. The
/// transport's result is returned unchanged.
///
/// The gateway holds no mutable state; concurrent calls on one instance
/// only read the immutable configuration. All dispatch methods are lazy
/// futures: nothing touches the network until the caller awaits, and
/// dropping the future cancels the underlying transfer.
///
/// A gateway can be built without configuration ([`HttpGateway::unconfigured`]);
/// in that state every dispatch fails fast with
/// [`GatewayError::ConfigurationMissing`] before any transport call. The
/// exception is [`HttpGateway::send`], which takes a pre-built absolute
/// request and never consults the configuration.
pub struct HttpGateway<T: Transport = HttpTransport> {
    transport: T,
    config: Option<GatewayConfig>,
}

impl HttpGateway<HttpTransport> {
    /// Create a gateway over the default reqwest transport.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        Ok(Self {
            transport: HttpTransport::new()?,
            config: Some(config),
        })
    }
}

impl<T: Transport> HttpGateway<T> {
    /// Create a gateway over a custom transport.
    pub fn with_transport(transport: T, config: GatewayConfig) -> Self {
        Self {
            transport,
            config: Some(config),
        }
    }

    /// Create a gateway with no configuration.
    ///
    /// Useful when the configuration arrives later in the program's life;
    /// until then every path-based dispatch fails with
    /// [`GatewayError::ConfigurationMissing`].
    pub fn unconfigured(transport: T) -> Self {
        Self {
            transport,
            config: None,
        }
    }

    /// The configuration, if one was supplied.
    pub fn config(&self) -> Option<&GatewayConfig> {
        self.config.as_ref()
    }

    /// Access the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn require_config(&self) -> Result<&GatewayConfig, GatewayError> {
        self.config.as_ref().ok_or(GatewayError::ConfigurationMissing)
    }

    /// Resolve the URL and merge options; fails before any network action
    /// if no configuration was supplied.
    fn prepare(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<(String, RequestOptions), GatewayError> {
        let config = self.require_config()?;
        let url = config.resolve(path);
        let merged = options
            .unwrap_or_default()
            .merged_over(config.default_options());
        Ok((url, merged))
    }

    /// Send a `GET` request to the given relative path.
    pub async fn get(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<Response, GatewayError> {
        let (url, options) = self.prepare(path, options)?;
        self.transport.get(&url, options).await
    }

    /// Send a `POST` request with the given body.
    pub async fn post(
        &self,
        path: &str,
        body: impl Into<Body>,
        options: Option<RequestOptions>,
    ) -> Result<Response, GatewayError> {
        let (url, options) = self.prepare(path, options)?;
        self.transport.post(&url, body.into(), options).await
    }

    /// Send a `PUT` request with the given body.
    pub async fn put(
        &self,
        path: &str,
        body: impl Into<Body>,
        options: Option<RequestOptions>,
    ) -> Result<Response, GatewayError> {
        let (url, options) = self.prepare(path, options)?;
        self.transport.put(&url, body.into(), options).await
    }

    /// Send a `PATCH` request with the given body.
    pub async fn patch(
        &self,
        path: &str,
        body: impl Into<Body>,
        options: Option<RequestOptions>,
    ) -> Result<Response, GatewayError> {
        let (url, options) = self.prepare(path, options)?;
        self.transport.patch(&url, body.into(), options).await
    }

    /// Send a `DELETE` request. A body, if needed, travels inside the
    /// options.
    pub async fn delete(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<Response, GatewayError> {
        let (url, options) = self.prepare(path, options)?;
        self.transport.delete(&url, options).await
    }

    /// Send a `HEAD` request.
    pub async fn head(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<Response, GatewayError> {
        let (url, options) = self.prepare(path, options)?;
        self.transport.head(&url, options).await
    }

    /// Send an `OPTIONS` request.
    pub async fn options(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<Response, GatewayError> {
        let (url, options) = self.prepare(path, options)?;
        self.transport.options(&url, options).await
    }

    /// Send a JSONP request for the given path and callback parameter
    /// name. JSONP carries no options; only the URL is resolved.
    pub async fn jsonp(
        &self,
        path: &str,
        callback_param: &str,
    ) -> Result<Response, GatewayError> {
        let config = self.require_config()?;
        let url = config.resolve(path);
        self.transport.jsonp(&url, callback_param).await
    }

    /// Generic entry point: dispatch an arbitrary method to a relative
    /// path. A body, if any, travels inside the options.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<Response, GatewayError> {
        let (url, options) = self.prepare(path, options)?;
        self.transport.request(method, &url, options).await
    }

    /// Escape hatch: forward a pre-built absolute request to the
    /// transport verbatim, bypassing URL resolution and options merging.
    pub async fn send(&self, request: RequestDescriptor) -> Result<Response, GatewayError> {
        self.transport.send(request).await
    }
}
