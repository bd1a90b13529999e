use futures::TryStreamExt;
use http::Method;
use tracing::debug;

use crate::body::Body;
use crate::error::GatewayError;
use crate::options::RequestOptions;
use crate::request::RequestDescriptor;
use crate::response::Response;

/// The collaborator that performs actual network I/O.
///
/// The gateway hands every call to the identically-named operation here
/// with an already-absolute URL and already-merged options, and returns
/// the result untouched. Implementations own the wire protocol, retries,
/// timeouts, and response shaping; the gateway owns none of those.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str, options: RequestOptions) -> Result<Response, GatewayError>;

    async fn post(
        &self,
        url: &str,
        body: Body,
        options: RequestOptions,
    ) -> Result<Response, GatewayError>;

    async fn put(
        &self,
        url: &str,
        body: Body,
        options: RequestOptions,
    ) -> Result<Response, GatewayError>;

    async fn patch(
        &self,
        url: &str,
        body: Body,
        options: RequestOptions,
    ) -> Result<Response, GatewayError>;

    async fn delete(&self, url: &str, options: RequestOptions) -> Result<Response, GatewayError>;

    async fn head(&self, url: &str, options: RequestOptions) -> Result<Response, GatewayError>;

    async fn options(&self, url: &str, opts: RequestOptions) -> Result<Response, GatewayError>;

    async fn jsonp(&self, url: &str, callback_param: &str) -> Result<Response, GatewayError>;

    /// Generic dispatch with an explicit method; a body, if any, travels
    /// inside the options.
    async fn request(
        &self,
        method: Method,
        url: &str,
        options: RequestOptions,
    ) -> Result<Response, GatewayError>;

    /// Execute a pre-built descriptor exactly as given.
    async fn send(&self, request: RequestDescriptor) -> Result<Response, GatewayError>;
}

/// Default [`Transport`] backed by `reqwest`.
pub struct HttpTransport {
    http_client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with a default `reqwest` client
    pub fn new() -> Result<Self, GatewayError> {
        let http_client = reqwest::Client::builder()
            .build()
            .map_err(|e| GatewayError::Build(e.to_string()))?;
        Ok(Self { http_client })
    }

    /// Create a transport around an existing `reqwest` client
    pub fn with_client(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }

    async fn dispatch(
        &self,
        method: Method,
        url: &str,
        body: Body,
        options: RequestOptions,
    ) -> Result<Response, GatewayError> {
        debug!(%method, url, "dispatching request");

        let mut req_builder = self.http_client.request(method, url);

        if let Some(headers) = &options.headers {
            for (name, value) in headers {
                req_builder = req_builder.header(name.as_str(), value.as_str());
            }
        }

        if let Some(params) = &options.params {
            req_builder = req_builder.query(params);
        }

        // An explicit body wins; otherwise fall back to a body carried
        // inside the options (generic request, DELETE-with-body).
        let body = if body.is_empty() {
            options.body.unwrap_or_default()
        } else {
            body
        };
        if let Body::Bytes(bytes) = body {
            req_builder = req_builder.body(bytes);
        }

        let resp = req_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout(e.to_string())
            } else if e.is_connect() {
                GatewayError::Connection(e.to_string())
            } else {
                GatewayError::Reqwest(e)
            }
        })?;

        let status = resp.status();
        let headers = resp.headers().clone();

        let stream = resp
            .bytes_stream()
            .map_err(|e| GatewayError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)));

        Ok(Response::new(status, headers, Box::pin(stream)))
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, options: RequestOptions) -> Result<Response, GatewayError> {
        self.dispatch(Method::GET, url, Body::Empty, options).await
    }

    async fn post(
        &self,
        url: &str,
        body: Body,
        options: RequestOptions,
    ) -> Result<Response, GatewayError> {
        self.dispatch(Method::POST, url, body, options).await
    }

    async fn put(
        &self,
        url: &str,
        body: Body,
        options: RequestOptions,
    ) -> Result<Response, GatewayError> {
        self.dispatch(Method::PUT, url, body, options).await
    }

    async fn patch(
        &self,
        url: &str,
        body: Body,
        options: RequestOptions,
    ) -> Result<Response, GatewayError> {
        self.dispatch(Method::PATCH, url, body, options).await
    }

    async fn delete(&self, url: &str, options: RequestOptions) -> Result<Response, GatewayError> {
        self.dispatch(Method::DELETE, url, Body::Empty, options).await
    }

    async fn head(&self, url: &str, options: RequestOptions) -> Result<Response, GatewayError> {
        self.dispatch(Method::HEAD, url, Body::Empty, options).await
    }

    async fn options(&self, url: &str, opts: RequestOptions) -> Result<Response, GatewayError> {
        self.dispatch(Method::OPTIONS, url, Body::Empty, opts).await
    }

    async fn jsonp(&self, url: &str, callback_param: &str) -> Result<Response, GatewayError> {
        // JSONP is a GET with the callback name advertised as a query
        // parameter; the server fills in the callback value.
        let opts = RequestOptions {
            params: Some(vec![(callback_param.to_string(), "JSONP_CALLBACK".to_string())]),
            ..Default::default()
        };
        self.dispatch(Method::GET, url, Body::Empty, opts).await
    }

    async fn request(
        &self,
        method: Method,
        url: &str,
        options: RequestOptions,
    ) -> Result<Response, GatewayError> {
        self.dispatch(method, url, Body::Empty, options).await
    }

    async fn send(&self, request: RequestDescriptor) -> Result<Response, GatewayError> {
        let method = request.method().clone();
        let url = request.url().to_string();
        let options = request.options().clone();
        let body = request.into_body();
        self.dispatch(method, &url, body, options).await
    }
}
