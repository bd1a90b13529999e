//! Custom transport example
//!
//! Shows how to plug a transport implementation into the gateway, here a
//! logging decorator around the default reqwest-backed transport.
//!
//! To run this example:
//! ```bash
//! cargo run --example custom_transport
//! ```

use http::Method;
use http_gateway::{
    Body, GatewayConfig, GatewayError, HttpGateway, HttpTransport, RequestDescriptor,
    RequestOptions, Response, Transport,
};

/// Transport decorator that prints every delegation before forwarding it
/// to the inner transport.
struct LoggingTransport {
    inner: HttpTransport,
}

#[async_trait::async_trait]
impl Transport for LoggingTransport {
    async fn get(&self, url: &str, options: RequestOptions) -> Result<Response, GatewayError> {
        println!("GET {url}");
        self.inner.get(url, options).await
    }

    async fn post(
        &self,
        url: &str,
        body: Body,
        options: RequestOptions,
    ) -> Result<Response, GatewayError> {
        println!("POST {url}");
        self.inner.post(url, body, options).await
    }

    async fn put(
        &self,
        url: &str,
        body: Body,
        options: RequestOptions,
    ) -> Result<Response, GatewayError> {
        println!("PUT {url}");
        self.inner.put(url, body, options).await
    }

    async fn patch(
        &self,
        url: &str,
        body: Body,
        options: RequestOptions,
    ) -> Result<Response, GatewayError> {
        println!("PATCH {url}");
        self.inner.patch(url, body, options).await
    }

    async fn delete(&self, url: &str, options: RequestOptions) -> Result<Response, GatewayError> {
        println!("DELETE {url}");
        self.inner.delete(url, options).await
    }

    async fn head(&self, url: &str, options: RequestOptions) -> Result<Response, GatewayError> {
        println!("HEAD {url}");
        self.inner.head(url, options).await
    }

    async fn options(&self, url: &str, opts: RequestOptions) -> Result<Response, GatewayError> {
        println!("OPTIONS {url}");
        self.inner.options(url, opts).await
    }

    async fn jsonp(&self, url: &str, callback_param: &str) -> Result<Response, GatewayError> {
        println!("JSONP {url} ({callback_param})");
        self.inner.jsonp(url, callback_param).await
    }

    async fn request(
        &self,
        method: Method,
        url: &str,
        options: RequestOptions,
    ) -> Result<Response, GatewayError> {
        println!("{method} {url}");
        self.inner.request(method, url, options).await
    }

    async fn send(&self, request: RequestDescriptor) -> Result<Response, GatewayError> {
        println!("{} {} (pre-built)", request.method(), request.url());
        self.inner.send(request).await
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let transport = LoggingTransport {
        inner: HttpTransport::new()?,
    };
    let gateway =
        HttpGateway::with_transport(transport, GatewayConfig::new("https://httpbin.org"));

    let response = gateway.get("/get", None).await?;
    println!("-> {}", response.status());

    let response = gateway.head("status/200", None).await?;
    println!("-> {}", response.status());

    Ok(())
}
