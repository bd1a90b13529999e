//! Basic usage example for the request gateway
//!
//! This example demonstrates verb dispatch, default options, and the
//! pre-built-request escape hatch.
//!
//! To run this example:
//! ```bash
//! export HTTP_GATEWAY_BASE_URL="https://httpbin.org"
//! cargo run --example basic_usage
//! ```

use http::Method;
use http_gateway::{
    Body, GatewayConfig, HttpGateway, RequestDescriptor, RequestOptions, ResponseType,
};
use serde_json::json;
use std::collections::HashMap;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Option 1: Manual configuration
    let config = GatewayConfig::new(
        std::env::var("HTTP_GATEWAY_BASE_URL")
            .unwrap_or_else(|_| "https://httpbin.org".to_string()),
    )
    .with_default_options(RequestOptions {
        headers: Some(HashMap::from([(
            "Accept".to_string(),
            "application/json".to_string(),
        )])),
        ..Default::default()
    });

    // Option 2: Auto-detect from environment
    // let config = GatewayConfig::from_env()?;

    let gateway = HttpGateway::new(config)?;

    println!("=== Example 1: GET with per-call options ===\n");

    let response = gateway
        .get(
            "/get",
            Some(RequestOptions {
                response_type: Some(ResponseType::Json),
                params: Some(vec![("page".to_string(), "1".to_string())]),
                ..Default::default()
            }),
        )
        .await?;

    println!("Status: {}", response.status());
    let data: serde_json::Value = response.json().await?;
    println!("Response: {}\n", serde_json::to_string_pretty(&data)?);

    println!("=== Example 2: POST with a JSON body ===\n");

    let response = gateway
        .post("/post", Body::from_json(&json!({"id": 1}))?, None)
        .await?;

    println!("Status: {}", response.status());
    let data: serde_json::Value = response.json().await?;
    println!("Echoed: {}\n", data["json"]);

    println!("=== Example 3: Pre-built request (bypasses resolution) ===\n");

    let request = RequestDescriptor::builder()
        .method(Method::GET)
        .url("https://httpbin.org/headers")
        .header("X-Trace", "demo")
        .build()?;

    let response = gateway.send(request).await?;
    println!("Status: {}", response.status());
    println!("Body: {}", response.text().await?);

    Ok(())
}
