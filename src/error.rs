use std::io;
use thiserror::Error;

/// Error type for gateway operations.
///
/// `ConfigurationMissing` is the only error this layer raises on its own:
/// it fires synchronously, before any network action, when a gateway is
/// used without a base URL. Everything else surfaces from the transport
/// and is passed through without reinterpretation.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("gateway used before a base URL was configured")]
    ConfigurationMissing,

    #[error("Request build error: {0}")]
    Build(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

impl GatewayError {
    /// Stable machine-readable code for this error.
    ///
    /// Tooling keys off these codes to tell configuration failures apart
    /// from transport-level failures.
    pub fn code(&self) -> &'static str {
        match self {
            GatewayError::ConfigurationMissing => "gateway.not_configured",
            GatewayError::Build(_) => "gateway.build",
            GatewayError::Connection(_) => "transport.connection",
            GatewayError::Timeout(_) => "transport.timeout",
            GatewayError::InvalidResponse(_) => "transport.invalid_response",
            GatewayError::Serialization(_) => "transport.serialization",
            GatewayError::Io(_) => "transport.io",
            GatewayError::Reqwest(_) => "transport.reqwest",
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_missing_code() {
        assert_eq!(
            GatewayError::ConfigurationMissing.code(),
            "gateway.not_configured"
        );
    }

    #[test]
    fn test_transport_codes_are_distinct_from_configuration() {
        let err = GatewayError::Connection("refused".into());
        assert_ne!(err.code(), GatewayError::ConfigurationMissing.code());
        assert!(err.code().starts_with("transport."));
    }
}
