use crate::error::GatewayError;
use crate::options::RequestOptions;

/// Environment variable read by [`GatewayConfig::from_env`].
pub const BASE_URL_ENV: &str = "HTTP_GATEWAY_BASE_URL";

/// Immutable gateway configuration: the base URL all relative paths are
/// resolved under, plus the default request options merged into every call.
///
/// The base URL is normalized once, at construction, to end with exactly
/// one `/`. The record is never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    base_url: String,
    default_options: RequestOptions,
}

impl GatewayConfig {
    /// Create a configuration for the given base URL with empty defaults.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            default_options: RequestOptions::default(),
        }
    }

    /// Set the default options merged into every request.
    pub fn with_default_options(mut self, options: RequestOptions) -> Self {
        self.default_options = options;
        self
    }

    /// Create a configuration from environment variables.
    ///
    /// Expects `HTTP_GATEWAY_BASE_URL` to be set; default options stay
    /// empty.
    pub fn from_env() -> Result<Self, GatewayError> {
        let base_url = std::env::var(BASE_URL_ENV)
            .map_err(|_| GatewayError::Build(format!("{BASE_URL_ENV} not set")))?;
        Ok(Self::new(base_url))
    }

    /// The normalized base URL (always `/`-terminated).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The configured default options.
    pub fn default_options(&self) -> &RequestOptions {
        &self.default_options
    }

    /// Resolve a relative path against the base URL.
    ///
    /// At most one leading `/` is stripped from the path before it is
    /// appended to the `/`-terminated base. Nothing else is validated or
    /// rewritten.
    pub(crate) fn resolve(&self, path: &str) -> String {
        let path = path.strip_prefix('/').unwrap_or(path);
        format!("{}{}", self.base_url, path)
    }
}

fn normalize_base_url(url: String) -> String {
    if url.ends_with('/') { url } else { url + "/" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = GatewayConfig::new("https://api.example.com");
        assert_eq!(config.base_url(), "https://api.example.com/");
    }

    #[test]
    fn test_base_url_normalization_is_idempotent() {
        let config = GatewayConfig::new("https://api.example.com/");
        assert_eq!(config.base_url(), "https://api.example.com/");

        let renormalized = GatewayConfig::new(config.base_url());
        assert_eq!(renormalized.base_url(), "https://api.example.com/");
    }

    #[test]
    fn test_resolve_strips_one_leading_slash() {
        let config = GatewayConfig::new("https://api.example.com");
        assert_eq!(config.resolve("/users/42"), "https://api.example.com/users/42");
        assert_eq!(config.resolve("users/42"), "https://api.example.com/users/42");
    }

    #[test]
    fn test_resolve_strips_at_most_one_slash() {
        let config = GatewayConfig::new("https://api.example.com");
        assert_eq!(config.resolve("//users"), "https://api.example.com//users");
    }

    #[test]
    fn test_from_env() {
        temp_env::with_var(BASE_URL_ENV, Some("https://api.example.com"), || {
            let config = GatewayConfig::from_env().unwrap();
            assert_eq!(config.base_url(), "https://api.example.com/");
        });
    }

    #[test]
    fn test_from_env_missing_var() {
        temp_env::with_var_unset(BASE_URL_ENV, || {
            let err = GatewayConfig::from_env().unwrap_err();
            assert!(matches!(err, GatewayError::Build(_)));
        });
    }
}
