use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::body::Body;

/// How the transport should shape its result: just the body, the full
/// event stream, or the complete response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Observe {
    Body,
    Events,
    Response,
}

/// How the transport should interpret the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    ArrayBuffer,
    Blob,
    Json,
    Text,
}

/// Transfer-cache setting: a plain on/off switch or a list of headers to
/// include in the cached entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransferCache {
    Enabled(bool),
    IncludeHeaders {
        #[serde(rename = "includeHeaders")]
        include_headers: Vec<String>,
    },
}

/// Per-request options.
///
/// Every field is optional. The gateway treats all of them as opaque and
/// only decides which value wins when defaults and per-call options are
/// merged; interpretation is entirely the transport's job.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RequestOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<HashMap<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observe: Option<Observe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<(String, String)>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_progress: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_type: Option<ResponseType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_credentials: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_cache: Option<TransferCache>,
    /// Request body for the entry points that carry it inside the options
    /// (the generic `request` and DELETE). Not serialized.
    #[serde(skip)]
    pub body: Option<Body>,
}

impl RequestOptions {
    /// Shallow-merge these per-call options over `defaults`.
    ///
    /// Every field set here wins; unset fields fall back to the default
    /// value. The merge is shallow: a per-call `headers` map entirely
    /// replaces a default `headers` map, there is no key-by-key merge of
    /// nested maps. `defaults` is only read, never mutated.
    pub fn merged_over(self, defaults: &RequestOptions) -> RequestOptions {
        RequestOptions {
            headers: self.headers.or_else(|| defaults.headers.clone()),
            context: self.context.or_else(|| defaults.context.clone()),
            observe: self.observe.or(defaults.observe),
            params: self.params.or_else(|| defaults.params.clone()),
            report_progress: self.report_progress.or(defaults.report_progress),
            response_type: self.response_type.or(defaults.response_type),
            with_credentials: self.with_credentials.or(defaults.with_credentials),
            transfer_cache: self.transfer_cache.or_else(|| defaults.transfer_cache.clone()),
            body: self.body.or_else(|| defaults.body.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_per_call_field_wins() {
        let defaults = RequestOptions {
            with_credentials: Some(true),
            response_type: Some(ResponseType::Json),
            ..Default::default()
        };
        let call = RequestOptions {
            response_type: Some(ResponseType::Text),
            ..Default::default()
        };

        let merged = call.merged_over(&defaults);
        assert_eq!(merged.response_type, Some(ResponseType::Text));
        assert_eq!(merged.with_credentials, Some(true));
    }

    #[test]
    fn test_absent_call_options_equal_defaults() {
        let defaults = RequestOptions {
            with_credentials: Some(true),
            headers: Some(headers(&[("X-Api-Key", "k")])),
            ..Default::default()
        };

        let merged = RequestOptions::default().merged_over(&defaults);
        assert_eq!(merged, defaults);
    }

    #[test]
    fn test_headers_replace_not_deep_merge() {
        let defaults = RequestOptions {
            headers: Some(headers(&[("Accept", "application/json"), ("X-A", "1")])),
            ..Default::default()
        };
        let call = RequestOptions {
            headers: Some(headers(&[("X-B", "2")])),
            ..Default::default()
        };

        // Per-call headers fully replace the default map; the default
        // Accept header does not leak through.
        let merged = call.merged_over(&defaults);
        assert_eq!(merged.headers, Some(headers(&[("X-B", "2")])));
    }

    #[test]
    fn test_merge_does_not_mutate_defaults() {
        let defaults = RequestOptions {
            with_credentials: Some(true),
            headers: Some(headers(&[("Accept", "text/plain")])),
            ..Default::default()
        };
        let snapshot = defaults.clone();

        let call = RequestOptions {
            headers: Some(headers(&[("Accept", "application/json")])),
            with_credentials: Some(false),
            ..Default::default()
        };
        let _ = call.merged_over(&defaults);

        assert_eq!(defaults, snapshot);
    }

    #[test]
    fn test_keys_absent_from_both_stay_absent() {
        let merged = RequestOptions::default().merged_over(&RequestOptions::default());
        assert_eq!(merged, RequestOptions::default());
    }

    #[test]
    fn test_observe_serde_vocabulary() {
        assert_eq!(serde_json::to_string(&Observe::Events).unwrap(), "\"events\"");
        assert_eq!(
            serde_json::to_string(&ResponseType::ArrayBuffer).unwrap(),
            "\"arraybuffer\""
        );
    }
}
