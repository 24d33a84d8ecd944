//! Redirect chain data model.
//!
//! A `RedirectChain` is the ordered list of `Hop`s visited by one resolver run.
//! Hops are appended in visit order and never modified once the next hop starts.

use std::collections::BTreeMap;

use serde::Serialize;

/// One step in a redirect chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hop {
    /// Request target at this step
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,
    /// Allow-listed response headers, lower-case names
    pub headers: BTreeMap<String, String>,
    /// Measured fetch latency in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Set for fetch failures and the hop-limit sentinel
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl Hop {
    /// A hop that received a response.
    pub fn response(
        url: impl Into<String>,
        status_code: u16,
        status_text: impl Into<String>,
        headers: BTreeMap<String, String>,
        response_time_ms: f64,
    ) -> Self {
        Self {
            url: url.into(),
            status_code: Some(status_code),
            status_text: Some(status_text.into()),
            headers,
            response_time_ms: Some(response_time_ms),
            error: None,
            is_error: false,
        }
    }

    /// A hop that failed before a response arrived.
    pub fn failed(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status_code: None,
            status_text: None,
            headers: BTreeMap::new(),
            response_time_ms: None,
            error: Some(error.into()),
            is_error: true,
        }
    }

    /// Whether this hop counts as an error hop for issues and scoring.
    pub fn has_error(&self) -> bool {
        self.is_error || self.error.is_some()
    }

    /// Whether the status is in the 3xx range.
    pub fn is_redirect(&self) -> bool {
        matches!(self.status_code, Some(code) if (300..400).contains(&code))
    }

    /// The captured `Location` header, if any.
    pub fn location(&self) -> Option<&str> {
        self.headers.get("location").map(String::as_str)
    }

    /// Lower-case hostname of the hop URL, `None` if the URL does not parse.
    pub fn hostname(&self) -> Option<String> {
        url::Url::parse(&self.url)
            .ok()?
            .host_str()
            .map(|h| h.to_ascii_lowercase())
    }
}

/// How the resolver loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Termination {
    /// Reached a non-redirect status
    Terminated,
    /// A hop failed: network error, timeout or a malformed redirect
    Errored,
    /// The hop limit was reached
    LoopLimit,
    /// The caller cancelled the resolution
    Cancelled,
}

/// The ordered hops of one resolver run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RedirectChain {
    pub hops: Vec<Hop>,
    pub termination: Termination,
}

impl RedirectChain {
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    pub fn last(&self) -> Option<&Hop> {
        self.hops.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hop_serializes_camel_case_and_skips_empty_fields() {
        let mut headers = BTreeMap::new();
        headers.insert("location".to_string(), "/next".to_string());
        let hop = Hop::response("https://a.com/x", 301, "Moved Permanently", headers, 12.5);

        let json = serde_json::to_value(&hop).unwrap();
        assert_eq!(json["url"], "https://a.com/x");
        assert_eq!(json["statusCode"], 301);
        assert_eq!(json["statusText"], "Moved Permanently");
        assert_eq!(json["headers"]["location"], "/next");
        assert_eq!(json["responseTimeMs"], 12.5);
        assert!(json.get("error").is_none());
        assert!(json.get("isError").is_none());
    }

    #[test]
    fn test_failed_hop_serialization() {
        let hop = Hop::failed("https://a.com", "Request timeout");
        let json = serde_json::to_value(&hop).unwrap();
        assert_eq!(json["error"], "Request timeout");
        assert_eq!(json["isError"], true);
        assert!(json.get("statusCode").is_none());
        assert!(hop.has_error());
    }

    #[test]
    fn test_error_without_flag_still_counts() {
        let mut hop = Hop::response("https://a.com", 302, "Found", BTreeMap::new(), 1.0);
        assert!(!hop.has_error());
        hop.error = Some("Redirect status without Location header".to_string());
        assert!(hop.has_error());
        assert!(!hop.is_error);
    }

    #[test]
    fn test_hostname_lowercases() {
        let hop = Hop::failed("https://WWW.Example.COM/path", "x");
        assert_eq!(hop.hostname().as_deref(), Some("www.example.com"));
        let bad = Hop::failed("not a url", "x");
        assert_eq!(bad.hostname(), None);
    }

    #[test]
    fn test_is_redirect_range() {
        let hop = |code| Hop::response("https://a.com", code, "", BTreeMap::new(), 0.0);
        assert!(hop(300).is_redirect());
        assert!(hop(399).is_redirect());
        assert!(!hop(200).is_redirect());
        assert!(!hop(400).is_redirect());
        assert!(!Hop::failed("https://a.com", "x").is_redirect());
    }

    #[test]
    fn test_termination_serialization() {
        assert_eq!(
            serde_json::to_value(Termination::LoopLimit).unwrap(),
            "LOOP_LIMIT"
        );
    }
}
