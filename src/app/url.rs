//! Target URL validation and normalization.

use log::warn;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::ApiError;

/// Validates and normalizes a user-supplied target URL.
///
/// Adds an `https://` prefix unless the input starts with `http`, then checks
/// that the result parses as an absolute http(s) URL with a host. The returned string
/// is the prefixed input, not the parser's re-serialization, so it echoes back
/// as the report's `startUrl` unchanged.
///
/// # Errors
///
/// Returns `ApiError::InvalidUrl` if the URL is empty, longer than
/// `MAX_URL_LENGTH`, does not parse, or uses another scheme.
pub fn normalize_target_url(url: &str) -> Result<String, ApiError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ApiError::InvalidUrl);
    }

    let normalized = if url.starts_with("http") {
        url.to_string()
    } else {
        format!("https://{url}")
    };

    if normalized.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting URL exceeding maximum length ({} > {}): {}...",
            normalized.len(),
            MAX_URL_LENGTH,
            normalized.chars().take(50).collect::<String>()
        );
        return Err(ApiError::InvalidUrl);
    }

    match url::Url::parse(&normalized) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.host().is_some() => {
            Ok(normalized)
        }
        Ok(_) => {
            warn!("Rejecting URL with unsupported scheme or no host: {url}");
            Err(ApiError::InvalidUrl)
        }
        Err(e) => {
            warn!("Rejecting invalid URL {url}: {e}");
            Err(ApiError::InvalidUrl)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_target_url;
    use crate::error_handling::ApiError;

    fn normalized(url: &str) -> Option<String> {
        normalize_target_url(url).ok()
    }

    #[test]
    fn test_normalize_adds_https() {
        assert_eq!(normalized("example.com"), Some("https://example.com".to_string()));
    }

    #[test]
    fn test_normalize_preserves_http_and_https() {
        assert_eq!(
            normalized("http://example.com"),
            Some("http://example.com".to_string())
        );
        assert_eq!(
            normalized("https://example.com"),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn test_normalize_host_starting_with_http_is_not_prefixed() {
        // Anything starting with "http" is taken as already having a scheme
        for input in ["httpbin.org", "httpbin.org/get", "httpexample.com"] {
            assert!(
                matches!(normalize_target_url(input), Err(ApiError::InvalidUrl)),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_normalize_with_path_port_and_query() {
        assert_eq!(
            normalized("example.com/path?query=value"),
            Some("https://example.com/path?query=value".to_string())
        );
        assert_eq!(
            normalized("example.com:8080"),
            Some("https://example.com:8080".to_string())
        );
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(
            normalized("  example.com \n"),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn test_normalize_rejects_invalid() {
        assert!(matches!(
            normalize_target_url("not a valid url!!!"),
            Err(ApiError::InvalidUrl)
        ));
        assert_eq!(normalized(""), None);
        assert_eq!(normalized("   "), None);
        assert_eq!(normalized("https://"), None);
        assert_eq!(normalized("http://"), None);
        assert_eq!(normalized("://example.com"), None);
    }

    #[test]
    fn test_normalize_ipv6() {
        assert_eq!(
            normalized("[2001:db8::1]"),
            Some("https://[2001:db8::1]".to_string())
        );
        assert_eq!(
            normalized("http://[2001:db8::1]:8080/x"),
            Some("http://[2001:db8::1]:8080/x".to_string())
        );
    }

    #[test]
    fn test_normalize_rejects_too_long_url() {
        let long_url = format!("https://example.com/{}", "a".repeat(2100));
        assert_eq!(normalized(&long_url), None);

        let at_limit = format!("https://example.com/{}", "a".repeat(2028));
        assert_eq!(at_limit.len(), 2048);
        assert!(normalized(&at_limit).is_some());
    }

    #[test]
    fn test_normalize_rejects_too_long_after_prefix() {
        let url = format!("example.com/{}", "a".repeat(2030));
        assert!(url.len() <= 2048);
        assert_eq!(normalized(&url), None);
    }

    // Property-based tests using proptest
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_normalization_idempotent(url in "[a-z]{3,20}\\.[a-z]{2,5}") {
            prop_assume!(!url.starts_with("http"));
            let n1 = normalized(&url);
            prop_assert!(n1.is_some());
            let n1 = n1.unwrap();
            prop_assert_eq!(Some(n1.clone()), normalized(&n1));
        }

        #[test]
        fn test_scheme_handling(domain in "[a-z]{3,20}\\.[a-z]{2,5}") {
            prop_assume!(!domain.starts_with("http"));
            let no_scheme = normalized(&domain);
            prop_assert!(no_scheme.unwrap().starts_with("https://"));

            let with_http = normalized(&format!("http://{}", domain));
            prop_assert!(with_http.unwrap().starts_with("http://"));
        }

        #[test]
        fn test_special_chars_no_panic(
            domain in "[a-z]{3,20}\\.[a-z]{2,5}",
            path in "\\PC{0,100}"
        ) {
            let _ = normalize_target_url(&format!("{}/{}", domain, path));
        }
    }
}
