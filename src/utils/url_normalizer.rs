//! URL normalization.
//!
//! Shortening the same URL twice must yield the same stored row, so the
//! service canonicalizes URLs before hashing or storing them: lowercase
//! hostname, no fragment, no default port. Query strings and path case are
//! preserved.

use url::Url;

use crate::error::AppError;

/// Normalizes a URL to its canonical form.
///
/// Only `http` and `https` schemes are accepted; anything else (including
/// `javascript:` and `data:`) is rejected as a validation error.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for malformed URLs or unsupported
/// schemes.
pub fn normalize_url(input: &str) -> Result<String, AppError> {
    let mut url = Url::parse(input)
        .map_err(|e| AppError::Validation(format!("invalid URL format: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::Validation(
            "only http and https URLs are allowed".to_string(),
        ));
    }

    if let Some(host) = url.host_str() {
        let lowered = host.to_ascii_lowercase();
        url.set_host(Some(&lowered))
            .map_err(|e| AppError::Validation(format!("invalid host: {e}")))?;
    }

    url.set_fragment(None);

    let default_port = matches!(
        (url.scheme(), url.port()),
        ("http", Some(80)) | ("https", Some(443))
    );
    if default_port {
        // set_port only fails for schemes without ports; http(s) always has one.
        let _ = url.set_port(None);
    }

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_host_only() {
        assert_eq!(
            normalize_url("HTTPS://EXAMPLE.COM/MixedPath").unwrap(),
            "https://example.com/MixedPath"
        );
    }

    #[test]
    fn test_strips_fragment() {
        assert_eq!(
            normalize_url("https://example.com/page#section").unwrap(),
            "https://example.com/page"
        );
    }

    #[test]
    fn test_strips_default_ports() {
        assert_eq!(
            normalize_url("https://example.com:443/x").unwrap(),
            "https://example.com/x"
        );
        assert_eq!(
            normalize_url("http://example.com:80/x").unwrap(),
            "http://example.com/x"
        );
    }

    #[test]
    fn test_keeps_explicit_port_and_query() {
        assert_eq!(
            normalize_url("https://example.com:8443/x?a=1&b=2").unwrap(),
            "https://example.com:8443/x?a=1&b=2"
        );
    }

    #[test]
    fn test_rejects_non_http_schemes() {
        for input in ["ftp://example.com", "javascript:alert(1)", "file:///etc/passwd"] {
            assert!(matches!(
                normalize_url(input),
                Err(AppError::Validation(_))
            ));
        }
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert!(normalize_url("not a url").is_err());
    }
}
