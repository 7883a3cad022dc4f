//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters `encodeURIComponent` leaves untouched, minus `'` which would
/// end a single-quoted attribute
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single path segment
///
/// # Examples
/// ```ignore
/// encode_component("C / C++") // -> "C%20%2F%20C%2B%2B"
/// ```
pub fn encode_component(segment: &str) -> String {
    utf8_percent_encode(segment, COMPONENT).to_string()
}

/// Join a base path and a segment with exactly one slash
///
/// # Examples
/// ```ignore
/// join_path("/learn/category/", "Go") // -> "/learn/category/Go"
/// ```
pub fn join_path(base: &str, segment: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        segment.trim_start_matches('/')
    )
}

/// Build an absolute URL from its parts
///
/// # Examples
/// ```ignore
/// absolute_url("https", "example.com", "/learn") // -> "https://example.com/learn"
/// ```
pub fn absolute_url(scheme: &str, host: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}://{}{}", scheme, host, path)
    } else {
        format!("{}://{}/{}", scheme, host, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("C / C++"), "C%20%2F%20C%2B%2B");
        assert_eq!(encode_component("Node.js"), "Node.js");
        assert_eq!(encode_component("Tips & tricks"), "Tips%20%26%20tricks");
        assert_eq!(encode_component("it's"), "it%27s");
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("/learn/category/", "/Go"), "/learn/category/Go");
        assert_eq!(join_path("/learn/category", "Go"), "/learn/category/Go");
    }

    #[test]
    fn test_absolute_url() {
        assert_eq!(
            absolute_url("https", "example.com", "/learn"),
            "https://example.com/learn"
        );
        assert_eq!(
            absolute_url("http", "localhost:4000", "learn"),
            "http://localhost:4000/learn"
        );
    }
}
