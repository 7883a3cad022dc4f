//! HTML helper functions

/// Escape HTML special characters
///
/// Used as the template engine's escape function, so it must be safe inside
/// double- and single-quoted attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Strip HTML tags from a string
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Reduce untrusted markup to text that is safe as element content.
///
/// Character references such as `&#8217;` are kept so typographic entities
/// produced upstream still display.
pub fn sanitize_fragment(s: &str) -> String {
    strip_html(&strip_elements(s, &["script", "style"]))
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Remove whole elements, including their content
fn strip_elements(s: &str, names: &[&str]) -> String {
    let mut out = s.to_string();
    for name in names {
        let open = format!("<{}", name);
        let close = format!("</{}>", name);
        while let Some(start) = out.to_ascii_lowercase().find(&open) {
            let lower = out.to_ascii_lowercase();
            let end = match lower[start..].find(&close) {
                Some(offset) => start + offset + close.len(),
                None => out.len(),
            };
            out.replace_range(start..end, "");
        }
    }
    out
}

/// Truncate a string to a specified length
pub fn truncate(s: &str, length: usize, omission: Option<&str>) -> String {
    let omission = omission.unwrap_or("...");

    if s.chars().count() <= length {
        s.to_string()
    } else {
        let truncated: String = s
            .chars()
            .take(length.saturating_sub(omission.chars().count()))
            .collect();
        format!("{}{}", truncated.trim_end(), omission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"example.com"><script>"#),
            "example.com&quot;&gt;&lt;script&gt;"
        );
        assert_eq!(html_escape("https://a.b/c"), "https://a.b/c");
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html("<p>Hello <b>World</b></p>"), "Hello World");
    }

    #[test]
    fn test_sanitize_fragment() {
        assert_eq!(
            sanitize_fragment("<SCRIPT>alert(1)</SCRIPT>It&#8217;s <i>here</i>"),
            "It&#8217;s here"
        );
        assert_eq!(sanitize_fragment(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(sanitize_fragment("<style>p{}"), "");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 8, None), "Hello...");
        assert_eq!(truncate("Hi", 10, None), "Hi");
    }
}
