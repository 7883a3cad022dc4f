//! Pre-rendered markup received from the content API

use serde::{Deserialize, Deserializer, Serialize};

use crate::helpers::{sanitize_fragment, strip_html};

/// How upstream markup is emitted into pages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HtmlPolicy {
    /// Emit as-is; the content API is authenticated and its output trusted
    #[default]
    Trusted,
    /// Strip tags and neutralize markup characters
    Sanitize,
}

/// A fragment of HTML rendered by the content management system.
///
/// Values only come into existence by deserializing an upstream response,
/// so arbitrary strings built inside this crate can never be emitted unescaped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    /// Markup to place in a page under the given policy
    pub fn render(&self, policy: HtmlPolicy) -> String {
        match policy {
            HtmlPolicy::Trusted => self.0.clone(),
            HtmlPolicy::Sanitize => sanitize_fragment(&self.0),
        }
    }

    /// Text content with all tags removed, for attributes and logs
    pub fn plain_text(&self) -> String {
        strip_html(&self.0).trim().to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl<'de> Deserialize<'de> for TrustedHtml {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer).map(|s| TrustedHtml(s.unwrap_or_default()))
    }
}
