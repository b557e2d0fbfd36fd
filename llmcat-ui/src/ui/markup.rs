use std::fmt;

/// HTML fragment that is safe to embed without further escaping.
///
/// Values only come from the highlighter or from [`HighlightedHtml::escaped`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HighlightedHtml(String);

impl HighlightedHtml {
    pub(crate) fn new(html: String) -> Self {
        Self(html)
    }

    /// Escape plain text into a `<pre>` block.
    pub fn escaped(text: &str) -> Self {
        Self(format!("<pre>{}</pre>", escape_html(text)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for HighlightedHtml {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HighlightedHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escaped_text_cannot_inject_markup() {
        let html = HighlightedHtml::escaped("<script>alert('x') && \"y\"</script>");
        assert_eq!(
            html.as_str(),
            "<pre>&lt;script&gt;alert(&#39;x&#39;) &amp;&amp; &quot;y&quot;&lt;/script&gt;</pre>"
        );
    }

    #[test]
    fn display_matches_inner_string() {
        let html = HighlightedHtml::new("<span>x</span>".to_string());
        assert_eq!(html.to_string(), "<span>x</span>");
        assert_eq!(html.into_string(), "<span>x</span>");
    }
}
