//! HTML serialization

use crate::attributes::{AttrValue, Attributes};
use crate::node::{Child, Node};

/// How text children and attribute values are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EscapeMode {
    /// Write everything verbatim
    #[default]
    None,
    /// Escape HTML special characters in text and attribute values
    Html,
}

/// Configuration options for rendering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// Escaping applied to text children and attribute values.
    /// Tag and attribute names are never escaped.
    pub escape: EscapeMode,
}

impl RenderConfig {
    /// Configuration with HTML escaping turned on
    pub fn escaped() -> Self {
        Self {
            escape: EscapeMode::Html,
        }
    }
}

/// Escape text content
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    push_escaped(&mut out, input, false);
    out
}

/// Escape an attribute value, including line breaks
pub fn escape_html_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    push_escaped(&mut out, input, true);
    out
}

fn push_escaped(out: &mut String, input: &str, attr: bool) {
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '\n' if attr => out.push_str("&#10;"),
            '\r' if attr => out.push_str("&#13;"),
            _ => out.push(ch),
        }
    }
}

/// Writes nodes into a single output buffer
#[derive(Debug)]
pub(crate) struct Renderer<'c> {
    config: &'c RenderConfig,
    out: String,
}

impl<'c> Renderer<'c> {
    pub(crate) fn new(config: &'c RenderConfig) -> Self {
        Self {
            config,
            out: String::new(),
        }
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }

    pub(crate) fn write_node(&mut self, node: &Node) {
        self.out.push('<');
        self.out.push_str(node.name());
        self.write_attributes(node.attributes());
        self.out.push('>');

        for child in node.children() {
            match child {
                Child::Node(inner) => self.write_node(inner),
                Child::Text(text) => self.write_text(text, false),
            }
        }

        self.out.push_str("</");
        self.out.push_str(node.name());
        self.out.push('>');
    }

    fn write_attributes(&mut self, attrs: &Attributes) {
        for (key, value) in attrs {
            self.out.push(' ');
            self.out.push_str(key);
            if let AttrValue::Text(text) = value {
                self.out.push_str("=\"");
                self.write_text(text, true);
                self.out.push('"');
            }
        }
    }

    fn write_text(&mut self, text: &str, attr: bool) {
        match self.config.escape {
            EscapeMode::None => self.out.push_str(text),
            EscapeMode::Html => push_escaped(&mut self.out, text, attr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<script>alert('x') & \"y\"</script>"),
            "&lt;script&gt;alert(&#x27;x&#x27;) &amp; &quot;y&quot;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escape_html_keeps_line_breaks_in_text() {
        assert_eq!(escape_html("a\nb"), "a\nb");
    }

    #[test]
    fn test_escape_html_attr_encodes_line_breaks() {
        assert_eq!(escape_html_attr("a\r\nb"), "a&#13;&#10;b");
    }

    #[test]
    fn test_default_config_does_not_escape() {
        assert_eq!(RenderConfig::default().escape, EscapeMode::None);
        assert_eq!(RenderConfig::escaped().escape, EscapeMode::Html);
    }
}
