//! htmltag: a minimal library for programmatic HTML generation
//!
//! This crate provides:
//! - A recursive [`Node`] type with a tag name, attributes and children
//! - Attribute key normalization (`cls` → `class`, `data_id` → `data-id`)
//! - Serialization of a node tree to a single line of HTML
//! - Optional HTML escaping through [`RenderConfig`]
//!
//! Output is not escaped by default. Use [`RenderConfig::escaped`] when any
//! text or attribute value comes from untrusted input.
//!
//! # Examples
//! ```
//! use htmltag::{Node, NO_ATTRS};
//!
//! let mut node = Node::create("p", ["hello"], NO_ATTRS);
//! node.add([Node::create("em", ["world"], [("cls", "loud")])]);
//! assert_eq!(node.render(), r#"<p>hello<em class="loud">world</em></p>"#);
//! ```

use std::{fs, path::Path};
use tracing::{debug, error, instrument};

pub mod attributes;
pub mod error;
pub mod node;
pub mod render;
pub mod tags;

// Re-exports
pub use attributes::{normalize_key, AttrValue, Attributes, RawValue, RESERVED_ATTRS};
pub use error::{Error, Result};
pub use node::{Child, Node, NO_ATTRS, NO_CHILDREN};
pub use render::{escape_html, escape_html_attr, EscapeMode, RenderConfig};

/// Render `node` without escaping and write it to `path`
pub fn write_file(path: impl AsRef<Path>, node: &Node) -> Result<()> {
    write_file_with(path, node, &RenderConfig::default())
}

/// Render `node` with `config` and write it to `path`
///
/// The file holds exactly the rendered HTML, with no trailing newline.
#[instrument(skip_all, fields(path = %path.as_ref().display(), tag = node.name()))]
pub fn write_file_with(path: impl AsRef<Path>, node: &Node, config: &RenderConfig) -> Result<()> {
    let path = path.as_ref();
    let html = node.render_with(config);

    fs::write(path, &html).map_err(|e| {
        error!("Failed to write file: {}", e);
        Error::io(path, e)
    })?;

    debug!(bytes = html.len(), "wrote rendered html");
    Ok(())
}
