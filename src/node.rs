//! The element tree

use std::fmt;
use tracing::{debug, trace};

use crate::attributes::{AttrValue, Attributes, RawValue};
use crate::error::{Error, Result};
use crate::render::{RenderConfig, Renderer};

/// Use as the `children` argument of [`Node::create`] when there are none
pub const NO_CHILDREN: [Child; 0] = [];

/// Use as the `attrs` argument of [`Node::create`] when there are none
pub const NO_ATTRS: [(&str, RawValue); 0] = [];

/// A child of a [`Node`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    /// Nested element, rendered recursively
    Node(Node),
    /// Leaf text, rendered as-is
    Text(String),
}

impl Child {
    /// Leaf child from any value with a textual representation
    pub fn text(value: impl fmt::Display) -> Self {
        Self::Text(value.to_string())
    }

    /// Returns the node if this is a nested element, None otherwise
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Node(node) => Some(node),
            Self::Text(_) => None,
        }
    }

    /// Returns the text if this is a leaf, None otherwise
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Node(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

impl From<Node> for Child {
    fn from(value: Node) -> Self {
        Self::Node(value)
    }
}

impl From<&str> for Child {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Child {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Child {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

/// An HTML element: tag name, normalized attributes and ordered children
///
/// Attribute keys are normalized once, when they are supplied. See
/// [`normalize_key`](crate::attributes::normalize_key).
///
/// Ownership keeps the tree acyclic, and `add` needs `&mut self`, so a tree
/// cannot be appended to while it is being rendered.
///
/// # Examples
/// ```
/// use htmltag::Node;
///
/// let node = Node::create("a", ["click me"], [("href", "/go"), ("fr", "form1")]);
/// assert_eq!(node.render(), r#"<a href="/go" for="form1">click me</a>"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    children: Vec<Child>,
    attributes: Attributes,
}

impl Node {
    /// Empty element. The name is stored verbatim.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        trace!(name = %name, "creating node");
        Self {
            name,
            children: Vec::new(),
            attributes: Attributes::new(),
        }
    }

    /// Element with initial children and raw attributes
    pub fn create<C, A, K, V>(name: impl Into<String>, children: C, attrs: A) -> Self
    where
        C: IntoIterator,
        C::Item: Into<Child>,
        A: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<RawValue>,
    {
        let mut node = Self::new(name);
        node.add(children);
        node.attributes.extend(attrs);
        debug!(
            name = %node.name,
            children = node.children.len(),
            attributes = node.attributes.len(),
            "created node"
        );
        node
    }

    /// Like [`Node::new`], but rejects an empty tag name
    pub fn try_new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        Ok(Self::new(name))
    }

    /// Like [`Node::create`], but rejects an empty tag name
    pub fn try_create<C, A, K, V>(name: impl Into<String>, children: C, attrs: A) -> Result<Self>
    where
        C: IntoIterator,
        C::Item: Into<Child>,
        A: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<RawValue>,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        Ok(Self::create(name, children, attrs))
    }

    /// Append children after the existing ones, in order
    pub fn add<I>(&mut self, children: I)
    where
        I: IntoIterator,
        I::Item: Into<Child>,
    {
        self.children.extend(children.into_iter().map(Into::into));
    }

    /// Append a single child
    pub fn push(&mut self, child: impl Into<Child>) {
        self.children.push(child.into());
    }

    /// Normalize `key` and set it
    pub fn set_attr(&mut self, key: &str, value: impl Into<RawValue>) {
        self.attributes.insert_raw(key, value);
    }

    /// Builder form of [`Node::set_attr`]
    #[must_use]
    pub fn attr(mut self, key: &str, value: impl Into<RawValue>) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Builder form of [`Node::push`]
    #[must_use]
    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.push(child);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Look up an attribute by its normalized key
    pub fn get_attr(&self, key: &str) -> Option<&AttrValue> {
        self.attributes.get(key)
    }

    /// Serialize this node and its subtree without escaping
    pub fn render(&self) -> String {
        self.render_with(&RenderConfig::default())
    }

    /// Serialize this node and its subtree
    pub fn render_with(&self, config: &RenderConfig) -> String {
        let mut renderer = Renderer::new(config);
        renderer.write_node(self);
        let html = renderer.finish();
        trace!(name = %self.name, bytes = html.len(), "rendered node");
        html
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Build a [`Node`] with keyword-style attributes.
///
/// Children come after the name, separated by commas. Attributes follow a
/// semicolon as `key = value` pairs; keys are normalized like any other
/// raw key, so `cls`, `fr` and `data_id` work, and keywords such as `type`
/// can be written directly.
///
/// ```
/// use htmltag::tag;
///
/// let input = tag!("input"; type = "text", disabled = true);
/// assert_eq!(input.render(), r#"<input type="text" disabled></input>"#);
///
/// let list = tag!("ul", tag!("li", "one"), tag!("li", "two"));
/// assert_eq!(list.render(), "<ul><li>one</li><li>two</li></ul>");
/// ```
#[macro_export]
macro_rules! tag {
    ($name:expr $(, $child:expr)* $(; $($key:tt = $value:expr),* $(,)?)?) => {{
        #[allow(unused_mut)]
        let mut node = $crate::Node::new($name);
        $( node.push($child); )*
        $( $( node.set_attr(stringify!($key), $value); )* )?
        node
    }};
}
