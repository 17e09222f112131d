//! Convenience factories, one per common HTML tag
//!
//! Each factory forwards to [`Node::create`] with its tag name:
//!
//! ```
//! use htmltag::tags::{li, ul};
//! use htmltag::NO_ATTRS;
//!
//! let list = ul([li(["one"], NO_ATTRS), li(["two"], NO_ATTRS)], [("cls", "menu")]);
//! assert_eq!(
//!     list.render(),
//!     r#"<ul class="menu"><li>one</li><li>two</li></ul>"#
//! );
//! ```

use crate::attributes::RawValue;
use crate::node::{Child, Node};

macro_rules! define_tags {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("Create a `<", stringify!($name), ">` element")]
            pub fn $name<C, A, K, V>(children: C, attrs: A) -> Node
            where
                C: IntoIterator,
                C::Item: Into<Child>,
                A: IntoIterator<Item = (K, V)>,
                K: AsRef<str>,
                V: Into<RawValue>,
            {
                Node::create(stringify!($name), children, attrs)
            }
        )*

        /// Tag names that have a factory in this module
        pub const TAG_NAMES: &[&str] = &[$(stringify!($name)),*];
    };
}

define_tags!(
    html, head, body, title, meta, link, script, style, // document
    header, footer, nav, main, section, article, aside, // sections
    div, span, p, a, img, br, hr, strong, em, code, pre, blockquote,
    h1, h2, h3, h4, h5, h6,
    ul, ol, li,
    table, thead, tbody, tr, td, th,
    form, input, button, label, select, option, textarea,
);
