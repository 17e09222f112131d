//! Property-based tests for attribute normalization and rendering
//!
//! These tests use proptest to verify:
//! 1. Underscores in keys outside the remap table always render as hyphens
//! 2. Boolean attributes render as bare keys or not at all
//! 3. Rendering is idempotent and children appended later follow in order

#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::unwrap_used)]

use htmltag::{normalize_key, Child, Node, RawValue, NO_ATTRS, NO_CHILDREN, RESERVED_ATTRS};
use proptest::collection::vec;
use proptest::prelude::*;

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z_]{0,15}".prop_filter("not a reserved key", |k| {
        !RESERVED_ATTRS.iter().any(|(raw, _)| *raw == k.as_str())
    })
}

fn text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,]{0,20}"
}

proptest! {
    #[test]
    fn test_underscores_render_as_hyphens(key in key_strategy(), value in text_strategy()) {
        let html = Node::create("div", NO_CHILDREN, [(key.as_str(), value.as_str())]).render();
        let expected_key = key.replace('_', "-");

        prop_assert_eq!(normalize_key(&key), expected_key.clone());
        prop_assert_eq!(html, format!(r#"<div {expected_key}="{value}"></div>"#));
    }

    #[test]
    fn test_boolean_attributes(key in "[a-z]{1,10}", flag in any::<bool>()) {
        prop_assume!(!RESERVED_ATTRS.iter().any(|(raw, _)| *raw == key));
        let html = Node::create("input", NO_CHILDREN, [(key.as_str(), RawValue::Bool(flag))]).render();

        if flag {
            prop_assert_eq!(html, format!("<input {key}></input>"));
        } else {
            prop_assert_eq!(html, "<input></input>");
        }
    }

    #[test]
    fn test_render_is_idempotent(name in "[a-z]{1,8}", texts in vec(text_strategy(), 0..8)) {
        let node = Node::create(name, texts, NO_ATTRS);
        prop_assert_eq!(node.render(), node.render());
    }

    #[test]
    fn test_add_appends_in_call_order(
        initial in vec(text_strategy(), 0..5),
        first in vec(text_strategy(), 0..5),
        second in vec(text_strategy(), 0..5),
    ) {
        let mut node = Node::create("p", initial.clone(), NO_ATTRS);
        node.add(first.clone());
        node.add(second.clone());

        let inner: String = initial.iter().chain(&first).chain(&second).map(String::as_str).collect();
        prop_assert_eq!(node.render(), format!("<p>{inner}</p>"));
    }

    #[test]
    fn test_nested_child_is_inlined(outer in "[a-z]{1,8}", inner in "[a-z]{1,8}", text in text_strategy()) {
        let child = Node::create(inner.as_str(), [text.as_str()], NO_ATTRS);
        let child_html = child.render();
        let children: [Child; 3] = ["a".into(), child.into(), "b".into()];
        let parent = Node::create(outer.as_str(), children, NO_ATTRS);

        prop_assert_eq!(parent.render(), format!("<{outer}>a{child_html}b</{outer}>"));
    }
}
