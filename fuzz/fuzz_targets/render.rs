#![no_main]
use htmltag::{Node, RenderConfig};
use libfuzzer_sys::fuzz_target;

// Each line is `name` or `name key=value`, nested inside the previous one.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut stack: Vec<Node> = Vec::new();
        for line in s.lines().take(64) {
            let mut parts = line.splitn(2, ' ');
            let name = parts.next().unwrap_or_default();
            let mut node = Node::new(name);
            if let Some((key, value)) = parts.next().and_then(|attr| attr.split_once('=')) {
                match value {
                    "true" => node.set_attr(key, true),
                    "false" => node.set_attr(key, false),
                    _ => node.set_attr(key, value),
                }
            }
            stack.push(node);
        }

        let mut root: Option<Node> = None;
        while let Some(mut node) = stack.pop() {
            if let Some(child) = root.take() {
                node.push(child);
            }
            root = Some(node);
        }

        if let Some(root) = root {
            let plain = root.render();
            assert!(plain.starts_with('<'));
            assert!(plain.ends_with('>'));
            let _ = root.render_with(&RenderConfig::escaped());
        }
    }
});
