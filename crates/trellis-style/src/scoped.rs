//! Naive per-node custom-CSS scoping.
//!
//! Author-supplied CSS fragments are scoped to their node by textual line
//! rewriting, not by parsing: any line containing a rule-opening brace gets
//! the node's id selector prefixed, comment lines and property lines pass
//! through unchanged. Known limitation: at-rule lines (`@media`, nested
//! `@keyframes`) also contain `{` and get prefixed.

use trellis_core::{Component, ComponentType};

/// Collect and scope every node's `customCode.css`, pre-order.
pub(crate) fn compile_scoped_css(tree: &[Component]) -> String {
    let mut blocks = Vec::new();
    for node in tree {
        collect_scoped(node, &mut blocks);
    }
    blocks.join("\n\n")
}

fn collect_scoped(node: &Component, blocks: &mut Vec<String>) {
    if node.component_type == ComponentType::Unknown {
        return;
    }
    if let Some(css) = node.props.custom_code.as_ref().and_then(|code| code.css.as_deref()) {
        if !css.trim().is_empty() {
            blocks.push(scope_css(&node.id, css));
        }
    }
    for child in &node.children {
        collect_scoped(child, blocks);
    }
}

/// Prefix rule-opening lines of a CSS fragment with `#<node_id> `.
pub fn scope_css(node_id: &str, css: &str) -> String {
    css.lines()
        .map(|line| {
            if line.contains('{') && !line.trim_start().starts_with("/*") {
                format!("#{} {}", node_id, line)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<String>>()
        .join("\n")
}
