//! Per-node scoped script blocks.

use trellis_core::{Component, CustomCode};

/// Emit the guarded script block for one node, or `None` when the node has
/// nothing actionable.
///
/// Snippets appear in a fixed order: `beforeMount`, `onMount`, the `click`
/// listener, the `mouseenter` listener, the scroll-visibility poll, then the
/// free-form `javascript` snippet.
pub(crate) fn node_block(node: &Component) -> Option<String> {
    let code = node.props.custom_code.as_ref()?;
    if !code.has_script() {
        return None;
    }

    let label = if node.display_name.is_empty() {
        node.id.as_str()
    } else {
        node.display_name.as_str()
    };

    let mut lines = vec![
        format!("// {} (#{})", label, node.id),
        "(() => {".to_string(),
        format!("  const el = document.getElementById('{}');", node.id),
        "  if (!el) return;".to_string(),
    ];

    if let Some(snippet) = non_blank(&code.before_mount) {
        push_snippet(&mut lines, snippet, "  ");
    }
    if let Some(snippet) = non_blank(&code.on_mount) {
        push_snippet(&mut lines, snippet, "  ");
    }
    if let Some(snippet) = non_blank(&code.on_click) {
        lines.push("  el.addEventListener('click', (event) => {".to_string());
        push_snippet(&mut lines, snippet, "    ");
        lines.push("  });".to_string());
    }
    if let Some(snippet) = non_blank(&code.on_hover) {
        lines.push("  el.addEventListener('mouseenter', (event) => {".to_string());
        push_snippet(&mut lines, snippet, "    ");
        lines.push("  });".to_string());
    }
    if let Some(snippet) = non_blank(&code.on_scroll) {
        lines.push("  const checkVisibility = () => {".to_string());
        lines.push("    const rect = el.getBoundingClientRect();".to_string());
        lines.push("    if (rect.top < window.innerHeight && rect.bottom > 0) {".to_string());
        push_snippet(&mut lines, snippet, "      ");
        lines.push("    }".to_string());
        lines.push("  };".to_string());
        lines.push("  window.addEventListener('scroll', checkVisibility);".to_string());
        lines.push("  checkVisibility();".to_string());
    }
    if let Some(snippet) = non_blank(&code.javascript) {
        push_snippet(&mut lines, snippet, "  ");
    }

    lines.push("})();".to_string());
    Some(lines.join("\n"))
}

fn non_blank(snippet: &Option<String>) -> Option<&str> {
    snippet.as_deref().filter(|s| !s.trim().is_empty())
}

fn push_snippet(lines: &mut Vec<String>, snippet: &str, indent: &str) {
    for line in snippet.trim().lines() {
        lines.push(format!("{}{}", indent, line));
    }
}
