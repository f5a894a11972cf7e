//! Element emission helpers shared by the per-type renderers.

use trellis_core::Component;

/// Emit a normal (non-void) element with content, children, and closing tag.
///
/// `leading` attributes are emitted right after `id`, before the node's own
/// attribute map; `skip` names attributes consumed by the caller (so they are
/// not emitted twice). An element with no content and no rendered children
/// collapses onto a single line.
pub(crate) fn render_block(
    node: &Component,
    tag: &str,
    leading: &[(&str, String)],
    skip: &[&str],
    indent: usize,
    render_child: fn(&Component, usize) -> String,
) -> String {
    let spaces = " ".repeat(indent);
    let attrs = attribute_string(node, leading, skip);
    let content = node
        .props
        .content
        .as_deref()
        .filter(|content| !content.trim().is_empty());

    let children: Vec<String> = node
        .children
        .iter()
        .map(|child| render_child(child, indent + 2))
        .filter(|markup| !markup.is_empty())
        .collect();

    if content.is_none() && children.is_empty() {
        return format!("{}<{}{}></{}>", spaces, tag, attrs, tag);
    }

    let mut lines = vec![format!("{}<{}{}>", spaces, tag, attrs)];
    if let Some(content) = content {
        lines.push(format!("{}{}", " ".repeat(indent + 2), content));
    }
    lines.extend(children);
    lines.push(format!("{}</{}>", spaces, tag));
    lines.join("\n")
}

/// Emit an `img` element. Void: no closing tag, children never render.
pub(crate) fn render_image(node: &Component, indent: usize) -> String {
    let spaces = " ".repeat(indent);
    let src = node.props.attributes.get("src").cloned().unwrap_or_default();
    let alt = node.props.attributes.get("alt").cloned().unwrap_or_default();
    let attrs = attribute_string(node, &[("src", src), ("alt", alt)], &["src", "alt"]);
    format!("{}<img{}>", spaces, attrs)
}

/// Build the attribute string for a node: `id` first, then `leading`, then
/// the node's attribute map in authored order minus `skip`.
fn attribute_string(node: &Component, leading: &[(&str, String)], skip: &[&str]) -> String {
    let mut out = format!(" id=\"{}\"", escape_attribute(&node.id));
    for (name, value) in leading {
        out.push_str(&format!(" {}=\"{}\"", name, escape_attribute(value)));
    }
    for (name, value) in &node.props.attributes {
        if skip.contains(&name.as_str()) {
            continue;
        }
        out.push_str(&format!(" {}=\"{}\"", name, escape_attribute(value)));
    }
    out
}

/// Escape special characters in attribute values.
fn escape_attribute(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::ComponentType;

    fn leaf(node: &Component, _indent: usize) -> String {
        let _ = node;
        String::new()
    }

    #[test]
    fn test_empty_element_single_line() {
        let node = Component::new("box", ComponentType::Container);
        assert_eq!(
            render_block(&node, "div", &[], &[], 0, leaf),
            "<div id=\"box\"></div>"
        );
    }

    #[test]
    fn test_attribute_order() {
        let node = Component::new("b", ComponentType::Button)
            .with_attribute("class", "primary")
            .with_attribute("data-track", "cta");
        let markup = render_block(&node, "button", &[], &[], 0, leaf);
        assert_eq!(
            markup,
            "<button id=\"b\" class=\"primary\" data-track=\"cta\"></button>"
        );
    }

    #[test]
    fn test_attribute_values_escaped() {
        let node =
            Component::new("b", ComponentType::Button).with_attribute("title", "Tom & \"Jerry\"");
        let markup = render_block(&node, "button", &[], &[], 0, leaf);
        assert!(markup.contains("title=\"Tom &amp; &quot;Jerry&quot;\""));
    }

    #[test]
    fn test_escape_attribute() {
        assert_eq!(escape_attribute("a & b"), "a &amp; b");
        assert_eq!(escape_attribute("<x>"), "&lt;x&gt;");
        assert_eq!(escape_attribute("say \"hi\""), "say &quot;hi&quot;");
    }

    #[test]
    fn test_image_defaults_empty_src_alt() {
        let node = Component::new("pic", ComponentType::Image);
        assert_eq!(render_image(&node, 0), "<img id=\"pic\" src=\"\" alt=\"\">");
    }
}
