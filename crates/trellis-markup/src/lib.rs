//! HTML markup generation from Trellis component trees.
//!
//! The renderer walks the tree depth-first and emits one element per node,
//! dispatching on [`ComponentType`] with an exhaustive match. Output order is
//! exactly document order of the input tree; nothing is reordered or
//! deduplicated. Unknown node types emit nothing and are skipped silently.

mod elements;

use elements::{render_block, render_image};
use tracing::debug;
use trellis_core::{Component, ComponentType};

/// Render a forest of components to an HTML fragment.
///
/// Root nodes start at indentation depth zero; each nesting level indents by
/// two spaces. Nodes are joined by newlines.
pub fn render(tree: &[Component]) -> String {
    let rendered: Vec<String> = tree
        .iter()
        .map(|node| render_node(node, 0))
        .filter(|markup| !markup.is_empty())
        .collect();
    rendered.join("\n")
}

/// Render a single node and its subtree at the given indentation.
fn render_node(node: &Component, indent: usize) -> String {
    match node.component_type {
        ComponentType::Container | ComponentType::Grid | ComponentType::Flex => {
            render_block(node, "div", &[], &[], indent, render_node)
        }
        ComponentType::Text => render_block(node, "p", &[], &[], indent, render_node),
        ComponentType::Heading => {
            let tag = format!("h{}", heading_level(node));
            render_block(node, &tag, &[], &["level"], indent, render_node)
        }
        ComponentType::Image => render_image(node, indent),
        ComponentType::Link => {
            let href = node
                .props
                .attributes
                .get("href")
                .cloned()
                .unwrap_or_else(|| "#".to_string());
            render_block(node, "a", &[("href", href)], &["href"], indent, render_node)
        }
        ComponentType::Button => render_block(node, "button", &[], &[], indent, render_node),
        ComponentType::Navigation => render_block(node, "nav", &[], &[], indent, render_node),
        ComponentType::Footer => render_block(node, "footer", &[], &[], indent, render_node),
        ComponentType::Section | ComponentType::Hero | ComponentType::Cta => {
            render_block(node, "section", &[], &[], indent, render_node)
        }
        ComponentType::Unknown => {
            debug!(id = %node.id, "skipping node with unknown type");
            String::new()
        }
    }
}

/// Heading level from the `level` attribute, clamped to 1..=6, default 2.
fn heading_level(node: &Component) -> u8 {
    node.props
        .attributes
        .get("level")
        .and_then(|value| value.parse::<u8>().ok())
        .map(|level| level.clamp(1, 6))
        .unwrap_or(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::ComponentType;

    #[test]
    fn test_minimal_text_node() {
        let tree = vec![Component::new("a1", ComponentType::Text).with_content("Hi")];
        let markup = render(&tree);

        assert!(markup.contains("id=\"a1\""));
        assert!(markup.contains("Hi"));
        assert!(markup.starts_with("<p"));
        assert!(markup.ends_with("</p>"));
    }

    #[test]
    fn test_element_mapping() {
        let cases = [
            (ComponentType::Container, "<div"),
            (ComponentType::Grid, "<div"),
            (ComponentType::Flex, "<div"),
            (ComponentType::Text, "<p"),
            (ComponentType::Button, "<button"),
            (ComponentType::Navigation, "<nav"),
            (ComponentType::Footer, "<footer"),
            (ComponentType::Section, "<section"),
            (ComponentType::Hero, "<section"),
            (ComponentType::Cta, "<section"),
        ];

        for (component_type, expected) in cases {
            let markup = render(&[Component::new("n", component_type)]);
            assert!(
                markup.starts_with(expected),
                "{:?} should render as {}",
                component_type,
                expected
            );
        }
    }

    #[test]
    fn test_heading_level_attribute() {
        let markup = render(&[Component::new("h", ComponentType::Heading)
            .with_attribute("level", "3")
            .with_content("Title")]);
        assert!(markup.starts_with("<h3"));
        assert!(markup.ends_with("</h3>"));
        // Consumed by the tag choice, not re-emitted.
        assert!(!markup.contains("level="));
    }

    #[test]
    fn test_heading_level_defaults_and_clamps() {
        let markup = render(&[Component::new("h", ComponentType::Heading)]);
        assert!(markup.starts_with("<h2"));

        let markup = render(&[
            Component::new("h", ComponentType::Heading).with_attribute("level", "9")
        ]);
        assert!(markup.starts_with("<h6"));

        let markup = render(&[
            Component::new("h", ComponentType::Heading).with_attribute("level", "banana")
        ]);
        assert!(markup.starts_with("<h2"));
    }

    #[test]
    fn test_link_href_defaults() {
        let markup = render(&[Component::new("l", ComponentType::Link).with_content("Go")]);
        assert!(markup.contains("href=\"#\""));

        let markup = render(&[Component::new("l", ComponentType::Link)
            .with_attribute("href", "/about")
            .with_content("About")]);
        assert!(markup.contains("href=\"/about\""));
        // The explicit href must not be emitted twice.
        assert_eq!(markup.matches("href=").count(), 1);
    }

    #[test]
    fn test_image_is_void() {
        let markup = render(&[Component::new("i", ComponentType::Image)
            .with_attribute("src", "/hero.png")
            .with_attribute("alt", "Hero")]);

        assert!(markup.contains("src=\"/hero.png\""));
        assert!(markup.contains("alt=\"Hero\""));
        assert!(!markup.contains("</img>"));
    }

    #[test]
    fn test_nested_indentation() {
        let tree = vec![Component::new("outer", ComponentType::Container).with_child(
            Component::new("inner", ComponentType::Text).with_content("Deep"),
        )];
        let markup = render(&tree);
        let lines: Vec<&str> = markup.lines().collect();

        assert_eq!(lines[0], "<div id=\"outer\">");
        assert!(lines[1].starts_with("  <p id=\"inner\">"));
        assert_eq!(*lines.last().unwrap(), "</div>");
    }

    #[test]
    fn test_unknown_type_skipped_siblings_in_order() {
        let tree = vec![
            Component::new("first", ComponentType::Text).with_content("One"),
            Component::new("mystery", ComponentType::Unknown).with_content("Never"),
            Component::new("last", ComponentType::Text).with_content("Two"),
        ];
        let markup = render(&tree);

        assert!(!markup.contains("mystery"));
        assert!(!markup.contains("Never"));
        let first = markup.find("first").unwrap();
        let last = markup.find("last").unwrap();
        assert!(first < last);
    }

    #[test]
    fn test_unknown_type_drops_subtree() {
        let tree = vec![Component::new("mystery", ComponentType::Unknown)
            .with_child(Component::new("child", ComponentType::Text).with_content("Hidden"))];
        assert_eq!(render(&tree), "");
    }

    #[test]
    fn test_content_before_children() {
        let tree = vec![Component::new("c", ComponentType::Container)
            .with_content("Lead-in")
            .with_child(Component::new("t", ComponentType::Text).with_content("Body"))];
        let markup = render(&tree);

        let content = markup.find("Lead-in").unwrap();
        let child = markup.find("Body").unwrap();
        assert!(content < child);
    }

    #[test]
    fn test_content_is_raw() {
        let tree = vec![
            Component::new("t", ComponentType::Text).with_content("<strong>Bold</strong>")
        ];
        let markup = render(&tree);
        assert!(markup.contains("<strong>Bold</strong>"));
    }
}
