//! Per-node style rule aggregation.

use convert_case::{Case, Casing};
use tracing::debug;
use trellis_core::{Component, ComponentType};

/// Emit one `#<id>` rule block per node with non-empty base styles,
/// depth-first pre-order, blocks joined by blank lines.
pub(crate) fn compile_rules(tree: &[Component]) -> String {
    let mut blocks = Vec::new();
    for node in tree {
        collect_rules(node, &mut blocks);
    }
    blocks.join("\n\n")
}

fn collect_rules(node: &Component, blocks: &mut Vec<String>) {
    if node.component_type == ComponentType::Unknown {
        // Unknown nodes render no markup, so styling their subtree is moot.
        debug!(id = %node.id, "skipping styles for node with unknown type");
        return;
    }
    if !node.styles.base.is_empty() {
        blocks.push(node_rule(node));
    }
    for child in &node.children {
        collect_rules(child, blocks);
    }
}

fn node_rule(node: &Component) -> String {
    let mut lines = vec![format!("#{} {{", node.id)];
    for (property, value) in &node.styles.base {
        lines.push(format!("  {}: {};", css_property_name(property), value));
    }
    lines.push("}".to_string());
    lines.join("\n")
}

/// Convert an authored camelCase property name to its CSS form.
///
/// Names already containing a hyphen (kebab-cased by hand, or custom
/// properties like `--primary`) pass through untouched.
pub(crate) fn css_property_name(name: &str) -> String {
    if name.contains('-') {
        return name.to_string();
    }
    name.to_case(Case::Kebab)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_rule_shape() {
        let node = Component::new("a1", ComponentType::Text)
            .with_style("color", "red")
            .with_style("fontSize", "18px");
        assert_eq!(node_rule(&node), "#a1 {\n  color: red;\n  font-size: 18px;\n}");
    }

    #[test]
    fn test_css_property_name() {
        assert_eq!(css_property_name("backgroundColor"), "background-color");
        assert_eq!(css_property_name("color"), "color");
        assert_eq!(css_property_name("border-radius"), "border-radius");
        assert_eq!(css_property_name("--primary"), "--primary");
    }

    #[test]
    fn test_nodes_without_styles_skipped() {
        let tree = vec![Component::new("bare", ComponentType::Container)
            .with_child(Component::new("styled", ComponentType::Text).with_style("color", "red"))];
        let css = compile_rules(&tree);

        assert!(!css.contains("#bare"));
        assert!(css.contains("#styled"));
    }

    #[test]
    fn test_rules_in_preorder() {
        let tree = vec![Component::new("parent", ComponentType::Container)
            .with_style("display", "grid")
            .with_child(Component::new("child", ComponentType::Text).with_style("color", "red"))];
        let css = compile_rules(&tree);

        assert!(css.find("#parent").unwrap() < css.find("#child").unwrap());
    }
}
