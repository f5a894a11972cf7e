//! Component tree node types.
//!
//! A page is a list of root [`Component`]s. Every generation stage consumes the
//! same immutable tree; nothing in this crate mutates it.

use crate::animation::{Animation, CustomCode};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Mapping of CSS property name (camelCase, as authored) to string value.
///
/// Insertion order is preserved so repeated generation runs produce
/// byte-identical output.
pub type PropertyMap = IndexMap<String, String>;

/// One node in the declarative component tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    /// Stable unique id, assigned at creation and never reused. Doubles as the
    /// DOM anchor, CSS selector, and script anchor for this node.
    pub id: String,
    /// Which markup/style generator applies.
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    /// Human label shown in the editor; no semantic effect on output.
    #[serde(default)]
    pub display_name: String,
    /// Content, attributes, animations, and custom code.
    #[serde(default)]
    pub props: Props,
    /// Base styles plus named variants.
    #[serde(default)]
    pub styles: ComponentStyles,
    /// Ordered child nodes.
    #[serde(default)]
    pub children: Vec<Component>,
}

impl Component {
    /// Create a node with the given id and type.
    pub fn new(id: impl Into<String>, component_type: ComponentType) -> Self {
        Self {
            id: id.into(),
            component_type,
            display_name: String::new(),
            props: Props::default(),
            styles: ComponentStyles::default(),
            children: Vec::new(),
        }
    }

    /// Set the display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    /// Set the text/markup content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.props.content = Some(content.into());
        self
    }

    /// Add an HTML attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.props.attributes.insert(name.into(), value.into());
        self
    }

    /// Add a base style declaration (camelCase property name).
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.base.insert(property.into(), value.into());
        self
    }

    /// Append a child node.
    pub fn with_child(mut self, child: Component) -> Self {
        self.children.push(child);
        self
    }

    /// Attach an animation.
    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.props.animations.push(animation);
        self
    }

    /// Attach custom code.
    pub fn with_custom_code(mut self, code: CustomCode) -> Self {
        self.props.custom_code = Some(code);
        self
    }
}

/// The closed set of node types the generators know how to render.
///
/// Tags outside this set deserialize to [`ComponentType::Unknown`]; the markup
/// and style stages skip such nodes rather than failing the whole generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    Container,
    Text,
    Heading,
    Image,
    Link,
    Button,
    Navigation,
    Footer,
    Section,
    Grid,
    Flex,
    Hero,
    Cta,
    /// Any tag not in the closed set above.
    #[serde(other)]
    Unknown,
}

/// Per-node properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Props {
    /// Raw inner content. Inserted into the markup as-is; the editor is
    /// allowed to author markup-capable content here.
    #[serde(default)]
    pub content: Option<String>,
    /// HTML attributes, in authored order.
    #[serde(default)]
    pub attributes: IndexMap<String, String>,
    /// Animations attached to this node.
    #[serde(default)]
    pub animations: Vec<Animation>,
    /// Behavior snippets scoped to this node.
    #[serde(default)]
    pub custom_code: Option<CustomCode>,
}

/// Styles for a node: a base property map plus named variants.
///
/// Only `base` is compiled into the stylesheet. Variants are editor state
/// (hover previews, breakpoint drafts) that round-trip through serialization
/// untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComponentStyles {
    /// Always-on declarations, camelCase property name to value.
    #[serde(default)]
    pub base: PropertyMap,
    /// Named variant maps, keyed by variant name.
    #[serde(flatten)]
    pub variants: IndexMap<String, PropertyMap>,
}

/// Depth-first pre-order iterator over a forest of components.
///
/// Uses an explicit stack rather than call-stack recursion, so arbitrarily
/// deep trees can be walked by collection passes. Yield order is exactly
/// document order.
pub struct Preorder<'a> {
    stack: Vec<&'a Component>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a Component;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Children pushed in reverse so the first child pops next.
        for child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}

/// Walk a forest of components depth-first, pre-order.
pub fn preorder(roots: &[Component]) -> Preorder<'_> {
    Preorder {
        stack: roots.iter().rev().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_builder() {
        let node = Component::new("a1", ComponentType::Text)
            .with_display_name("Intro")
            .with_content("Hi")
            .with_style("color", "red");

        assert_eq!(node.id, "a1");
        assert_eq!(node.display_name, "Intro");
        assert_eq!(node.props.content.as_deref(), Some("Hi"));
        assert_eq!(node.styles.base.get("color").map(String::as_str), Some("red"));
    }

    #[test]
    fn test_preorder_is_document_order() {
        let tree = vec![
            Component::new("a", ComponentType::Container)
                .with_child(
                    Component::new("b", ComponentType::Container)
                        .with_child(Component::new("c", ComponentType::Text)),
                )
                .with_child(Component::new("d", ComponentType::Text)),
            Component::new("e", ComponentType::Section),
        ];

        let ids: Vec<&str> = preorder(&tree).map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_deserialize_editor_json() {
        let json = r#"{
            "id": "a1",
            "type": "text",
            "displayName": "Intro",
            "props": { "content": "Hi" },
            "styles": { "base": { "color": "red" } }
        }"#;

        let node: Component = serde_json::from_str(json).unwrap();
        assert_eq!(node.component_type, ComponentType::Text);
        assert_eq!(node.props.content.as_deref(), Some("Hi"));
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_unknown_type_deserializes() {
        let json = r#"{ "id": "x", "type": "unregistered-widget" }"#;
        let node: Component = serde_json::from_str(json).unwrap();
        assert_eq!(node.component_type, ComponentType::Unknown);
    }

    #[test]
    fn test_style_variants_flatten() {
        let json = r#"{
            "id": "a1",
            "type": "button",
            "styles": {
                "base": { "color": "white" },
                "hover": { "color": "gray" }
            }
        }"#;

        let node: Component = serde_json::from_str(json).unwrap();
        assert_eq!(node.styles.base.len(), 1);
        assert_eq!(
            node.styles.variants.get("hover").and_then(|v| v.get("color")).map(String::as_str),
            Some("gray")
        );
    }

    #[test]
    fn test_property_map_preserves_order() {
        let node = Component::new("a1", ComponentType::Container)
            .with_style("display", "flex")
            .with_style("alignItems", "center")
            .with_style("gap", "8px");

        let keys: Vec<&String> = node.styles.base.keys().collect();
        assert_eq!(keys, vec!["display", "alignItems", "gap"]);
    }
}
