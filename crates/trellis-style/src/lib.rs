//! Stylesheet compilation for Trellis component trees.
//!
//! [`compile`] produces the whole stylesheet for a page in one pass, in a
//! fixed section order:
//!
//! 1. a CSS reset block (fixed, environment-independent)
//! 2. a `:root` block of theme custom properties, when requested
//! 3. animation keyframes and trigger rules
//! 4. per-node style rules, aggregated pre-order
//! 5. per-node custom CSS, scoped to its node by selector rewriting
//! 6. the global custom CSS block, unscoped, last
//!
//! Every section is a pure function of the tree-and-options snapshot, so
//! repeated runs produce byte-identical output.

pub mod animation;
pub mod presets;
mod rules;
mod scoped;
mod theme;

pub use scoped::scope_css;

use trellis_core::{Component, GenerateOptions};

/// Compile the stylesheet for a forest of components.
pub fn compile(tree: &[Component], options: &GenerateOptions) -> String {
    let mut sections = vec![theme::RESET_CSS.trim_end().to_string()];

    if options.include_theme && !options.theme_variables.is_empty() {
        sections.push(theme::theme_block(&options.theme_variables));
    }

    let animations = animation::compile_animations(tree);
    if !animations.is_empty() {
        sections.push(animations);
    }

    let node_rules = rules::compile_rules(tree);
    if !node_rules.is_empty() {
        sections.push(node_rules);
    }

    let scoped = scoped::compile_scoped_css(tree);
    if !scoped.is_empty() {
        sections.push(scoped);
    }

    if let Some(global) = options.global_custom_code.css.as_deref() {
        if !global.trim().is_empty() {
            sections.push(global.trim().to_string());
        }
    }

    let mut stylesheet = sections.join("\n\n");
    stylesheet.push('\n');
    stylesheet
}
