//! Behavior script synthesis for Trellis component trees.
//!
//! Two kinds of output, in order: one guarded, self-contained block per node
//! with custom code, then tree-wide runtime helpers (scroll-animation
//! observer, click-animation reset) that are only emitted when an animation
//! anywhere in the tree needs them. Nodes with nothing actionable emit
//! nothing at all.
//!
//! Node type is irrelevant here: even nodes the markup renderer skipped get
//! their blocks, because every block starts with an element-existence guard
//! and no-ops when its anchor is absent.

mod node_code;
mod runtime;

use trellis_core::{preorder, Component};

/// Synthesize the behavior script for a forest of components.
///
/// Returns an empty string when no node has custom code and no animation
/// needs runtime support.
pub fn synthesize(tree: &[Component]) -> String {
    let mut blocks = Vec::new();

    for node in preorder(tree) {
        if let Some(block) = node_code::node_block(node) {
            blocks.push(block);
        }
    }

    if let Some(observer) = runtime::scroll_observer(tree) {
        blocks.push(observer);
    }
    if let Some(reset) = runtime::click_reset(tree) {
        blocks.push(reset);
    }

    blocks.join("\n\n")
}
