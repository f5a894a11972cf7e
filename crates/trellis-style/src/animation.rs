//! Animation-to-keyframe compilation.
//!
//! Animations are collected from the whole tree (pre-order, duplicates
//! allowed, node type irrelevant) and compiled in two passes: first one
//! keyframe block per animation, then one trigger rule per animation binding
//! the keyframes to a selector derived from the trigger.

use crate::presets::preset_body;
use crate::rules::css_property_name;
use tracing::debug;
use trellis_core::{preorder, Animation, AnimationTrigger, Component, Keyframe};

/// Compile all animation CSS for a forest of components.
pub fn compile_animations(tree: &[Component]) -> String {
    let collected: Vec<(&Component, &Animation)> = preorder(tree)
        .flat_map(|node| node.props.animations.iter().map(move |animation| (node, animation)))
        .collect();

    if collected.is_empty() {
        return String::new();
    }

    let mut lines = Vec::new();
    for (_, animation) in &collected {
        lines.push(keyframe_block(animation));
    }
    for (node, animation) in &collected {
        if let Some(rule) = trigger_rule(&node.id, animation) {
            lines.push(rule);
        }
    }
    lines.join("\n")
}

/// Emit the `@keyframes` block for one animation.
fn keyframe_block(animation: &Animation) -> String {
    let body = if animation.timeline.is_empty() {
        preset_body(&animation.name).to_string()
    } else {
        timeline_body(&animation.timeline)
    };
    format!("@keyframes animation-{} {{ {} }}", animation.id, body)
}

/// Render an author-supplied timeline as keyframe entries.
///
/// Each entry lands at `time * 100` percent with its declarations joined by
/// `; `, property names converted camelCase to kebab-case.
fn timeline_body(timeline: &[Keyframe]) -> String {
    let entries: Vec<String> = timeline
        .iter()
        .map(|keyframe| {
            let declarations: Vec<String> = keyframe
                .properties
                .iter()
                .map(|(property, value)| format!("{}: {}", css_property_name(property), value))
                .collect();
            format!("{}% {{ {} }}", keyframe.time * 100.0, declarations.join("; "))
        })
        .collect();
    entries.join(" ")
}

/// Emit the rule binding an animation's keyframes to its trigger selector.
///
/// Unknown triggers produce no rule; the animation stays inert.
fn trigger_rule(node_id: &str, animation: &Animation) -> Option<String> {
    let selector = match animation.trigger {
        AnimationTrigger::OnLoad | AnimationTrigger::Continuous => format!("#{}", node_id),
        AnimationTrigger::OnHover => format!("#{}:hover", node_id),
        AnimationTrigger::OnScroll => format!("#{}.in-view", node_id),
        AnimationTrigger::OnClick => format!("#{}.clicked", node_id),
        AnimationTrigger::Unknown => {
            debug!(id = %node_id, animation = %animation.id, "skipping animation with unknown trigger");
            return None;
        }
    };

    let options = &animation.options;
    let iterations = if options.looped { "infinite" } else { "1" };
    let direction = options.direction.as_deref().unwrap_or("normal");
    Some(format!(
        "{} {{ animation: animation-{} {}ms {} {}ms {} {} both; }}",
        selector, animation.id, options.duration, options.easing, options.delay, iterations, direction
    ))
}
