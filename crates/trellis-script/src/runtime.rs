//! Tree-wide runtime helpers for animation triggers.
//!
//! Emitted once per page, each only when some animation in the tree needs it.
//! Flagged element ids (and click durations) are resolved at generation time
//! and baked into the script as literals.

use trellis_core::{preorder, AnimationTrigger, Component};

/// Shared observer that adds `in-view` to scroll-flagged elements on first
/// intersection at half visibility, then stops watching them.
pub(crate) fn scroll_observer(tree: &[Component]) -> Option<String> {
    let ids: Vec<&str> = preorder(tree)
        .filter(|node| {
            node.props
                .animations
                .iter()
                .any(|animation| animation.trigger == AnimationTrigger::OnScroll)
        })
        .map(|node| node.id.as_str())
        .collect();

    if ids.is_empty() {
        return None;
    }

    let id_list = ids
        .iter()
        .map(|id| format!("'{}'", id))
        .collect::<Vec<String>>()
        .join(", ");

    let lines = vec![
        "// Scroll-triggered animations".to_string(),
        "document.addEventListener('DOMContentLoaded', () => {".to_string(),
        "  const observer = new IntersectionObserver((entries) => {".to_string(),
        "    entries.forEach((entry) => {".to_string(),
        "      if (entry.isIntersecting) {".to_string(),
        "        entry.target.classList.add('in-view');".to_string(),
        "        observer.unobserve(entry.target);".to_string(),
        "      }".to_string(),
        "    });".to_string(),
        "  }, { threshold: 0.5 });".to_string(),
        format!("  [{}].forEach((id) => {{", id_list),
        "    const el = document.getElementById(id);".to_string(),
        "    if (el) observer.observe(el);".to_string(),
        "  });".to_string(),
        "});".to_string(),
    ];

    Some(lines.join("\n"))
}

/// Shared click handler that re-triggers the `clicked` class on flagged
/// elements: remove, force reflow, re-add, then remove again once the
/// animation's declared duration has elapsed.
pub(crate) fn click_reset(tree: &[Component]) -> Option<String> {
    let targets: Vec<(String, u32)> = preorder(tree)
        .filter_map(|node| {
            let duration = node
                .props
                .animations
                .iter()
                .filter(|animation| animation.trigger == AnimationTrigger::OnClick)
                .map(|animation| animation.options.duration)
                .max()?;
            Some((node.id.clone(), duration))
        })
        .collect();

    if targets.is_empty() {
        return None;
    }

    let mut lines = vec![
        "// Click-triggered animations".to_string(),
        "document.addEventListener('DOMContentLoaded', () => {".to_string(),
        "  const bindClickAnimation = (id, duration) => {".to_string(),
        "    const el = document.getElementById(id);".to_string(),
        "    if (!el) return;".to_string(),
        "    el.addEventListener('click', () => {".to_string(),
        "      el.classList.remove('clicked');".to_string(),
        "      void el.offsetWidth;".to_string(),
        "      el.classList.add('clicked');".to_string(),
        "      setTimeout(() => el.classList.remove('clicked'), duration);".to_string(),
        "    });".to_string(),
        "  };".to_string(),
    ];
    for (id, duration) in &targets {
        lines.push(format!("  bindClickAnimation('{}', {});", id, duration));
    }
    lines.push("});".to_string());

    Some(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::{Animation, ComponentType};

    #[test]
    fn test_observer_lists_all_flagged_ids() {
        let tree = vec![
            Component::new("a", ComponentType::Section).with_animation(Animation::new(
                "k1",
                "Fade In",
                AnimationTrigger::OnScroll,
            )),
            Component::new("b", ComponentType::Section),
            Component::new("c", ComponentType::Section).with_animation(Animation::new(
                "k2",
                "Slide In Left",
                AnimationTrigger::OnScroll,
            )),
        ];

        let script = scroll_observer(&tree).unwrap();
        assert!(script.contains("['a', 'c'].forEach((id) => {"));
        assert!(script.contains("observer.unobserve(entry.target);"));
    }

    #[test]
    fn test_observer_none_without_scroll_triggers() {
        let tree = vec![Component::new("a", ComponentType::Section).with_animation(
            Animation::new("k1", "Fade In", AnimationTrigger::OnHover),
        )];
        assert!(scroll_observer(&tree).is_none());
    }

    #[test]
    fn test_click_reset_forces_reflow_between_toggles() {
        let tree = vec![Component::new("b", ComponentType::Button).with_animation(
            Animation::new("k1", "Shake", AnimationTrigger::OnClick),
        )];
        let script = click_reset(&tree).unwrap();

        let remove = script.find("classList.remove('clicked');").unwrap();
        let reflow = script.find("void el.offsetWidth;").unwrap();
        let add = script.find("classList.add('clicked');").unwrap();
        assert!(remove < reflow);
        assert!(reflow < add);
    }

    #[test]
    fn test_click_reset_none_without_click_triggers() {
        assert!(click_reset(&[]).is_none());
        let tree = vec![Component::new("a", ComponentType::Section).with_animation(
            Animation::new("k1", "Fade In", AnimationTrigger::OnScroll),
        )];
        assert!(click_reset(&tree).is_none());
    }
}
