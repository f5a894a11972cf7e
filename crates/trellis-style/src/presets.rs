//! Built-in animation preset library.
//!
//! Presets are fixed keyframe bodies keyed by display name. An animation with
//! an empty timeline uses the preset named by its `name`; unrecognized names
//! fall back to "Fade In".

/// The preset table: display name to keyframe body.
pub const PRESETS: [(&str, &str); 11] = [
    ("Fade In", "from { opacity: 0; } to { opacity: 1; }"),
    (
        "Slide In Left",
        "from { transform: translateX(-100px); opacity: 0; } to { transform: translateX(0); opacity: 1; }",
    ),
    (
        "Slide In Right",
        "from { transform: translateX(100px); opacity: 0; } to { transform: translateX(0); opacity: 1; }",
    ),
    (
        "Slide In Top",
        "from { transform: translateY(-100px); opacity: 0; } to { transform: translateY(0); opacity: 1; }",
    ),
    (
        "Slide In Bottom",
        "from { transform: translateY(100px); opacity: 0; } to { transform: translateY(0); opacity: 1; }",
    ),
    (
        "Scale In",
        "from { transform: scale(0); opacity: 0; } to { transform: scale(1); opacity: 1; }",
    ),
    (
        "Bounce In",
        "0% { transform: scale(0.3); opacity: 0; } 50% { transform: scale(1.05); } 70% { transform: scale(0.9); } 100% { transform: scale(1); opacity: 1; }",
    ),
    (
        "Pulse",
        "0% { transform: scale(1); } 50% { transform: scale(1.05); } 100% { transform: scale(1); }",
    ),
    (
        "Shake",
        "0%, 100% { transform: translateX(0); } 10%, 30%, 50%, 70%, 90% { transform: translateX(-10px); } 20%, 40%, 60%, 80% { transform: translateX(10px); }",
    ),
    (
        "Float",
        "0%, 100% { transform: translateY(0); } 50% { transform: translateY(-20px); }",
    ),
    ("Spin", "from { transform: rotate(0deg); } to { transform: rotate(360deg); }"),
];

/// Look up a preset body by name, falling back to "Fade In".
pub fn preset_body(name: &str) -> &'static str {
    PRESETS
        .iter()
        .find(|(preset_name, _)| *preset_name == name)
        .map(|(_, body)| *body)
        .unwrap_or(PRESETS[0].1)
}

/// Names of all built-in presets, in table order.
pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|(name, _)| *name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_lookup() {
        assert_eq!(preset_body("Fade In"), "from { opacity: 0; } to { opacity: 1; }");
        assert_eq!(
            preset_body("Spin"),
            "from { transform: rotate(0deg); } to { transform: rotate(360deg); }"
        );
    }

    #[test]
    fn test_unknown_preset_falls_back_to_fade_in() {
        assert_eq!(preset_body("Teleport"), preset_body("Fade In"));
        assert_eq!(preset_body(""), preset_body("Fade In"));
    }

    #[test]
    fn test_eleven_presets() {
        let names = preset_names();
        assert_eq!(names.len(), 11);
        for expected in [
            "Fade In",
            "Slide In Left",
            "Slide In Right",
            "Slide In Top",
            "Slide In Bottom",
            "Scale In",
            "Bounce In",
            "Pulse",
            "Shake",
            "Float",
            "Spin",
        ] {
            assert!(names.contains(&expected), "missing preset {}", expected);
        }
    }

    #[test]
    fn test_preset_bodies_are_balanced() {
        for (name, body) in PRESETS {
            assert_eq!(
                body.matches('{').count(),
                body.matches('}').count(),
                "unbalanced braces in preset {}",
                name
            );
        }
    }
}
