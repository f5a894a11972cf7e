//! Animation and custom-code attachments.

use crate::component::PropertyMap;
use serde::{Deserialize, Serialize};

/// An animation attached to a node.
///
/// When `timeline` is empty the animation body comes from the preset library,
/// keyed by `name`; otherwise the timeline keyframes are compiled directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
    /// Unique id; the emitted keyframe block is named `animation-<id>`.
    pub id: String,
    /// Preset key (e.g. "Fade In") or a free label for timeline animations.
    #[serde(default)]
    pub name: String,
    /// Runtime condition that activates the animation.
    #[serde(default)]
    pub trigger: AnimationTrigger,
    /// Author-supplied keyframes; empty means "use the preset named above".
    #[serde(default)]
    pub timeline: Vec<Keyframe>,
    /// Timing parameters.
    #[serde(default)]
    pub options: AnimationOptions,
}

impl Animation {
    /// Create a preset animation (empty timeline).
    pub fn new(id: impl Into<String>, name: impl Into<String>, trigger: AnimationTrigger) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            trigger,
            timeline: Vec::new(),
            options: AnimationOptions::default(),
        }
    }

    /// Set the timing options.
    pub fn with_options(mut self, options: AnimationOptions) -> Self {
        self.options = options;
        self
    }

    /// Append a timeline keyframe.
    pub fn with_keyframe(mut self, keyframe: Keyframe) -> Self {
        self.timeline.push(keyframe);
        self
    }
}

/// Runtime condition that activates an animation.
///
/// Unrecognized trigger strings deserialize to [`AnimationTrigger::Unknown`],
/// which produces no trigger rule (the keyframes are still emitted, inert).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimationTrigger {
    OnLoad,
    OnHover,
    OnScroll,
    OnClick,
    Continuous,
    #[serde(other)]
    Unknown,
}

impl Default for AnimationTrigger {
    fn default() -> Self {
        Self::OnLoad
    }
}

/// One entry in an author-supplied animation timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keyframe {
    /// Position in the animation, 0.0 to 1.0.
    pub time: f64,
    /// Declarations at this keyframe, camelCase property name to value.
    #[serde(default)]
    pub properties: PropertyMap,
}

impl Keyframe {
    /// Create a keyframe at the given position.
    pub fn at(time: f64) -> Self {
        Self {
            time,
            properties: PropertyMap::new(),
        }
    }

    /// Add a declaration (camelCase property name).
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }
}

/// Timing parameters for an animation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnimationOptions {
    /// Duration in milliseconds.
    pub duration: u32,
    /// Delay in milliseconds.
    pub delay: u32,
    /// CSS easing function name.
    pub easing: String,
    /// Whether the animation repeats indefinitely.
    #[serde(rename = "loop")]
    pub looped: bool,
    /// CSS animation direction; `normal` when unset.
    pub direction: Option<String>,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            duration: 1000,
            delay: 0,
            easing: "ease".to_string(),
            looped: false,
            direction: None,
        }
    }
}

/// Behavior snippets scoped to one node.
///
/// All fields are raw author-supplied code. The synthesizer wraps them in a
/// guarded block anchored to the node's id; the `css` field is handled by the
/// style compiler instead (scoped by selector rewriting).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomCode {
    /// Runs before any listeners are attached.
    #[serde(default)]
    pub before_mount: Option<String>,
    /// Runs once the element has been located.
    #[serde(default)]
    pub on_mount: Option<String>,
    /// Body of a `click` listener.
    #[serde(default)]
    pub on_click: Option<String>,
    /// Body of a `mouseenter` listener.
    #[serde(default)]
    pub on_hover: Option<String>,
    /// Runs while the element is visible, on every scroll tick.
    #[serde(default)]
    pub on_scroll: Option<String>,
    /// Free-form script appended after the listeners.
    #[serde(default)]
    pub javascript: Option<String>,
    /// Stylesheet fragment scoped to this node by the style compiler.
    #[serde(default)]
    pub css: Option<String>,
}

impl CustomCode {
    /// Whether any script-producing field is non-empty.
    ///
    /// `css` does not count: it contributes to the stylesheet, not the script,
    /// and must not force an empty script block into the document.
    pub fn has_script(&self) -> bool {
        [
            &self.before_mount,
            &self.on_mount,
            &self.on_click,
            &self.on_hover,
            &self.on_scroll,
            &self.javascript,
        ]
        .iter()
        .any(|snippet| matches!(snippet, Some(s) if !s.trim().is_empty()))
    }
}
