//! Generation and export option records.
//!
//! Theme variables and the global custom-code bundle are plain fields here
//! rather than live store lookups: the generation pipeline stays a pure
//! function of its tree-and-options input, and the caller resolves whatever
//! providers it has before building the options.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Theme custom-property map, variable name to value.
///
/// Names may be written with or without the `--` prefix; the style compiler
/// normalizes them when emitting the `:root` block.
pub type ThemeVariables = IndexMap<String, String>;

/// Options for a generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateOptions {
    /// Emit a `:root` block of theme custom properties.
    pub include_theme: bool,
    /// Theme custom properties, used only when `include_theme` is set.
    pub theme_variables: ThemeVariables,
    /// Site-wide custom code appended after all per-node output.
    pub global_custom_code: GlobalCustomCode,
}

/// Site-wide custom code, applied outside any node scope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalCustomCode {
    /// Appended to the stylesheet last, unscoped.
    #[serde(default)]
    pub css: Option<String>,
    /// Appended to the behavior script last.
    #[serde(default)]
    pub javascript: Option<String>,
    /// Injected into the document head verbatim.
    #[serde(rename = "headHTML", default)]
    pub head_html: Option<String>,
}

/// Options for an export run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportOptions {
    /// Generation options for the pipeline run inside the export.
    #[serde(flatten)]
    pub generate: GenerateOptions,
    /// Include project scaffolding (manifest, readme, ignore file, platform
    /// descriptor) alongside the site files.
    pub include_config: bool,
    /// Deploy target the scaffolding is written for.
    pub platform: DeployPlatform,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            generate: GenerateOptions::default(),
            include_config: true,
            platform: DeployPlatform::Static,
        }
    }
}

/// Deploy target for exported scaffolding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeployPlatform {
    Vercel,
    Netlify,
    Static,
}

impl Default for DeployPlatform {
    fn default() -> Self {
        Self::Static
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_options_default() {
        let opts = GenerateOptions::default();
        assert!(!opts.include_theme);
        assert!(opts.theme_variables.is_empty());
        assert!(opts.global_custom_code.css.is_none());
    }

    #[test]
    fn test_export_options_default() {
        let opts = ExportOptions::default();
        assert!(opts.include_config);
        assert_eq!(opts.platform, DeployPlatform::Static);
    }

    #[test]
    fn test_export_options_flattened_json() {
        let json = r##"{
            "includeTheme": true,
            "themeVariables": { "primary": "#3b82f6" },
            "includeConfig": true,
            "platform": "netlify"
        }"##;

        let opts: ExportOptions = serde_json::from_str(json).unwrap();
        assert!(opts.generate.include_theme);
        assert_eq!(
            opts.generate.theme_variables.get("primary").map(String::as_str),
            Some("#3b82f6")
        );
        assert_eq!(opts.platform, DeployPlatform::Netlify);
    }

    #[test]
    fn test_head_html_wire_name() {
        let json = r#"{ "headHTML": "<link rel=\"preconnect\" href=\"https://fonts.gstatic.com\">" }"#;
        let code: GlobalCustomCode = serde_json::from_str(json).unwrap();
        assert!(code.head_html.is_some());
    }
}
