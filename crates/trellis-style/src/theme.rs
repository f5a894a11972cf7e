//! CSS reset and theme-variable blocks.

use trellis_core::ThemeVariables;

/// Fixed reset emitted at the top of every stylesheet.
pub(crate) const RESET_CSS: &str = "\
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  line-height: 1.6;
  color: #1f2937;
}

img {
  max-width: 100%;
  display: block;
}

a {
  color: inherit;
  text-decoration: none;
}
";

/// Emit the `:root` block for a theme-variable map.
///
/// Variable names get a `--` prefix unless the author already wrote one.
pub(crate) fn theme_block(variables: &ThemeVariables) -> String {
    let mut lines = vec![":root {".to_string()];
    for (name, value) in variables {
        let name = if name.starts_with("--") {
            name.clone()
        } else {
            format!("--{}", name)
        };
        lines.push(format!("  {}: {};", name, value));
    }
    lines.push("}".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_block_prefixes_names() {
        let mut variables = ThemeVariables::new();
        variables.insert("primary".to_string(), "#3b82f6".to_string());
        variables.insert("--radius".to_string(), "8px".to_string());

        let block = theme_block(&variables);
        assert_eq!(
            block,
            ":root {\n  --primary: #3b82f6;\n  --radius: 8px;\n}"
        );
    }

    #[test]
    fn test_reset_has_no_trailing_blank_lines() {
        assert!(!RESET_CSS.trim_end().is_empty());
        assert!(RESET_CSS.ends_with("}\n"));
    }
}
