//! The generation pipeline: one tree snapshot in, three text outputs out.

use serde::Serialize;
use tracing::debug;
use trellis_core::{Component, GenerateOptions};
use trellis_document::FormatKind;

/// Output of a generation run.
///
/// `html` and `css` are the formatted fragment outputs; `full_page` is the
/// assembled and formatted document with the behavior script embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSite {
    pub html: String,
    pub css: String,
    pub full_page: String,
}

/// Run every generation stage over one immutable tree snapshot.
///
/// Each stage is a pure function of the tree and options, so repeated calls
/// with the same inputs produce byte-identical output.
pub fn generate_site(
    tree: &[Component],
    project_name: &str,
    options: &GenerateOptions,
) -> GeneratedSite {
    let markup = trellis_markup::render(tree);
    let html = trellis_document::format(&markup, FormatKind::Markup);
    debug!(bytes = html.len(), "markup rendered");

    let stylesheet = trellis_style::compile(tree, options);
    let css = trellis_document::format(&stylesheet, FormatKind::Stylesheet);
    debug!(bytes = css.len(), "stylesheet compiled");

    let script = behavior_script(tree, options);

    let description = format!("{} — built with Trellis", project_name);
    let assembled = trellis_document::assemble(
        &html,
        &css,
        script.as_deref(),
        options.global_custom_code.head_html.as_deref(),
        project_name,
        &description,
    );
    let full_page = trellis_document::format(&assembled, FormatKind::Markup);
    debug!(bytes = full_page.len(), "document assembled");

    GeneratedSite {
        html,
        css,
        full_page,
    }
}

/// Synthesized behavior script plus any global custom JavaScript, or `None`
/// when the page needs no script block at all.
fn behavior_script(tree: &[Component], options: &GenerateOptions) -> Option<String> {
    let mut script = trellis_script::synthesize(tree);

    if let Some(global) = options.global_custom_code.javascript.as_deref() {
        if !global.trim().is_empty() {
            if !script.is_empty() {
                script.push_str("\n\n");
            }
            script.push_str("// Global custom code\n");
            script.push_str(global.trim());
        }
    }

    if script.trim().is_empty() {
        None
    } else {
        Some(script)
    }
}
