//! The fixed document template.

/// Merge generated outputs into one complete HTML document.
///
/// The shape is fixed: head with charset and viewport metas, escaped title
/// and description, the embedded stylesheet, then any raw head injection;
/// body with the markup and, only when script content exists, an embedded
/// script block.
pub fn assemble(
    markup: &str,
    stylesheet: &str,
    script: Option<&str>,
    head_injection: Option<&str>,
    title: &str,
    description: &str,
) -> String {
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n");
    out.push_str("<html lang=\"en\">\n");
    out.push_str("<head>\n");
    out.push_str("  <meta charset=\"UTF-8\">\n");
    out.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    out.push_str("  <title>");
    out.push_str(&escape_text(title));
    out.push_str("</title>\n");
    out.push_str("  <meta name=\"description\" content=\"");
    out.push_str(&escape_text(description));
    out.push_str("\">\n");
    out.push_str("  <style>\n");
    push_block(&mut out, stylesheet);
    out.push_str("  </style>\n");
    if let Some(head) = head_injection.filter(|h| !h.trim().is_empty()) {
        push_block(&mut out, head.trim());
    }
    out.push_str("</head>\n");
    out.push_str("<body>\n");
    push_block(&mut out, markup);
    if let Some(script) = script.filter(|s| !s.trim().is_empty()) {
        out.push_str("  <script>\n");
        push_block(&mut out, script);
        out.push_str("  </script>\n");
    }
    out.push_str("</body>\n");
    out.push_str("</html>\n");

    out
}

/// Append a text block, guaranteeing exactly one trailing newline.
fn push_block(out: &mut String, block: &str) {
    out.push_str(block.trim_end_matches('\n'));
    out.push('\n');
}

/// Escape text destined for the title and description slots.
fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
