//! Stylesheet formatting: parse into a nested rule tree, then re-emit.
//!
//! The parser tracks quotes and parentheses so selectors like
//! `@media (max-width: 600px)` and values like `url(http://...)` survive
//! intact. Declarations are normalized to `property: value`, rules to
//! two-space indentation with one blank line between top-level blocks.

use trellis_core::FormatError;

#[derive(Debug)]
enum CssItem {
    Rule { selector: String, body: Vec<CssItem> },
    Declaration(String),
    Comment(String),
    /// Trailing text cut off mid-construct (open parenthesis or string).
    /// Emitted without a semicolon so reformatting cannot keep appending one.
    Fragment(String),
}

/// Format a stylesheet at two-space indentation.
pub(crate) fn format_stylesheet(input: &str) -> Result<String, FormatError> {
    let mut scanner = Scanner::new(input);
    let items = scanner.parse_items(true)?;

    let mut out = String::new();
    emit_items(&items, 0, &mut out);
    Ok(out)
}

struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    open_blocks: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            open_blocks: 0,
        }
    }

    /// Parse items until end of input (top level) or the closing brace of the
    /// current block.
    fn parse_items(&mut self, top_level: bool) -> Result<Vec<CssItem>, FormatError> {
        let mut items = Vec::new();
        let mut buf = String::new();
        let mut parens = 0usize;
        let mut dangling_string = false;

        while let Some(c) = self.peek() {
            if self.rest().starts_with("/*") {
                let raw = self.consume_comment()?;
                if buf.trim().is_empty() {
                    buf.clear();
                    items.push(CssItem::Comment(raw));
                } else {
                    buf.push_str(&raw);
                }
                continue;
            }

            match c {
                '"' | '\'' => {
                    if !self.consume_string(c, &mut buf) {
                        dangling_string = true;
                    }
                }
                '(' => {
                    parens += 1;
                    buf.push(c);
                    self.advance(c);
                }
                ')' => {
                    parens = parens.saturating_sub(1);
                    buf.push(c);
                    self.advance(c);
                }
                '{' if parens == 0 => {
                    let selector = collapse_whitespace(&buf);
                    buf.clear();
                    self.advance(c);
                    self.open_blocks += 1;
                    let body = self.parse_items(false)?;
                    items.push(CssItem::Rule { selector, body });
                }
                '}' if parens == 0 => {
                    if top_level {
                        return Err(FormatError::UnmatchedClosingBrace { offset: self.pos });
                    }
                    flush_declaration(&mut buf, &mut items);
                    self.advance(c);
                    self.open_blocks -= 1;
                    return Ok(items);
                }
                ';' if parens == 0 => {
                    flush_declaration(&mut buf, &mut items);
                    self.advance(c);
                }
                _ => {
                    buf.push(c);
                    self.advance(c);
                }
            }
        }

        if !top_level {
            return Err(FormatError::UnbalancedBraces {
                open: self.open_blocks,
            });
        }
        if parens > 0 || dangling_string {
            if !buf.trim().is_empty() {
                items.push(CssItem::Fragment(normalize_declaration(&buf)));
            }
        } else {
            flush_declaration(&mut buf, &mut items);
        }
        Ok(items)
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn rest(&self) -> &str {
        &self.input[self.pos..]
    }

    fn advance(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    fn consume_comment(&mut self) -> Result<String, FormatError> {
        let start = self.pos;
        let end = self.rest()
            .find("*/")
            .ok_or(FormatError::UnterminatedComment { offset: start })?;
        let raw = self.input[start..start + end + 2].to_string();
        self.pos = start + end + 2;
        Ok(raw)
    }

    /// Consume a quoted string into `buf`, honoring backslash escapes.
    /// Returns false if the string ran to end of input unterminated.
    fn consume_string(&mut self, quote: char, buf: &mut String) -> bool {
        buf.push(quote);
        self.advance(quote);
        while let Some(c) = self.peek() {
            buf.push(c);
            self.advance(c);
            if c == '\\' {
                if let Some(escaped) = self.peek() {
                    buf.push(escaped);
                    self.advance(escaped);
                }
            } else if c == quote {
                return true;
            }
        }
        false
    }
}

fn flush_declaration(buf: &mut String, items: &mut Vec<CssItem>) {
    if !buf.trim().is_empty() {
        items.push(CssItem::Declaration(normalize_declaration(buf)));
    }
    buf.clear();
}

/// Normalize a declaration to `property: value` spacing. Text without a
/// top-level colon (e.g. `@import url(...)`) is whitespace-collapsed as-is.
fn normalize_declaration(text: &str) -> String {
    let trimmed = text.trim();
    match top_level_colon(trimmed) {
        Some(index) => format!(
            "{}: {}",
            collapse_whitespace(&trimmed[..index]),
            collapse_whitespace(&trimmed[index + 1..])
        ),
        None => collapse_whitespace(trimmed),
    }
}

/// Byte index of the first `:` outside parentheses and quotes, if any.
fn top_level_colon(text: &str) -> Option<usize> {
    let mut parens = 0usize;
    let mut quote: Option<char> = None;

    for (index, c) in text.char_indices() {
        match (quote, c) {
            (Some(q), _) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"') | (None, '\'') => quote = Some(c),
            (None, '(') => parens += 1,
            (None, ')') => parens = parens.saturating_sub(1),
            (None, ':') if parens == 0 => return Some(index),
            (None, _) => {}
        }
    }
    None
}

fn emit_items(items: &[CssItem], depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);

    for (index, item) in items.iter().enumerate() {
        match item {
            CssItem::Comment(raw) => {
                out.push_str(&indent);
                out.push_str(raw);
                out.push('\n');
            }
            CssItem::Declaration(text) => {
                out.push_str(&indent);
                out.push_str(text);
                out.push_str(";\n");
            }
            CssItem::Fragment(text) => {
                out.push_str(&indent);
                out.push_str(text);
                out.push('\n');
            }
            CssItem::Rule { selector, body } => {
                out.push_str(&indent);
                out.push_str(selector);
                out.push_str(" {\n");
                emit_items(body, depth + 1, out);
                out.push_str(&indent);
                out.push_str("}\n");
                if depth == 0 && index + 1 < items.len() {
                    out.push('\n');
                }
            }
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<&str>>().join(" ")
}
