//! Markup formatting: tokenize, then re-emit at canonical indentation.
//!
//! The tokenizer is quote-aware but deliberately not a full HTML parser: it
//! splits the input into doctype, comment, tag, text, and raw-content tokens
//! and preserves every tag's interior verbatim. Raw-content elements
//! (`script`, `style`, `pre`, `textarea`) keep their bodies untouched apart
//! from trimming blank edges, which is what makes repeated formatting stable.

use trellis_core::FormatError;

const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

const RAW_ELEMENTS: [&str; 4] = ["script", "style", "pre", "textarea"];

#[derive(Debug)]
enum Token {
    Doctype(String),
    Comment(String),
    Open {
        raw: String,
        void: bool,
        self_closing: bool,
    },
    Close {
        raw: String,
        void: bool,
    },
    Text(String),
    Raw {
        open: String,
        content: String,
        close: String,
    },
}

/// Format a markup fragment or document at two-space indentation.
pub(crate) fn format_markup(input: &str) -> Result<String, FormatError> {
    let tokens = tokenize(input)?;
    Ok(emit(&tokens))
}

fn tokenize(input: &str) -> Result<Vec<Token>, FormatError> {
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < input.len() {
        if input[i..].starts_with('<') {
            if input[i..].starts_with("<!--") {
                let end = input[i..]
                    .find("-->")
                    .ok_or(FormatError::UnterminatedComment { offset: i })?;
                tokens.push(Token::Comment(input[i..i + end + 3].to_string()));
                i += end + 3;
            } else if input[i..].starts_with("<!") {
                let end = find_tag_end(input, i)?;
                tokens.push(Token::Doctype(input[i..=end].to_string()));
                i = end + 1;
            } else {
                let end = find_tag_end(input, i)?;
                let raw = input[i..=end].to_string();
                let name = tag_name(&raw);
                let void = VOID_ELEMENTS.contains(&name.as_str());

                if raw.starts_with("</") {
                    tokens.push(Token::Close { raw, void });
                    i = end + 1;
                } else {
                    let self_closing = raw.ends_with("/>");
                    if RAW_ELEMENTS.contains(&name.as_str()) && !self_closing {
                        let close_start = find_raw_close(input, end + 1, &name).ok_or_else(|| {
                            FormatError::UnterminatedRawElement {
                                element: name.clone(),
                            }
                        })?;
                        let close_end = find_tag_end(input, close_start)?;
                        tokens.push(Token::Raw {
                            open: raw,
                            content: input[end + 1..close_start].to_string(),
                            close: input[close_start..=close_end].to_string(),
                        });
                        i = close_end + 1;
                    } else {
                        tokens.push(Token::Open {
                            raw,
                            void,
                            self_closing,
                        });
                        i = end + 1;
                    }
                }
            }
        } else {
            let next = input[i..].find('<').map(|o| i + o).unwrap_or(input.len());
            let collapsed = collapse_whitespace(&input[i..next]);
            if !collapsed.is_empty() {
                tokens.push(Token::Text(collapsed));
            }
            i = next;
        }
    }

    Ok(tokens)
}

fn emit(tokens: &[Token]) -> String {
    let mut writer = LineWriter::new();

    for token in tokens {
        match token {
            Token::Doctype(raw) | Token::Comment(raw) => writer.line(raw),
            Token::Open {
                raw,
                void,
                self_closing,
            } => {
                writer.line(raw);
                if !void && !self_closing {
                    writer.indent();
                }
            }
            Token::Close { raw, void } => {
                // A stray close of a void element never opened a level.
                if !void {
                    writer.dedent();
                }
                writer.line(raw);
            }
            Token::Text(text) => writer.line(text),
            Token::Raw {
                open,
                content,
                close,
            } => {
                writer.line(open);
                let body = content.trim();
                if !body.is_empty() {
                    writer.verbatim(body);
                }
                writer.line(close);
            }
        }
    }

    writer.finish()
}

/// Line-oriented output buffer with an indentation level.
struct LineWriter {
    out: String,
    depth: usize,
}

impl LineWriter {
    fn new() -> Self {
        Self {
            out: String::new(),
            depth: 0,
        }
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// Append a multi-line chunk without reindenting its interior.
    fn verbatim(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn finish(self) -> String {
        self.out
    }
}

// Helper functions

/// Byte index of the `>` closing the tag that starts at `start`, skipping
/// quoted attribute values.
fn find_tag_end(input: &str, start: usize) -> Result<usize, FormatError> {
    let bytes = input.as_bytes();
    let mut quote: Option<u8> = None;
    let mut i = start + 1;

    while i < bytes.len() {
        match (quote, bytes[i]) {
            (Some(q), b) if b == q => quote = None,
            (Some(_), _) => {}
            (None, b'"') => quote = Some(b'"'),
            (None, b'\'') => quote = Some(b'\''),
            (None, b'>') => return Ok(i),
            (None, _) => {}
        }
        i += 1;
    }

    Err(FormatError::UnterminatedTag { offset: start })
}

/// Start of the first `</name` at or after `from`, ASCII-case-insensitive.
fn find_raw_close(input: &str, from: usize, name: &str) -> Option<usize> {
    let needle = format!("</{}", name);
    let bytes = input.as_bytes();
    let needle_bytes = needle.as_bytes();
    let mut i = from;

    while i + needle_bytes.len() <= bytes.len() {
        if bytes[i..i + needle_bytes.len()].eq_ignore_ascii_case(needle_bytes) {
            return Some(i);
        }
        i += 1;
    }
    None
}

fn tag_name(raw: &str) -> String {
    raw.trim_start_matches('<')
        .trim_start_matches('/')
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect::<String>()
        .to_ascii_lowercase()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<&str>>().join(" ")
}
