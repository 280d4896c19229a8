//! Scanner for raw XML text
//!
//! A single character-level pass over the input that reconstructs tag
//! structure without a DOM library. The scanner keeps an explicit lexical
//! mode instead of a set of boolean flags, so every transition is local to
//! the match below and the whole pass is re-runnable on any input.
//!
//! The five modes:
//!
//!     - Plain: between tags. Characters accumulate into a pending text
//!       buffer; newlines, carriage returns and tabs are dropped, and spaces
//!       are dropped while the buffer is still empty.
//!     - TagBody: inside `<...>`. Content accumulates verbatim until `>`,
//!       then gets classified as opening, closing or self-closing.
//!     - Header: inside an `<?...?>` XML declaration, discarded.
//!     - Comment: inside `<!--...-->`, discarded.
//!     - DocType: inside a `<!...>` doctype declaration, discarded.
//!
//! The scanner never aborts: malformed nesting is not its concern (the tree
//! builder tracks stack balance), and unterminated header/comment/doctype
//! regions simply swallow the rest of the input, as the source text gives us
//! nothing better to do with them.

/// Lexical mode of the scan position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Plain,
    TagBody,
    Header,
    Comment,
    DocType,
}

/// A structural event emitted by the scanner, in document order.
///
/// `OpenTag` and `SelfClosingTag` carry the raw tag content (attributes still
/// embedded, the trailing `/` of self-closing tags stripped). `Text` carries
/// pending inter-tag text and is always emitted before the structural event
/// that interrupted it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    OpenTag(String),
    SelfClosingTag(String),
    CloseTag,
    Text(String),
}

/// Scan the full input and return its structural events in document order.
pub fn scan(text: &str) -> Vec<ScanEvent> {
    let chars: Vec<char> = text.chars().collect();
    let mut events = Vec::new();
    let mut mode = Mode::Plain;
    let mut pending = String::new();
    let mut tag = String::new();

    for i in 0..chars.len() {
        let c = chars[i];
        match mode {
            Mode::Plain => {
                if c == '<' {
                    let lookahead = (
                        chars.get(i + 1).copied(),
                        chars.get(i + 2).copied(),
                        chars.get(i + 3).copied(),
                    );
                    match lookahead {
                        (Some('?'), _, _) => mode = Mode::Header,
                        (Some('!'), Some('-'), Some('-')) => mode = Mode::Comment,
                        (Some('!'), _, _) => mode = Mode::DocType,
                        _ => {
                            flush_text(&mut pending, &mut events);
                            tag.clear();
                            mode = Mode::TagBody;
                        }
                    }
                } else if c != '\n' && c != '\r' && c != '\t' && !(c == ' ' && pending.is_empty())
                {
                    pending.push(c);
                }
            }
            Mode::TagBody => {
                if c == '>' {
                    events.push(classify_tag(&tag));
                    tag.clear();
                    mode = Mode::Plain;
                } else {
                    tag.push(c);
                }
            }
            Mode::Header => {
                // the declaration body is discarded, only the `?>` matters
                if c == '>' && i >= 1 && chars[i - 1] == '?' {
                    mode = Mode::Plain;
                }
            }
            Mode::Comment => {
                if c == '>' && i >= 2 && chars[i - 1] == '-' && chars[i - 2] == '-' {
                    mode = Mode::Plain;
                }
            }
            Mode::DocType => {
                if c == '>' {
                    mode = Mode::Plain;
                }
            }
        }
    }

    events
}

/// Classify buffered tag content once its closing `>` is reached.
fn classify_tag(tag: &str) -> ScanEvent {
    if let Some(stripped) = tag.strip_suffix('/') {
        ScanEvent::SelfClosingTag(stripped.to_string())
    } else if tag.starts_with('/') {
        ScanEvent::CloseTag
    } else {
        ScanEvent::OpenTag(tag.to_string())
    }
}

/// Emit pending inter-tag text, trimmed of trailing spaces, and clear the
/// buffer. Text that is empty after trimming is dropped.
fn flush_text(pending: &mut String, events: &mut Vec<ScanEvent>) {
    let trimmed = pending.trim_end_matches(' ');
    if !trimmed.is_empty() {
        events.push(ScanEvent::Text(trimmed.to_string()));
    }
    pending.clear();
}
