//! Tokenization for the template engine
//!
//! Provides O(n) tokenization using a state machine. Only `{{...}}` spans
//! become tags; everything between them (including an unterminated `{{`)
//! stays ordinary text.

/// Tag classification for the template grammar
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TagKind {
    /// `{{name}}`
    Var { name: String },

    /// `{{#if name}}`
    OpenIf { name: String },

    /// `{{#else}}`
    Else,

    /// `{{/if}}`
    CloseIf,

    /// `{{#each name}}`
    OpenEach { name: String },

    /// `{{/each}}`
    CloseEach,

    /// `{{...}}` content outside the grammar; passes through verbatim
    Literal,

    /// Content that starts like a block tag but does not parse as one
    Malformed { reason: String },
}

/// A single `{{...}}` tag with position and classification
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Tag {
    /// Tag classification
    pub kind: TagKind,
    /// Absolute byte position of `{{` in the source
    pub start: usize,
    /// Total length in bytes including `{{` and `}}`
    pub length: usize,
    /// Line number where the tag starts (for error messages)
    pub line: usize,
}

impl Tag {
    /// Byte position just past the closing `}}`
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Tokenization state machine
///
/// Forward-only scanning; each byte is processed at most twice (once when a
/// candidate brace pair falls through to the previous state), giving an O(n)
/// bound over the whole source.
///
/// ```text
/// Text ──{──> SeenOpenBrace ──{──> InTag ──}──> SeenCloseBrace ──}──> [yield Tag] → Text
///   │              │                 │                 │
///   │ (other)      │ (other)         │ (other)         │ (other)
///   └─────────────>└────────────────>└────────────────>└──> back to Text / InTag
/// ```
#[derive(Debug, Clone, PartialEq)]
enum ScanState {
    /// Scanning ordinary text
    Text,

    /// Seen the first `{`, checking for a second
    SeenOpenBrace {
        /// Position of the first `{`
        pos: usize,
    },

    /// Inside `{{...}}`, scanning for the closing braces
    InTag {
        /// Byte position of the opening `{{`
        start: usize,
        /// Byte position where tag content starts (after `{{`)
        content_start: usize,
        /// Line number at the opening `{{`
        line: usize,
    },

    /// Seen the first `}` inside a tag, checking for a second
    SeenCloseBrace {
        start: usize,
        content_start: usize,
        /// Position of the first `}`
        rbrace_pos: usize,
        line: usize,
    },
}

/// Iterator over the `{{...}}` tags of a template source
pub(crate) struct TagStream<'a> {
    bytes: &'a [u8],
    pos: usize,
    state: ScanState,
    line: usize,
    /// Step count backstop; the state machine is O(n) by construction, the
    /// counter just hard-caps pathological regressions
    step_count: usize,
}

impl<'a> TagStream<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            bytes: source.as_bytes(),
            pos: 0,
            state: ScanState::Text,
            line: 1,
            step_count: 0,
        }
    }

    fn content(&self, content_start: usize, rbrace_pos: usize) -> &str {
        std::str::from_utf8(&self.bytes[content_start..rbrace_pos]).unwrap_or("")
    }
}

impl<'a> Iterator for TagStream<'a> {
    type Item = Tag;

    fn next(&mut self) -> Option<Tag> {
        const MAX_STEPS_MULTIPLIER: usize = 3;
        let max_steps = self.bytes.len().saturating_mul(MAX_STEPS_MULTIPLIER);

        loop {
            self.step_count += 1;
            if self.step_count > max_steps || self.pos >= self.bytes.len() {
                return None;
            }

            let byte = self.bytes[self.pos];

            match self.state {
                ScanState::Text => {
                    if byte == b'{' {
                        self.state = ScanState::SeenOpenBrace { pos: self.pos };
                    } else if byte == b'\n' {
                        self.line += 1;
                    }
                    self.pos += 1;
                }

                ScanState::SeenOpenBrace { pos } => {
                    if byte == b'{' {
                        self.state = ScanState::InTag {
                            start: pos,
                            content_start: self.pos + 1,
                            line: self.line,
                        };
                        self.pos += 1;
                    } else {
                        // Just a single `{`; reprocess this byte as text
                        self.state = ScanState::Text;
                    }
                }

                ScanState::InTag {
                    start,
                    content_start,
                    line,
                } => {
                    if byte == b'}' {
                        self.state = ScanState::SeenCloseBrace {
                            start,
                            content_start,
                            rbrace_pos: self.pos,
                            line,
                        };
                    } else if byte == b'\n' {
                        self.line += 1;
                    }
                    self.pos += 1;
                }

                ScanState::SeenCloseBrace {
                    start,
                    content_start,
                    rbrace_pos,
                    line,
                } => {
                    if byte == b'}' {
                        let kind = classify_content(self.content(content_start, rbrace_pos));
                        let tag = Tag {
                            kind,
                            start,
                            length: self.pos + 1 - start,
                            line,
                        };
                        self.state = ScanState::Text;
                        self.pos += 1;
                        return Some(tag);
                    }
                    // Just a single `}` inside content; reprocess in InTag
                    self.state = ScanState::InTag {
                        start,
                        content_start,
                        line,
                    };
                }
            }
        }
    }
}

/// Whether `s` is a valid tag name (`[A-Za-z0-9_]+`)
fn is_tag_name(s: &str) -> bool {
    !s.is_empty()
        && s.bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Classify the trimmed text between `{{` and `}}`
///
/// Content starting with one of the block keywords but not matching its
/// form is reported as malformed; any other unrecognized content is treated
/// as a literal span so that non-grammar text survives rendering unchanged.
fn classify_content(content: &str) -> TagKind {
    let trimmed = content.trim();

    if let Some(rest) = trimmed.strip_prefix("#if") {
        return classify_named(rest, "#if", |name| TagKind::OpenIf { name });
    }
    if let Some(rest) = trimmed.strip_prefix("#each") {
        return classify_named(rest, "#each", |name| TagKind::OpenEach { name });
    }
    if let Some(rest) = trimmed.strip_prefix("#else") {
        return classify_bare(rest, "#else", TagKind::Else);
    }
    if let Some(rest) = trimmed.strip_prefix("/if") {
        return classify_bare(rest, "/if", TagKind::CloseIf);
    }
    if let Some(rest) = trimmed.strip_prefix("/each") {
        return classify_bare(rest, "/each", TagKind::CloseEach);
    }

    if is_tag_name(trimmed) {
        return TagKind::Var {
            name: trimmed.to_string(),
        };
    }

    TagKind::Literal
}

/// Classify a block keyword that requires a name argument (`#if`, `#each`)
fn classify_named(rest: &str, keyword: &str, make: impl FnOnce(String) -> TagKind) -> TagKind {
    // A longer word sharing the prefix (`{{#iffy}}`) is not this tag
    if rest
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return TagKind::Literal;
    }

    let name = rest.trim();
    if name.is_empty() {
        return TagKind::Malformed {
            reason: format!("{{{{{keyword}}}}} is missing a name"),
        };
    }
    if !is_tag_name(name) {
        return TagKind::Malformed {
            reason: format!("invalid name '{name}' in {{{{{keyword}}}}}"),
        };
    }
    make(name.to_string())
}

/// Classify a block keyword that takes no argument (`#else`, `/if`, `/each`)
fn classify_bare(rest: &str, keyword: &str, kind: TagKind) -> TagKind {
    if rest.is_empty() {
        return kind;
    }
    if rest
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return TagKind::Literal;
    }
    TagKind::Malformed {
        reason: format!("unexpected content after {{{{{keyword}}}}}"),
    }
}
