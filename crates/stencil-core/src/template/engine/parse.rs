//! Recursive-descent parser building the template tree
//!
//! Each open tag recursively consumes tags until its matching close, so
//! blocks nest arbitrarily within and across kinds without a fixed pass
//! order. Unbalanced tags are rejected here, before any evaluation runs.

use super::tokenize::{Tag, TagKind, TagStream};
use crate::template::error::TemplateError;

/// Maximum block nesting depth before parsing fails
pub(crate) const MAX_BLOCK_DEPTH: usize = 64;

/// Template syntax tree
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    /// Verbatim output
    Text(String),

    /// `{{name}}`; `raw` keeps the original token text for the
    /// leave-literal substitution policy
    Var { name: String, raw: String },

    /// `{{#if cond}} ... {{#else}} ... {{/if}}`
    If {
        cond: String,
        then_nodes: Vec<Node>,
        else_nodes: Vec<Node>,
    },

    /// `{{#each source}} ... {{/each}}`
    Each { source: String, body: Vec<Node> },
}

/// Parse template source into a node tree
pub(crate) fn parse(source: &str) -> Result<Vec<Node>, TemplateError> {
    let tags: Vec<Tag> = TagStream::new(source).collect();
    let mut parser = Parser {
        source,
        tags,
        pos: 0,
        cursor: 0,
        depth: 0,
    };
    let (nodes, _) = parser.parse_nodes(BlockCtx::Top)?;
    Ok(nodes)
}

/// Which block the parser is currently inside, with the open tag's line
/// for unclosed-block diagnostics
#[derive(Debug, Clone, Copy)]
enum BlockCtx {
    Top,
    If { line: usize },
    Else { line: usize },
    Each { line: usize },
}

/// Which close tag ended a `parse_nodes` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StopAt {
    Eof,
    Else,
    CloseIf,
    CloseEach,
}

struct Parser<'a> {
    source: &'a str,
    tags: Vec<Tag>,
    /// Index of the next unconsumed tag
    pos: usize,
    /// Byte offset of source text consumed so far
    cursor: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Parse nodes until the current block's close tag (or end of input)
    fn parse_nodes(&mut self, ctx: BlockCtx) -> Result<(Vec<Node>, StopAt), TemplateError> {
        let mut nodes = Vec::new();

        loop {
            if self.pos >= self.tags.len() {
                self.flush_text_to(self.source.len(), &mut nodes);
                return match ctx {
                    BlockCtx::Top => Ok((nodes, StopAt::Eof)),
                    BlockCtx::If { line } | BlockCtx::Else { line } => Err(TemplateError::Syntax {
                        message: "unclosed {{#if}} block".to_string(),
                        line,
                    }),
                    BlockCtx::Each { line } => Err(TemplateError::Syntax {
                        message: "unclosed {{#each}} block".to_string(),
                        line,
                    }),
                };
            }

            let tag = self.tags[self.pos].clone();
            self.flush_text_to(tag.start, &mut nodes);

            match tag.kind {
                TagKind::Var { ref name } => {
                    let raw = self.source[tag.start..tag.end()].to_string();
                    self.consume(&tag);
                    nodes.push(Node::Var {
                        name: name.clone(),
                        raw,
                    });
                }

                TagKind::Literal => {
                    self.consume(&tag);
                    nodes.push(Node::Text(self.source[tag.start..tag.end()].to_string()));
                }

                TagKind::Malformed { ref reason } => {
                    return Err(TemplateError::Syntax {
                        message: reason.clone(),
                        line: tag.line,
                    });
                }

                TagKind::OpenIf { ref name } => {
                    self.consume(&tag);
                    self.enter_block(tag.line)?;
                    let (then_nodes, stop) = self.parse_nodes(BlockCtx::If { line: tag.line })?;
                    let else_nodes = match stop {
                        StopAt::Else => {
                            self.parse_nodes(BlockCtx::Else { line: tag.line })?.0
                        }
                        _ => Vec::new(),
                    };
                    self.leave_block();
                    nodes.push(Node::If {
                        cond: name.clone(),
                        then_nodes,
                        else_nodes,
                    });
                }

                TagKind::OpenEach { ref name } => {
                    self.consume(&tag);
                    self.enter_block(tag.line)?;
                    let (body, _) = self.parse_nodes(BlockCtx::Each { line: tag.line })?;
                    self.leave_block();
                    nodes.push(Node::Each {
                        source: name.clone(),
                        body,
                    });
                }

                TagKind::Else => match ctx {
                    BlockCtx::If { .. } => {
                        self.consume(&tag);
                        return Ok((nodes, StopAt::Else));
                    }
                    BlockCtx::Else { .. } => {
                        return Err(TemplateError::Syntax {
                            message: "duplicate {{#else}} in the same {{#if}} block".to_string(),
                            line: tag.line,
                        });
                    }
                    _ => {
                        return Err(TemplateError::Syntax {
                            message: "{{#else}} outside an {{#if}} block".to_string(),
                            line: tag.line,
                        });
                    }
                },

                TagKind::CloseIf => match ctx {
                    BlockCtx::If { .. } | BlockCtx::Else { .. } => {
                        self.consume(&tag);
                        return Ok((nodes, StopAt::CloseIf));
                    }
                    _ => {
                        return Err(TemplateError::Syntax {
                            message: "{{/if}} without a matching {{#if}}".to_string(),
                            line: tag.line,
                        });
                    }
                },

                TagKind::CloseEach => match ctx {
                    BlockCtx::Each { .. } => {
                        self.consume(&tag);
                        return Ok((nodes, StopAt::CloseEach));
                    }
                    _ => {
                        return Err(TemplateError::Syntax {
                            message: "{{/each}} without a matching {{#each}}".to_string(),
                            line: tag.line,
                        });
                    }
                },
            }
        }
    }

    /// Push the text gap between the cursor and `to` as a Text node
    fn flush_text_to(&mut self, to: usize, nodes: &mut Vec<Node>) {
        if self.cursor < to {
            nodes.push(Node::Text(self.source[self.cursor..to].to_string()));
            self.cursor = to;
        }
    }

    /// Step past a consumed tag
    fn consume(&mut self, tag: &Tag) {
        self.pos += 1;
        self.cursor = tag.end();
    }

    fn enter_block(&mut self, line: usize) -> Result<(), TemplateError> {
        self.depth += 1;
        if self.depth > MAX_BLOCK_DEPTH {
            return Err(TemplateError::DepthExceeded {
                max: MAX_BLOCK_DEPTH,
                line,
            });
        }
        Ok(())
    }

    fn leave_block(&mut self) {
        self.depth -= 1;
    }
}
