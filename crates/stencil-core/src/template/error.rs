//! Template error types

use thiserror::Error;

/// Template parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Malformed or unbalanced template syntax
    #[error("syntax error at line {line}: {message}")]
    Syntax {
        /// What went wrong
        message: String,
        /// Line number where the error occurred
        line: usize,
    },

    /// Block nesting beyond the supported depth (malformed input protection)
    #[error("block nesting deeper than {max} levels at line {line}")]
    DepthExceeded {
        /// Maximum supported nesting depth
        max: usize,
        /// Line number of the block that crossed the limit
        line: usize,
    },
}
