use thiserror::Error;

use crate::template::TemplateError;

#[derive(Error, Debug)]
pub enum StencilError {
    // Resolution errors
    #[error("TEMPLATE_NOT_FOUND: no source for template '{name}' (attempted: {attempted:?})")]
    TemplateNotFound { name: String, attempted: Vec<String> },

    // Template errors
    #[error("TEMPLATE_SYNTAX: {0}")]
    Template(#[from] TemplateError),

    // IO errors
    #[error("IO_ERROR: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StencilError>;
