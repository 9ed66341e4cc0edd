//! Template module - Pure text substitution template engine
//!
//! A lightweight engine for producing text documents (HTML, XML) from a
//! JSON data context.
//!
//! ## Philosophy
//!
//! - **Pure text substitution**: no expression language, no host evaluation
//! - **Data is data**: values substituted from the context are emitted
//!   verbatim and never re-parsed, so template syntax cannot be injected
//!   through data values
//! - **Fail fast on malformed syntax**: unbalanced block tags are a parse
//!   error, never an infinite loop or silently dropped text
//!
//! ## Syntax
//!
//! - Variables: `{{name}}` (`name` = letters/digits/underscore)
//! - Conditionals: `{{#if name}} ... {{#else}} ... {{/if}}` (else optional)
//! - Loops: `{{#each name}} ... {{/each}}`, body rendered once per element
//!
//! Blocks nest arbitrarily within and across kinds. `{{...}}` spans that are
//! not part of the grammar pass through verbatim.

pub mod engine;
pub mod error;

pub use engine::{check_template, process_template, Renderer, TemplateContext};
pub use error::TemplateError;
