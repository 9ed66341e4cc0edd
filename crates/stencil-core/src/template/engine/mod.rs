//! Template engine implementation
//!
//! `{{...}}` source is tokenized ([`tokenize`]), parsed into a small tree
//! ([`parse`]) and walked against a scope stack ([`eval`]). The
//! [`Renderer`] front-end adds name resolution, the source cache and the
//! store boundary on top of the pure pipeline.

mod eval;
mod parse;
mod tokenize;

use std::io;

use serde_json::Value;

use crate::cache::{CachePolicy, TemplateCache};
use crate::error::{Result, StencilError};
use crate::store::{DirStore, TemplateStore};
use crate::template::error::TemplateError;

/// Extensions probed, in order, when a template name carries none
pub const RESOLVE_EXTENSIONS: &[&str] = &[".html", ".xml", ".txt"];

/// Template context holding JSON data for rendering
///
/// Created fresh per render call by the caller; the engine never mutates
/// it. Anything other than a JSON object renders as an empty scope.
#[derive(Debug, Clone)]
pub struct TemplateContext {
    data: Value,
}

impl TemplateContext {
    /// Create a new template context from a JSON value
    pub fn new(data: Value) -> Self {
        Self { data }
    }

    /// Get the underlying JSON value
    pub fn data(&self) -> &Value {
        &self.data
    }
}

impl Default for TemplateContext {
    fn default() -> Self {
        Self::new(Value::Object(serde_json::Map::new()))
    }
}

/// Render template source with the given context
///
/// Pure function: no I/O, no shared state; usable without a store. Fails
/// only on malformed syntax.
pub fn process_template(
    source: &str,
    context: &TemplateContext,
) -> std::result::Result<String, TemplateError> {
    let nodes = parse::parse(source)?;
    let empty = serde_json::Map::new();
    let fields = context.data().as_object().unwrap_or(&empty);
    Ok(eval::eval(&nodes, fields))
}

/// Validate template syntax without rendering
pub fn check_template(source: &str) -> std::result::Result<(), TemplateError> {
    parse::parse(source).map(|_| ())
}

/// Template renderer over a store, with a source cache
///
/// Owns its cache explicitly, so independent renderers never share state.
pub struct Renderer<S> {
    store: S,
    cache: TemplateCache,
    policy: CachePolicy,
}

impl Renderer<DirStore> {
    /// Renderer over a template directory, caching per the environment
    pub fn from_dir(root: impl Into<std::path::PathBuf>) -> Self {
        Self::new(DirStore::new(root))
    }
}

impl<S: TemplateStore> Renderer<S> {
    /// Renderer with the environment-derived caching policy
    pub fn new(store: S) -> Self {
        Self::with_cache_policy(store, CachePolicy::FromEnv)
    }

    /// Renderer with a pinned caching policy
    pub fn with_cache_policy(store: S, policy: CachePolicy) -> Self {
        Self {
            store,
            cache: TemplateCache::new(),
            policy,
        }
    }

    /// Render a named template with the given context
    ///
    /// The name is resolved against the store (probing
    /// [`RESOLVE_EXTENSIONS`] when it carries none), source is fetched
    /// through the cache per the caching policy, and the result is
    /// rendered with [`process_template`].
    pub fn render(&self, name: &str, context: &TemplateContext) -> Result<String> {
        let resolved = self.resolve(name)?;
        let source = self.load(name, &resolved)?;
        Ok(process_template(&source, context)?)
    }

    /// Discard all cached template source
    ///
    /// The next render re-fetches from the store regardless of policy.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Resolve a logical name to a template file name
    fn resolve(&self, name: &str) -> Result<String> {
        if name.contains('.') {
            return Ok(name.to_string());
        }

        let mut attempted = Vec::new();
        for ext in RESOLVE_EXTENSIONS {
            let candidate = format!("{name}{ext}");
            if self.store.exists(&candidate) {
                return Ok(candidate);
            }
            attempted.push(candidate);
        }

        Err(StencilError::TemplateNotFound {
            name: name.to_string(),
            attempted,
        })
    }

    /// Fetch source for a resolved name, through the cache when enabled
    fn load(&self, name: &str, resolved: &str) -> Result<String> {
        // The policy flag is environment-derived; read it once per render
        let cache_enabled = self.policy.is_enabled();

        if cache_enabled {
            if let Some(source) = self.cache.get(resolved) {
                return Ok(source);
            }
        }

        let source = self.store.read(resolved).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                StencilError::TemplateNotFound {
                    name: name.to_string(),
                    attempted: vec![resolved.to_string()],
                }
            } else {
                StencilError::Io(err)
            }
        })?;

        if cache_enabled {
            self.cache.insert(resolved, &source);
        }

        Ok(source)
    }
}

#[cfg(test)]
mod tests;
