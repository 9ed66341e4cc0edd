//! Template source cache and the caching policy that gates it
//!
//! The cache is an explicit object owned by the [`Renderer`](crate::Renderer)
//! rather than module-level state, so independent engine instances (one per
//! test, for example) never interfere with each other.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Environment variable consulted by [`CachePolicy::FromEnv`]
pub const CACHE_ENV_VAR: &str = "STENCIL_TEMPLATE_CACHE";

/// Whether resolved template source is retained across render calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CachePolicy {
    /// Always cache resolved source
    Enabled,
    /// Re-fetch from the store on every render
    Disabled,
    /// Derive from `STENCIL_TEMPLATE_CACHE`, read once per render call
    #[default]
    FromEnv,
}

impl CachePolicy {
    /// Resolve the effective policy for one render call
    ///
    /// Recognized enabled values for the environment variable are
    /// `enabled`, `1` and `true`; anything else (including unset) disables
    /// caching.
    pub fn is_enabled(self) -> bool {
        match self {
            CachePolicy::Enabled => true,
            CachePolicy::Disabled => false,
            CachePolicy::FromEnv => matches!(
                std::env::var(CACHE_ENV_VAR).ok().as_deref(),
                Some("enabled") | Some("1") | Some("true")
            ),
        }
    }
}

/// Process-wide map of resolved template name to raw source text
///
/// Entries stay valid until [`clear`](TemplateCache::clear) or process exit.
/// Reads and writes go through a mutex, so one cache may be shared by
/// renders running on multiple threads.
#[derive(Debug, Default)]
pub struct TemplateCache {
    entries: Mutex<HashMap<String, String>>,
}

impl TemplateCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up cached source under a resolved template name
    pub fn get(&self, name: &str) -> Option<String> {
        self.lock().get(name).cloned()
    }

    /// Store source under a resolved template name
    pub fn insert(&self, name: &str, source: &str) {
        self.lock().insert(name.to_string(), source.to_string());
    }

    /// Discard every entry unconditionally
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Cached source is plain text; a panic while holding the lock cannot
    /// leave an entry half-written, so recover instead of propagating poison.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
