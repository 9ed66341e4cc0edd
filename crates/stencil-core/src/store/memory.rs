//! In-memory template store

use std::collections::HashMap;
use std::io;

use super::TemplateStore;

/// Store serving templates from an in-memory map
///
/// The test seam for exercising resolution and caching without touching the
/// filesystem; also usable for templates embedded in a host binary.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    templates: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, source: impl Into<String>) {
        self.templates.insert(name.into(), source.into());
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, source: impl Into<String>) -> Self {
        self.insert(name, source);
        self
    }
}

impl TemplateStore for MemoryStore {
    fn exists(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    fn read(&self, name: &str) -> io::Result<String> {
        self.templates.get(name).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no template '{name}' in memory store"),
            )
        })
    }
}
