//! Directory-backed template store

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::TemplateStore;
use crate::template::engine::RESOLVE_EXTENSIONS;

/// Store serving templates from files under a root directory
///
/// Template names are plain file names; names carrying path components
/// (`/`, `\` or `..`) never resolve, so a template name cannot escape the
/// root directory.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File names of renderable templates directly under the root, sorted
    ///
    /// Only files with a known template extension (`.html`, `.xml`, `.txt`)
    /// are listed.
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| entry.file_name().to_str().map(String::from))
            .filter(|name| RESOLVE_EXTENSIONS.iter().any(|ext| name.ends_with(ext)))
            .collect();
        names.sort();
        names
    }

    fn resolve(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
            return None;
        }
        Some(self.root.join(name))
    }
}

impl TemplateStore for DirStore {
    fn exists(&self, name: &str) -> bool {
        self.resolve(name).is_some_and(|path| path.is_file())
    }

    fn read(&self, name: &str) -> io::Result<String> {
        match self.resolve(name) {
            Some(path) => fs::read_to_string(path),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("invalid template name '{name}'"),
            )),
        }
    }
}
