//! List command - show renderable templates under a directory

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use stencil_core::DirStore;

pub fn run(templates: &Path) -> Result<()> {
    let store = DirStore::new(templates);
    let names = store.list();

    if names.is_empty() {
        println!("{} No templates found in {}", "!".yellow(), templates.display());
        return Ok(());
    }

    for name in names {
        println!("{name}");
    }
    Ok(())
}
