//! Check command - validate template syntax without rendering

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result, anyhow};
use colored::Colorize;
use stencil_core::check_template;

pub fn run(file: &Path, verbose: bool) -> Result<()> {
    if verbose {
        println!("{} Checking {}", "→".cyan(), file.display());
    }

    let source = fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    check_template(&source)
        .map_err(|e| anyhow!("{}: {}", file.display(), e))?;

    println!("{} {} is well-formed", "✓".green().bold(), file.display());
    Ok(())
}
