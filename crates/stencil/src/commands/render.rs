//! Render command - produce a document from a template and a JSON context

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result, bail};
use colored::Colorize;
use stencil_core::{Renderer, TemplateContext};

/// Render a named template from the template directory
///
/// # Arguments
///
/// * `name` - Logical template name (extension optional)
/// * `templates` - Template directory
/// * `context_path` - Optional JSON file holding the context object
/// * `output` - Optional output file; stdout when absent
/// * `verbose` - Enable verbose output if true
pub fn run(
    name: &str,
    templates: &Path,
    context_path: Option<&Path>,
    output: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let context = load_context(context_path, verbose)?;

    if verbose {
        println!(
            "{} Rendering '{}' from {}",
            "→".cyan(),
            name,
            templates.display()
        );
    }

    let renderer = Renderer::from_dir(templates);
    let rendered = renderer.render(name, &context)?;

    match output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("{} Rendered '{}' to {}", "✓".green().bold(), name, path.display());
        }
        None => {
            print!("{rendered}");
        }
    }

    Ok(())
}

fn load_context(context_path: Option<&Path>, verbose: bool) -> Result<TemplateContext> {
    let Some(path) = context_path else {
        return Ok(TemplateContext::default());
    };

    if verbose {
        println!("{} Loading context from {}", "→".cyan(), path.display());
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read context file {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("invalid JSON in {}", path.display()))?;

    if !value.is_object() {
        bail!("context file {} must hold a JSON object", path.display());
    }

    Ok(TemplateContext::new(value))
}
