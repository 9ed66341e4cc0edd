//! CLI command structure using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "stencil")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a template with a JSON context
    Render {
        /// Logical template name; extension optional (.html/.xml/.txt probed)
        name: String,

        /// Template directory
        #[arg(short, long, default_value = "templates")]
        templates: PathBuf,

        /// JSON file holding the context object
        #[arg(short, long)]
        context: Option<PathBuf>,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate template syntax without rendering
    Check {
        /// Template file to check
        file: PathBuf,
    },

    /// List renderable templates in a directory
    List {
        /// Template directory
        #[arg(short, long, default_value = "templates")]
        templates: PathBuf,
    },
}
