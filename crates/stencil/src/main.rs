mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            name,
            templates,
            context,
            output,
        } => commands::render::run(&name, &templates, context.as_deref(), output.as_deref(), cli.verbose),
        Commands::Check { file } => commands::check::run(&file, cli.verbose),
        Commands::List { templates } => commands::list::run(&templates),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
