mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::*;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Storefront builder - validate, edit and render site documents", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Initialize a storefront with a config and a default home page
    Init(InitArgs),

    /// Check site documents against the block schemas
    Validate(ValidateArgs),

    /// Render a site to HTML
    Render(RenderArgs),

    /// Print the resolved theme stylesheet
    Theme(ThemeArgs),

    /// Apply JSON mutations to a site document
    Edit(EditArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?.display().to_string();
    debug!(cwd = %cwd, "Running command");

    match command {
        Command::Init(args) => init(args, &cwd),
        Command::Validate(args) => validate(args, &cwd),
        Command::Render(args) => render(args, &cwd),
        Command::Theme(args) => theme(args, &cwd),
        Command::Edit(args) => edit(args, &cwd),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(err) = run(cli.command) {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
