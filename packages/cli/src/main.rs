mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{edit, init, render, tree, EditArgs, InitArgs, RenderArgs, TreeArgs};
use config::Config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Mindmap CLI - turn indented outlines into positioned graphs
#[derive(Parser, Debug)]
#[command(name = "mindmap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to ./mindmap.config.json when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default mindmap.config.json
    Init(InitArgs),

    /// Compile an outline file to nodes + edges JSON
    Render(RenderArgs),

    /// Print the positioned topic tree of an outline file
    Tree(TreeArgs),

    /// Run an edit session over stdin/stdout (JSON lines)
    Edit(EditArgs),
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    // `init` must work even when the existing config is broken
    let load_config = || Config::load(&cwd, cli.config.as_deref());

    match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Render(args) => render(args, &cwd, &load_config()?),
        Command::Tree(args) => tree(args, &cwd, &load_config()?),
        Command::Edit(args) => edit(args, &cwd, &load_config()?),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
