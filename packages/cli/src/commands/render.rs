use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use mindmap_graph::{compile, CompileOptions};
use mindmap_workspace::FileWatcher;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Outline file to render
    pub file: PathBuf,

    /// Write JSON here instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,

    /// Re-render whenever the file changes
    #[arg(short, long)]
    pub watch: bool,
}

pub fn render(args: RenderArgs, cwd: &Path, config: &Config) -> Result<()> {
    let options = config.editor.compile_options()?;
    let pretty = args.pretty || config.pretty;
    let file = cwd.join(&args.file);

    render_file(&file, args.out.as_deref(), pretty, &options)?;
    if !args.watch {
        return Ok(());
    }

    let watcher = FileWatcher::new(file.clone())?;
    eprintln!(
        "{} {} (Ctrl+C to stop)",
        "👀 Watching".bright_blue().bold(),
        file.display()
    );

    watch_loop(&watcher, |w| w.next_change().map(drop), args.out.as_deref(), pretty, &options);
    Ok(())
}

/// Re-render on every change `wait` reports until it returns `None`.
/// Returns how many renders succeeded.
fn watch_loop(
    watcher: &FileWatcher,
    wait: impl Fn(&FileWatcher) -> Option<()>,
    out: Option<&Path>,
    pretty: bool,
    options: &CompileOptions,
) -> usize {
    let file = watcher.path();
    let mut rendered = 0;

    while wait(watcher).is_some() {
        let skipped = watcher.drain();
        debug!(skipped, "Collapsed change events");

        // Editors may replace the file; it can briefly be missing
        if !file.exists() {
            continue;
        }
        match render_file(file, out, pretty, options) {
            Ok(()) => {
                rendered += 1;
                eprintln!("  {} re-rendered", "✓".green());
            }
            Err(e) => eprintln!("  {} {}", "✗".red(), e),
        }
    }
    rendered
}

fn render_file(file: &Path, out: Option<&Path>, pretty: bool, options: &CompileOptions) -> Result<()> {
    let text =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let json = render_json(&text, pretty, options)?;

    match out {
        Some(out) => {
            fs::write(out, json).with_context(|| format!("Failed to write {}", out.display()))?;
            info!(out = %out.display(), "Wrote graph");
        }
        None => println!("{}", json),
    }
    Ok(())
}

/// Compile outline text to `{nodes, edges}` JSON
pub fn render_json(text: &str, pretty: bool, options: &CompileOptions) -> Result<String> {
    let graph = compile(text, options);
    let json = if pretty {
        graph.to_json_pretty()?
    } else {
        graph.to_json()?
    };
    Ok(json)
}
