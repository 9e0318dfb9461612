use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::Path;

const EXAMPLE_OUTLINE: &str = "Project\n\tGoals\n\t\tShip v1\n\t\tKeep it simple\n\tRisks\n\t\tScope creep\n\tPeople\n";

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,

    /// Also write an example outline to this file
    #[arg(long)]
    pub example: Option<String>,
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = Config::path_in(cwd);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing mindmap...".bright_blue().bold());

    let config_json = serde_json::to_string_pretty(&Config::default())?;
    fs::write(&config_path, config_json)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    if let Some(example) = &args.example {
        let example_path = cwd.join(example);
        if example_path.exists() {
            println!("  {} {} exists, leaving it alone", "·".dimmed(), example);
        } else {
            fs::write(&example_path, EXAMPLE_OUTLINE)?;
            println!("  {} Created {}", "✓".green(), example);
        }
    }

    println!();
    println!("Next steps:");
    println!("  1. Write an outline (one topic per line, tab to nest)");
    println!("  2. Run: mindmap render <file> --pretty");

    Ok(())
}
