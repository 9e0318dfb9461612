use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use mindmap_graph::{compile_tree, CompileOptions};
use mindmap_parser::{Serializer, TreeNode};
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Outline file to inspect
    pub file: PathBuf,

    /// Print the outline rebuilt from the tree instead
    #[arg(long)]
    pub normalize: bool,
}

pub fn tree(args: TreeArgs, cwd: &Path, config: &Config) -> Result<()> {
    let options = config.editor.compile_options()?;
    let file = cwd.join(&args.file);
    let text =
        fs::read_to_string(&file).with_context(|| format!("Failed to read {}", file.display()))?;

    if args.normalize {
        println!("{}", normalize(&text, &options));
        return Ok(());
    }

    let roots = compile_tree(&text, &options);
    let count: usize = roots.iter().map(TreeNode::count).sum();
    println!(
        "{} {} ({} topics)",
        "🌳".green(),
        args.file.display().to_string().bright_white().bold(),
        count
    );
    print!("{}", format_tree(&roots, &options));
    Ok(())
}

/// One line per node: id, label, position and estimated width
pub fn format_tree(roots: &[TreeNode], options: &CompileOptions) -> String {
    let mut out = String::new();
    for root in roots {
        write_node(&mut out, root, 0, options);
    }
    out
}

fn write_node(out: &mut String, node: &TreeNode, depth: usize, options: &CompileOptions) {
    let _ = writeln!(
        out,
        "{}{} {:?} ({}, {}) w={}",
        "  ".repeat(depth),
        node.id,
        node.label,
        node.position.x,
        node.position.y,
        options.width.estimate(&node.label)
    );
    for child in &node.children {
        write_node(out, child, depth + 1, options);
    }
}

/// Rebuild the outline from its rendered trees
pub fn normalize(text: &str, options: &CompileOptions) -> String {
    let mut serializer = Serializer::new(options.parser.indent());
    for root in options.build(text) {
        serializer.write_tree(&root);
    }
    serializer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tree() {
        let options = CompileOptions::default();
        let roots = compile_tree("Root\n\tA\n\tB", &options);
        let text = format_tree(&roots, &options);
        assert_eq!(
            text,
            "node-0 \"Root\" (0, 0) w=120\n  node-1 \"A\" (250, -60) w=120\n  node-2 \"B\" (250, 60) w=120\n"
        );
    }

    #[test]
    fn test_normalize_flattens_skipped_levels() {
        let options = CompileOptions::default();
        assert_eq!(normalize("A\n\t\t\tB\n\tC\n\n", &options), "A\n\tB\n\tC");
        assert_eq!(normalize("", &options), "");
    }
}
