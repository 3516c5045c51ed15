mod glyphs;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use git::Repository;
use glyphs::GlyphIcons;
use log::{info, warn};
use revision_tree::{node_at, IconList, TreeBuilder, TreeOptions};
use std::path::PathBuf;

/// Print the file tree of a git revision
#[derive(Debug, Parser)]
#[command(name = "revtree", version)]
struct Args {
    /// Path inside the repository
    #[arg(long, default_value = ".")]
    repo: PathBuf,

    /// Revision whose tree is shown
    #[arg(long, default_value = "HEAD")]
    revision: String,

    /// Number of directory levels to expand
    #[arg(long, default_value_t = 1)]
    depth: usize,

    /// Repository path to select, expanding directories on the way
    #[arg(long)]
    select: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let repo = Repository::open(&args.repo)?;
    let commit = repo.resolve(&args.revision)?;
    info!("Showing {} ({}) of {}", args.revision, commit, repo.work_dir().display());

    let options = TreeOptions::new().icon_context(repo.work_dir().to_string_lossy());
    let mut builder = TreeBuilder::with_options(GlyphIcons, options);
    let mut nodes = Vec::new();
    let mut icons = IconList::new();

    let entries = repo
        .entries(&args.revision)
        .with_context(|| format!("Failed to list {}", args.revision))?;
    builder.build(entries, &mut nodes, &mut icons);
    render::expand_to_depth(&mut builder, &mut nodes, &repo, &mut icons, args.depth)?;

    let selected = match &args.select {
        Some(path) => {
            let found = builder.select_path(&mut nodes, path, &repo, &mut icons)?;
            if found.is_none() {
                warn!("{} does not exist in {}", path, args.revision);
            }
            found.map(|indices| (path, indices))
        }
        None => None,
    };

    print!("{}", render::render(&nodes, &icons));
    println!();
    println!(
        "{} top-level entries, {} distinct icons",
        nodes.len(),
        icons.len()
    );

    if let Some((path, indices)) = selected {
        if let Some(node) = node_at(&nodes, &indices) {
            println!("Selected {} ({})", path, node);
        }
    }

    Ok(())
}
