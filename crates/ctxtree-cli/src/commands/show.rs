use std::path::Path;

use ctxtree_context::materialize_context;
use ctxtree_core::{build_tree, read_context_ignores, render_tree};

/// Resolve ignore rules, materialize the build context, and print it as a
/// sized tree.
pub fn show_context(dir: &Path, depth: i32) -> anyhow::Result<()> {
    let excludes = read_context_ignores(dir)?;
    tracing::debug!(dir = %dir.display(), patterns = excludes.len(), "resolved context ignores");

    let ctx = materialize_context(dir, &excludes)?;

    let root = build_tree(ctx.path())?;
    print!("{}", render_tree(&root, depth));

    Ok(())
}
