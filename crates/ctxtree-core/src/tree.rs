//! Owned file tree built from a materialized context directory.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A file or directory in the materialized context.
///
/// Nodes own their children exclusively; the tree is built bottom-up in a
/// single pass and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Base name of the entry.
    pub name: String,
    /// Full path (internal, never displayed).
    pub path: PathBuf,
    /// File byte length, or the recursive sum of descendant file sizes.
    pub size: u64,
    /// Whether this entry is a directory.
    pub is_dir: bool,
    /// Child nodes, directories first, then byte-wise by name.
    pub children: Vec<TreeNode>,
}

/// Build the tree rooted at `path`, aggregating directory sizes bottom-up.
///
/// The root itself must be readable. Entries below it that cannot be read
/// are skipped (recorded at debug level) instead of aborting the traversal;
/// their sizes are absent from directory totals.
pub fn build_tree(path: &Path) -> Result<TreeNode> {
    build_node(path).map_err(|e| Error::TreeRoot {
        path: path.to_path_buf(),
        source: e,
    })
}

fn build_node(path: &Path) -> io::Result<TreeNode> {
    let metadata = std::fs::metadata(path)?;

    let name = match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    };

    let mut node = TreeNode {
        name,
        path: path.to_path_buf(),
        size: 0,
        is_dir: metadata.is_dir(),
        children: Vec::new(),
    };

    if !node.is_dir {
        node.size = metadata.len();
        return Ok(node);
    }

    for entry in std::fs::read_dir(path)? {
        let child_path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                tracing::debug!(dir = %path.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };
        match build_node(&child_path) {
            Ok(child) => {
                node.size += child.size;
                node.children.push(child);
            }
            Err(e) => {
                tracing::debug!(path = %child_path.display(), error = %e, "skipping unreadable entry");
            }
        }
    }

    // Directories first, then byte-wise by name
    node.children
        .sort_by(|a, b| b.is_dir.cmp(&a.is_dir).then_with(|| a.name.cmp(&b.name)));

    Ok(node)
}
