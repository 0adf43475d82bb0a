//! Depth-bounded ASCII rendering of a context tree.

use crate::tree::TreeNode;

/// Render the tree as the CLI prints it: one line per node, root first,
/// every line ending in a parenthesized human-readable size.
///
/// `max_depth` bounds how deep children are printed: `0` prints the root
/// line only, `-1` means unlimited.
pub fn render_tree(root: &TreeNode, max_depth: i32) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} ({})\n", root.name, format_size(root.size)));

    if max_depth != 0 {
        for (i, child) in root.children.iter().enumerate() {
            render_node(
                &mut out,
                child,
                "",
                i == root.children.len() - 1,
                1,
                max_depth,
            );
        }
    }

    out
}

fn render_node(
    out: &mut String,
    node: &TreeNode,
    prefix: &str,
    is_last: bool,
    depth: i32,
    max_depth: i32,
) {
    let connector = if is_last { "└── " } else { "├── " };
    out.push_str(&format!(
        "{prefix}{connector}{} ({})\n",
        node.name,
        format_size(node.size)
    ));

    if max_depth != -1 && depth >= max_depth {
        return;
    }

    // A last sibling's subtree hangs under blank space; others continue the rail
    let child_prefix = if is_last {
        format!("{prefix}    ")
    } else {
        format!("{prefix}│   ")
    };
    for (i, child) in node.children.iter().enumerate() {
        render_node(
            out,
            child,
            &child_prefix,
            i == node.children.len() - 1,
            depth + 1,
            max_depth,
        );
    }
}

/// Format a byte count in binary units: integer bytes below 1024, otherwise
/// one decimal place in the largest unit that fits (`"512 B"`, `"1.0 KB"`,
/// `"1.5 MB"`).
pub fn format_size(size: u64) -> String {
    const UNIT: u64 = 1024;
    const UNITS: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

    if size < UNIT {
        return format!("{size} B");
    }
    let mut div = UNIT;
    let mut exp = 0;
    let mut n = size / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }
    format!("{:.1} {}B", size as f64 / div as f64, UNITS[exp])
}
