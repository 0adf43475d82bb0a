//! Ignore-rule resolution, tree model, and rendering for ctxtree.
//!
//! This crate defines the `.dockerignore` reader ([`read_context_ignores`]),
//! the owned file tree ([`TreeNode`] / [`build_tree`]), the tree renderer
//! ([`render_tree`]), and shared error types.

pub mod error;
pub mod ignores;
pub mod render;
pub mod tree;

pub use error::{Error, Result};
pub use ignores::read_context_ignores;
pub use render::{format_size, render_tree};
pub use tree::{TreeNode, build_tree};
