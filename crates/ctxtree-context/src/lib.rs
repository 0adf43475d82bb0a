//! Build-context materialization for ctxtree.
//!
//! # Pipeline
//!
//! ```text
//! ctxtree -d <dir>
//!   1. Ignore rules ── <dir>/.dockerignore → ordered exclude patterns
//!   2. Pack         ── gzipped tar of <dir>, excluded entries omitted
//!   3. Unpack       ── fresh scratch directory (removed on drop)
//!   4. Render       ── sized, depth-bounded ASCII tree
//! ```
//!
//! This crate owns steps 2 and 3. The context is round-tripped through a
//! real archive stream instead of a filtered directory walk, so the preview
//! reflects exactly what packing produces — including symlink and
//! empty-directory handling an in-memory filter could get wrong.

pub mod archive;
pub mod materialize;

pub use materialize::{MaterializedContext, materialize_context};
