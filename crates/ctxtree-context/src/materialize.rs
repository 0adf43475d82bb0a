use std::path::Path;

use tempfile::TempDir;

use crate::archive;

/// Prefix for scratch directories, one fresh directory per invocation.
const SCRATCH_PREFIX: &str = "docker-context-";

/// The rules file drives exclusion but is not itself part of the preview.
/// Anchored to the context root; nested files with the same name are data.
const RULES_FILE_PATTERN: &str = "/.dockerignore";

/// A build context realized on disk.
///
/// Owns the scratch directory; dropping the value removes it, on success and
/// error paths alike, so callers never clean up leaked scratch state.
#[derive(Debug)]
pub struct MaterializedContext {
    scratch: TempDir,
}

impl MaterializedContext {
    /// Root of the realized file tree.
    pub fn path(&self) -> &Path {
        self.scratch.path()
    }
}

/// Realize exactly the files a build would receive from `dir` under the
/// given exclude patterns.
///
/// The context is round-tripped through the same pack step a build
/// submission performs, then unpacked into a fresh uniquely-named scratch
/// directory. Walking the result therefore shows what packing literally
/// produces rather than what a filtered walk of the source would guess.
pub fn materialize_context(
    dir: &Path,
    excludes: &[String],
) -> Result<MaterializedContext, MaterializeError> {
    let mut patterns = excludes.to_vec();
    patterns.push(RULES_FILE_PATTERN.to_owned());

    let archive = archive::pack_context(dir, &patterns)?;

    let scratch = tempfile::Builder::new()
        .prefix(SCRATCH_PREFIX)
        .tempdir()
        .map_err(|e| MaterializeError::Scratch { source: e })?;

    archive::unpack_context(&archive, scratch.path())?;

    Ok(MaterializedContext { scratch })
}

#[derive(Debug, thiserror::Error)]
pub enum MaterializeError {
    #[error("failed to create scratch directory")]
    Scratch { source: std::io::Error },
    #[error(transparent)]
    Archive(#[from] archive::ArchiveError),
}
