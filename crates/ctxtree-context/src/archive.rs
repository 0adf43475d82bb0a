//! Gzipped tar packing and unpacking of a context directory.

use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use ignore::Match;
use ignore::gitignore::{Gitignore, GitignoreBuilder};

/// Pack `dir` into an in-memory gzipped tar stream, omitting entries matched
/// by `excludes`.
///
/// Patterns use gitignore semantics: `*`, `**`, trailing-`/` directory
/// anchoring, and `!` re-inclusion, applied in list order.
pub fn pack_context(dir: &Path, excludes: &[String]) -> Result<Vec<u8>, ArchiveError> {
    let matcher = build_matcher(dir, excludes)?;
    // Entries under an excluded directory can only resurface when a negation
    // pattern exists, so the walk skips excluded subtrees otherwise
    let descend_excluded = excludes.iter().any(|p| p.starts_with('!'));

    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);
    builder.follow_symlinks(false);

    append_entries(&mut builder, dir, dir, &matcher, descend_excluded)?;

    let encoder = builder
        .into_inner()
        .map_err(|e| ArchiveError::Finish { source: e })?;
    encoder
        .finish()
        .map_err(|e| ArchiveError::Finish { source: e })
}

/// Unpack a gzipped tar stream produced by [`pack_context`] into `dest`.
pub fn unpack_context(archive: &[u8], dest: &Path) -> Result<(), ArchiveError> {
    let mut tar = tar::Archive::new(GzDecoder::new(archive));
    tar.unpack(dest).map_err(|e| ArchiveError::Unpack {
        path: dest.to_path_buf(),
        source: e,
    })
}

fn build_matcher(dir: &Path, excludes: &[String]) -> Result<Gitignore, ArchiveError> {
    let mut builder = GitignoreBuilder::new(dir);
    for pattern in excludes {
        builder
            .add_line(None, pattern)
            .map_err(|e| ArchiveError::Pattern {
                pattern: pattern.clone(),
                source: e,
            })?;
    }
    builder
        .build()
        .map_err(|e| ArchiveError::Matcher { source: e })
}

fn append_entries<W: Write>(
    builder: &mut tar::Builder<W>,
    root: &Path,
    dir: &Path,
    matcher: &Gitignore,
    descend_excluded: bool,
) -> Result<(), ArchiveError> {
    let entries = std::fs::read_dir(dir).map_err(|e| ArchiveError::Walk {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| ArchiveError::Walk {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| ArchiveError::Walk {
            path: path.clone(),
            source: e,
        })?;
        let is_dir = file_type.is_dir();

        let excluded = matches!(
            matcher.matched_path_or_any_parents(&path, is_dir),
            Match::Ignore(_)
        );
        if excluded && !(is_dir && descend_excluded) {
            continue;
        }

        let rel = path
            .strip_prefix(root)
            .expect("walked path is always under the context root");

        if is_dir {
            if !excluded {
                builder
                    .append_dir(rel, &path)
                    .map_err(|e| ArchiveError::Append {
                        path: path.clone(),
                        source: e,
                    })?;
            }
            append_entries(builder, root, &path, matcher, descend_excluded)?;
        } else {
            builder
                .append_path_with_name(&path, rel)
                .map_err(|e| ArchiveError::Append {
                    path: path.clone(),
                    source: e,
                })?;
        }
    }

    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("invalid exclude pattern {pattern:?}")]
    Pattern {
        pattern: String,
        source: ignore::Error,
    },
    #[error("failed to compile exclude patterns")]
    Matcher { source: ignore::Error },
    #[error("failed to enumerate {path}")]
    Walk {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to archive {path}")]
    Append {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to finalize the context archive")]
    Finish { source: std::io::Error },
    #[error("failed to unpack the context archive into {path}")]
    Unpack {
        path: PathBuf,
        source: std::io::Error,
    },
}
