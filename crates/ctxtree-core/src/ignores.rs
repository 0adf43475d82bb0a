use std::path::Path;

use crate::error::{Error, Result};

/// Name of the ignore-rules file read from the context root.
pub const IGNORE_FILE: &str = ".dockerignore";

/// The build manifest. It is always sent with the context because the daemon
/// needs it for build analysis, even when an ignore rule matches it.
const MANIFEST_FILE: &str = "Dockerfile";

/// Read the exclude patterns for a build context directory.
///
/// A missing `.dockerignore` is the valid "exclude nothing" configuration
/// and yields an empty list. One that exists but cannot be read is fatal.
///
/// The returned list never contains an exact `Dockerfile` entry, so a
/// preview of the context always shows the manifest as present.
pub fn read_context_ignores(dir: &Path) -> Result<Vec<String>> {
    let path = dir.join(IGNORE_FILE);
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(Error::IgnoreRead { path, source: e }),
    };

    let mut excludes = parse_patterns(&content);

    if let Some(i) = excludes.iter().position(|p| p == MANIFEST_FILE) {
        excludes.remove(i);
    }

    Ok(excludes)
}

/// Split ignore-file content into normalized patterns, insertion order
/// preserved (a later `!` rule re-includes paths excluded by earlier ones).
fn parse_patterns(content: &str) -> Vec<String> {
    let mut patterns = Vec::new();

    for (i, line) in content.lines().enumerate() {
        // A UTF-8 BOM only ever prefixes the first line
        let line = if i == 0 {
            line.strip_prefix('\u{feff}').unwrap_or(line)
        } else {
            line
        };
        if line.starts_with('#') {
            continue;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (negated, body) = match line.strip_prefix('!') {
            Some(rest) => (true, rest.trim()),
            None => (false, line),
        };
        // Patterns are context-relative; a leading slash is redundant
        let body = body.trim_start_matches('/');

        if negated {
            patterns.push(format!("!{body}"));
        } else {
            patterns.push(body.to_owned());
        }
    }

    patterns
}
