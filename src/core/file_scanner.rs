use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

/// Directory names never descended into.
const SKIPPED_DIRS: &[&str] = &["__pycache__"];

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths relative to the input.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Python sources, sorted lexically.
    pub files: Vec<PathBuf>,
    /// Entries that could not be read.
    pub skipped_count: usize,
}

/// Recursively collect `.py` files under `base_dir`.
///
/// `__pycache__` directories, compiled `.pyc` files and anything matching
/// `ignore_patterns` are skipped. Glob patterns match the path relative to
/// `base_dir`; literal patterns exclude that path and everything beneath it.
/// `skip_dir` (typically an output directory nested in the input) is never
/// entered.
pub fn scan_files(base_dir: &Path, ignore_patterns: &[String], skip_dir: Option<&Path>) -> ScanResult {
    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => tracing::warn!(pattern = %p, error = %e, "invalid ignore pattern"),
            }
        } else {
            literal_ignore_paths.push(base_dir.join(p));
        }
    }

    let skip_dir = skip_dir.and_then(|dir| dir.canonicalize().ok());
    let is_skipped = |entry: &DirEntry| {
        let path = entry.path();
        if entry.file_type().is_dir() {
            if entry
                .file_name()
                .to_str()
                .is_some_and(|name| SKIPPED_DIRS.contains(&name))
            {
                return true;
            }
            if let Some(skip) = &skip_dir
                && entry.depth() > 0
                && path.canonicalize().is_ok_and(|p| &p == skip)
            {
                return true;
            }
        }
        literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
    };

    let mut files = Vec::new();
    let mut skipped_count = 0;

    for entry in WalkDir::new(base_dir).into_iter().filter_entry(|e| !is_skipped(e)) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                tracing::warn!(error = %e, "cannot access path");
                continue;
            }
        };
        let path = entry.path();
        if !entry.file_type().is_file() || !is_python_source(path) {
            continue;
        }

        let relative = path.strip_prefix(base_dir).unwrap_or(path);
        if glob_patterns.iter().any(|p| p.matches_path(relative)) {
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    ScanResult {
        files,
        skipped_count,
    }
}

fn is_python_source(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("py"))
}
