//! Directory scanning for corpus documents

use crate::config::{ScanConfig, DEFAULT_PATTERN};
use crate::error::{LinkRankError, Result};
use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Scan result
#[derive(Debug, Clone)]
pub struct ScanResult {
    pub path: PathBuf,
    pub name: String,
}

/// Scan options
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub pattern: String,
    pub follow_symlinks: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            follow_symlinks: true,
        }
    }
}

impl From<&ScanConfig> for ScanOptions {
    fn from(config: &ScanConfig) -> Self {
        Self {
            pattern: config.pattern.clone(),
            ..Self::default()
        }
    }
}

/// List the files directly inside `root` whose names match the pattern.
///
/// Subdirectories are not descended into. Results are sorted by name.
pub fn scan_documents(root: &Path, options: &ScanOptions) -> Result<Vec<ScanResult>> {
    if !root.is_dir() {
        return Err(LinkRankError::NotFound(root.to_path_buf()));
    }

    let pattern = Pattern::new(&options.pattern)?;
    let mut results = Vec::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(options.follow_symlinks)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            tracing::warn!("Skipping non-UTF-8 file name {}", entry.path().display());
            continue;
        };
        if pattern.matches(&name) {
            results.push(ScanResult {
                path: entry.path().to_path_buf(),
                name,
            });
        } else {
            tracing::debug!("Skipping non-matching entry {}", name);
        }
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_options() {
        let opts = ScanOptions::default();
        assert_eq!(opts.pattern, "*.html");
        assert!(opts.follow_symlinks);
    }

    #[test]
    fn test_scan_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.html"), "").unwrap();
        fs::write(dir.path().join("a.html"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("c.html"), "").unwrap();

        let results = scan_documents(dir.path(), &ScanOptions::default()).unwrap();
        let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a.html", "b.html"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_names_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.html"), "").unwrap();
        let odd = dir.path().join(OsStr::from_bytes(b"b\xff.html"));
        if fs::write(&odd, "").is_err() {
            // Filesystem refuses non-UTF-8 names
            return;
        }

        let results = scan_documents(dir.path(), &ScanOptions::default()).unwrap();
        let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a.html"]);
    }

    #[test]
    fn test_missing_root_is_not_found() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = scan_documents(&missing, &ScanOptions::default()).unwrap_err();
        assert!(matches!(err, LinkRankError::NotFound(p) if p == missing));
    }
}
