//! Path helpers for the local resolvers: sub-path validation, version lookup, sizes.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::ResolveError;

/// Checks that `rel` is a plain relative path that stays under its parent.
///
/// Rejects absolute paths, `..`, and (on Windows) drive prefixes. `.` components
/// are dropped.
pub fn checked_relative(rel: &Path) -> Result<PathBuf, ResolveError> {
    let mut out = PathBuf::new();
    for component in rel.components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                return Err(invalid_path(rel, "parent directory components are not allowed"))
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(invalid_path(rel, "absolute paths are not allowed"))
            }
        }
    }
    Ok(out)
}

/// Like [`checked_relative`], but every segment must be a plain, non-empty name.
///
/// Used for handle-derived directories, where a dropped `.` or empty segment
/// would alias a different resource.
pub fn checked_resource_dir(rel: &Path) -> Result<PathBuf, ResolveError> {
    // `components()` silently drops interior `.`, so inspect the raw segments.
    let raw = rel.to_string_lossy();
    if raw
        .split(std::path::is_separator)
        .any(|seg| seg.is_empty() || seg == ".")
    {
        return Err(invalid_path(rel, "empty or `.` segments are not allowed"));
    }
    checked_relative(rel)
}

fn invalid_path(rel: &Path, reason: &'static str) -> ResolveError {
    ResolveError::InvalidPath {
        path: rel.display().to_string(),
        reason,
    }
}

/// Highest numeric subdirectory of `dir`, or `None` if there is none (or `dir` is missing).
pub fn latest_version(dir: &Path) -> Result<Option<u32>, ResolveError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ResolveError::io(format!("list versions in {}", dir.display()), e)),
    };

    let mut latest = None;
    for entry in entries {
        let entry =
            entry.map_err(|e| ResolveError::io(format!("list versions in {}", dir.display()), e))?;
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if !is_dir {
            continue;
        }
        if let Some(v) = entry.file_name().to_str().and_then(|s| s.parse::<u32>().ok()) {
            latest = latest.max(Some(v));
        }
    }
    Ok(latest)
}

/// True if `path` exists; errors other than "not found" are propagated.
pub fn exists(path: &Path) -> Result<bool, ResolveError> {
    match fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(ResolveError::io(format!("stat {}", path.display()), e)),
    }
}

/// Size of a file, or the total size of all files below a directory.
///
/// `path` itself may be a symlink. Below it, symlinks to files count with the
/// target's size; symlinks to directories and dangling links are skipped.
pub fn disk_usage(path: &Path) -> io::Result<u64> {
    let meta = fs::metadata(path)?;
    if !meta.is_dir() {
        return Ok(meta.len());
    }
    dir_usage(path)
}

fn dir_usage(dir: &Path) -> io::Result<u64> {
    let mut total = 0u64;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let meta = fs::symlink_metadata(&path)?;
        let size = if meta.file_type().is_symlink() {
            match fs::metadata(&path) {
                Ok(target) if target.is_file() => target.len(),
                _ => {
                    tracing::debug!("skipping symlink {} while measuring", path.display());
                    0
                }
            }
        } else if meta.is_dir() {
            dir_usage(&path)?
        } else {
            meta.len()
        };
        total = total.saturating_add(size);
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn relative_paths_pass_through() {
        assert_eq!(
            checked_relative(Path::new("a/./b/c.csv")).unwrap(),
            Path::new("a/b/c.csv")
        );
    }

    #[test]
    fn escaping_paths_rejected() {
        assert!(matches!(
            checked_relative(Path::new("../secret")),
            Err(ResolveError::InvalidPath { .. })
        ));
        assert!(matches!(
            checked_relative(Path::new("a/../../b")),
            Err(ResolveError::InvalidPath { .. })
        ));
        assert!(matches!(
            checked_relative(Path::new("/etc/passwd")),
            Err(ResolveError::InvalidPath { .. })
        ));
    }

    #[test]
    fn resource_dir_rejects_current_dir() {
        for rel in ["models/a/./c/d", "./models/a/b/c", "models//b/c/d"] {
            assert!(matches!(
                checked_resource_dir(Path::new(rel)),
                Err(ResolveError::InvalidPath { .. })
            ));
        }
        assert!(matches!(
            checked_resource_dir(Path::new("models/../b/c/d")),
            Err(ResolveError::InvalidPath { .. })
        ));
        assert_eq!(
            checked_resource_dir(Path::new("models/a/b/c/d")).unwrap(),
            Path::new("models/a/b/c/d")
        );
    }

    #[test]
    fn latest_version_ignores_files_and_non_numeric() {
        let dir = tempdir().unwrap();
        for d in ["1", "10", "2", "draft"] {
            fs::create_dir(dir.path().join(d)).unwrap();
        }
        fs::write(dir.path().join("99"), b"not a dir").unwrap();
        assert_eq!(latest_version(dir.path()).unwrap(), Some(10));
    }

    #[test]
    fn latest_version_missing_dir_is_none() {
        let dir = tempdir().unwrap();
        assert_eq!(latest_version(&dir.path().join("nope")).unwrap(), None);
    }

    #[test]
    fn disk_usage_sums_nested_files() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("a.bin"), vec![0u8; 100]).unwrap();
        fs::write(dir.path().join("sub/b.bin"), vec![0u8; 23]).unwrap();
        assert_eq!(disk_usage(dir.path()).unwrap(), 123);
        assert_eq!(disk_usage(&dir.path().join("a.bin")).unwrap(), 100);
    }

    #[test]
    fn exists_reports_missing() {
        let dir = tempdir().unwrap();
        assert!(exists(dir.path()).unwrap());
        assert!(!exists(&dir.path().join("missing")).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn disk_usage_skips_directory_symlinks() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        fs::write(dir.path().join("data.csv"), vec![0u8; 30]).unwrap();
        symlink(dir.path(), dir.path().join("loop")).unwrap();
        symlink(dir.path().join("data.csv"), dir.path().join("alias.csv")).unwrap();
        symlink(dir.path().join("gone"), dir.path().join("dangling")).unwrap();
        assert_eq!(disk_usage(dir.path()).unwrap(), 60);
    }
}
