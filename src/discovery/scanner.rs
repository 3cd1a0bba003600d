//! Recursive file enumeration

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Lazily enumerate all regular files under a scan root.
///
/// Entries that cannot be read (broken symlinks, permission errors during
/// traversal) are silently dropped; per-file failures are handled later
/// when the record is built. Order is whatever the filesystem yields.
pub fn walk_files(scan_root: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(scan_root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            debug!("Discovered: {}", e.path().display());
            e.into_path()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_walks_nested_directories() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.mov"), b"x").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("b.png"), b"x").unwrap();

        let mut names: Vec<String> = walk_files(dir.path())
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["a.mov", "b.png"]);
    }

    #[test]
    fn test_directories_are_not_yielded() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("empty")).unwrap();
        assert_eq!(walk_files(dir.path()).count(), 0);
    }
}
