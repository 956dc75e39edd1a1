use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::ScanConfig;

/// Locate candidate build scripts under `root`.
///
/// Walks the whole tree, keeping regular files whose file name is one of the
/// configured build-script names and pruning the configured directory names
/// (VCS metadata, Gradle caches, build output). Results are sorted so the
/// aggregate output is deterministic.
pub fn find_build_scripts(root: &Path, scan: &ScanConfig) -> Vec<PathBuf> {
    let mut scripts: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| {
            // depth 0 is the scan root itself; never prune it
            if entry.depth() > 0 && entry.file_type().is_dir() {
                let name = entry.file_name().to_string_lossy();
                return !scan.skip_dirs.iter().any(|d| d.as_str() == name);
            }
            true
        })
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            let name = entry.file_name().to_string_lossy();
            scan.build_files.iter().any(|f| f.as_str() == name)
        })
        .map(|entry| entry.into_path())
        .collect();

    scripts.sort();
    scripts
}

/// Strip `root` from `path` for reporting; falls back to the full path when
/// the file is not under the root.
pub fn relative_to(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScanConfig;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, rel: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "").unwrap();
    }

    #[test]
    fn test_finds_nested_build_scripts_sorted() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "build.gradle");
        touch(tmp.path(), "module-b/build.gradle");
        touch(tmp.path(), "module-a/build.gradle");
        touch(tmp.path(), "module-a/src/Main.java");

        let found = find_build_scripts(tmp.path(), &ScanConfig::default());
        let rel: Vec<PathBuf> = found
            .iter()
            .map(|p| relative_to(p, tmp.path()))
            .collect();
        assert_eq!(
            rel,
            vec![
                PathBuf::from("build.gradle"),
                PathBuf::from("module-a/build.gradle"),
                PathBuf::from("module-b/build.gradle"),
            ]
        );
    }

    #[test]
    fn test_skips_configured_directories() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "build.gradle");
        touch(tmp.path(), "build/build.gradle");
        touch(tmp.path(), ".gradle/build.gradle");

        let found = find_build_scripts(tmp.path(), &ScanConfig::default());
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_respects_configured_file_names() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "build.gradle");
        touch(tmp.path(), "build.gradle.kts");

        let scan = ScanConfig {
            build_files: vec!["build.gradle".into(), "build.gradle.kts".into()],
            ..ScanConfig::default()
        };
        let found = find_build_scripts(tmp.path(), &scan);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_relative_to_outside_root_keeps_full_path() {
        let path = PathBuf::from("/elsewhere/build.gradle");
        assert_eq!(relative_to(&path, Path::new("/project")), path);
    }
}
