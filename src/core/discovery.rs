use crate::utils::error::{CollectorError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Lists every file below `dir`, depth first, in file-name order.
///
/// An entry whose name equals one of `excludes` is skipped together with
/// everything below it, at any depth.
pub fn file_paths(dir: impl AsRef<Path>, excludes: &[String]) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut paths = Vec::new();
    collect(dir, excludes, &mut paths)?;
    Ok(paths)
}

fn collect(dir: &Path, excludes: &[String], paths: &mut Vec<PathBuf>) -> Result<()> {
    let directory_error = |source| CollectorError::DirectoryError {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(dir)
        .map_err(directory_error)?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(directory_error)?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let name = entry.file_name();
        if excludes.iter().any(|exclude| name.as_os_str() == exclude.as_str()) {
            tracing::debug!("Skipping excluded entry: {}", entry.path().display());
            continue;
        }

        let path = entry.path();
        let file_type = entry.file_type().map_err(directory_error)?;
        if file_type.is_dir() {
            collect(&path, excludes, paths)?;
        } else {
            paths.push(path);
        }
    }

    Ok(())
}

/// Any file name containing `.php` counts, so `index.php.bak` is scanned too.
pub fn is_php_file(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .file_name()
        .is_some_and(|name| name.to_string_lossy().contains(".php"))
}

pub fn php_file_paths(dir: impl AsRef<Path>, excludes: &[String]) -> Result<Vec<PathBuf>> {
    let paths = file_paths(dir, excludes)?;
    Ok(paths.into_iter().filter(|p| is_php_file(p)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
    }

    fn expected(relative: &[&str]) -> Vec<PathBuf> {
        relative.iter().map(|r| fixtures().join(r)).collect()
    }

    #[test]
    fn test_is_php_file() {
        assert!(is_php_file("hirose.php"));
        assert!(is_php_file("legacy/hirose.php.bak"));
        assert!(!is_php_file("yamagishi.txt"));
        assert!(!is_php_file("template.phtml"));
        assert!(!is_php_file("site.php/README.md"));
    }

    #[test]
    fn test_file_paths_walks_recursively() {
        let paths = file_paths(fixtures(), &[]).unwrap();
        assert_eq!(
            paths,
            expected(&[
                "README.md",
                "README.php",
                "src/Test.php",
                "src/Test.txt",
                "vendor/Exclude1.php",
                "vendor/Exclude2.php",
            ])
        );
    }

    #[test]
    fn test_file_paths_excludes_directory() {
        let paths = file_paths(fixtures(), &["vendor".to_string()]).unwrap();
        assert_eq!(
            paths,
            expected(&["README.md", "README.php", "src/Test.php", "src/Test.txt"])
        );
    }

    #[test]
    fn test_file_paths_excludes_file() {
        let paths = file_paths(fixtures(), &["Exclude1.php".to_string()]).unwrap();
        assert_eq!(
            paths,
            expected(&[
                "README.md",
                "README.php",
                "src/Test.php",
                "src/Test.txt",
                "vendor/Exclude2.php",
            ])
        );
    }

    #[test]
    fn test_file_paths_missing_directory() {
        let err = file_paths(fixtures().join("heavensdoor"), &[]).unwrap_err();
        assert!(matches!(err, CollectorError::DirectoryError { .. }));
    }

    #[test]
    fn test_php_file_paths() {
        let paths = php_file_paths(fixtures(), &[]).unwrap();
        assert_eq!(
            paths,
            expected(&[
                "README.php",
                "src/Test.php",
                "vendor/Exclude1.php",
                "vendor/Exclude2.php",
            ])
        );

        let paths = php_file_paths(fixtures(), &["vendor".to_string()]).unwrap();
        assert_eq!(paths, expected(&["README.php", "src/Test.php"]));

        assert!(php_file_paths(fixtures().join("cheaptrick"), &[]).is_err());
    }
}
