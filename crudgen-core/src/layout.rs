//! The fixed directory tree every scaffold is written into.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Directories created under the output base, parents first.
pub const LAYOUT_DIRS: [&str; 6] = [
    "app",
    "app/configs",
    "app/handler",
    "app/models",
    "app/responses",
    "app/routes",
];

/// Default output base, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";

/// Output directory tree rooted at a base path.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    base: PathBuf,
}

impl OutputLayout {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Absolute (or base-relative) paths of every layout directory.
    pub fn dirs(&self) -> impl Iterator<Item = PathBuf> + '_ {
        LAYOUT_DIRS.iter().map(|dir| {
            dir.split('/')
                .fold(self.base.clone(), |path, segment| path.join(segment))
        })
    }

    /// Create every layout directory.
    ///
    /// Existing directories are left alone. Stops at the first failure.
    pub fn create(&self) -> Result<()> {
        for dir in self.dirs() {
            std::fs::create_dir_all(&dir).map_err(|e| Error::create_dir(&dir, e))?;
            tracing::debug!(dir = %dir.display(), "ensured directory");
        }
        Ok(())
    }
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_create_makes_all_dirs() {
        let temp = TempDir::new().unwrap();
        let layout = OutputLayout::new(temp.path().join("outputs"));

        layout.create().unwrap();

        for dir in LAYOUT_DIRS {
            assert!(
                temp.path().join("outputs").join(dir).is_dir(),
                "missing {dir}"
            );
        }
    }

    #[test]
    fn test_create_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let layout = OutputLayout::new(temp.path());
        let marker = temp.path().join("app").join("keep.txt");

        layout.create().unwrap();
        fs::write(&marker, "still here").unwrap();
        layout.create().unwrap();

        assert_eq!(fs::read_to_string(marker).unwrap(), "still here");
    }

    #[test]
    fn test_create_fails_when_base_is_a_file() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("outputs");
        fs::write(&base, "").unwrap();

        let err = OutputLayout::new(&base).create().unwrap_err();

        match *err {
            Error::CreateDir { path, .. } => assert_eq!(path, base.join("app")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_default_base() {
        assert_eq!(OutputLayout::default().base(), Path::new("outputs"));
    }
}
