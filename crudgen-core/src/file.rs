use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, replacing whatever is already there.
    ///
    /// Returns the path that was written.
    fn write(&self, base: &Path) -> Result<PathBuf> {
        let path = self.path(base);
        write_file(&path, &self.render())?;
        Ok(path)
    }
}

/// Write `content` to `path`, creating missing parent directories.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| Error::create_dir(parent, e))?;
        }
    }
    std::fs::write(path, content).map_err(|e| Error::write(path, e))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Note {
        name: &'static str,
        body: &'static str,
    }

    impl GeneratedFile for Note {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("notes").join(self.name)
        }

        fn render(&self) -> String {
            self.body.to_string()
        }
    }

    #[test]
    fn test_write_file_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "hello").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "first").unwrap();
        write_file(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_file_reports_path_on_failure() {
        let temp = TempDir::new().unwrap();
        // A directory cannot be opened for writing as a file.
        let path = temp.path().join("occupied");
        fs::create_dir(&path).unwrap();

        let err = write_file(&path, "nope").unwrap_err();

        match *err {
            Error::Write { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_blocked_parent_is_create_dir_error() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("notes");
        fs::write(&blocker, "not a directory").unwrap();

        let note = Note {
            name: "a.txt",
            body: "x",
        };
        let err = note.write(temp.path()).unwrap_err();

        assert!(matches!(*err, Error::CreateDir { .. }));
    }

    #[test]
    fn test_generated_file_write_returns_path() {
        let temp = TempDir::new().unwrap();
        let note = Note {
            name: "todo.txt",
            body: "buy milk",
        };

        let written = note.write(temp.path()).unwrap();

        assert_eq!(written, temp.path().join("notes").join("todo.txt"));
        assert_eq!(fs::read_to_string(&written).unwrap(), "buy milk");
    }
}
