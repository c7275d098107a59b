//! Atomic file operations.
//!
//! Provides a thin layer for safe whole-file replacement of small settings
//! files. Format handling (TOML, versioned JSON) stays with the caller.

use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

/// Errors that can occur during atomic file operations.
#[derive(Debug)]
pub enum AtomicFileError {
    /// File I/O error.
    IoError(std::io::Error),
    /// File locking error.
    LockError(String),
}

impl AtomicFileError {
    fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            AtomicFileError::IoError(e) => Some(e.kind()),
            AtomicFileError::LockError(_) => None,
        }
    }

    /// True if the OS refused the write (permissions, read-only file system).
    pub fn is_permission_denied(&self) -> bool {
        matches!(
            self.io_kind(),
            Some(std::io::ErrorKind::PermissionDenied | std::io::ErrorKind::ReadOnlyFilesystem)
        )
    }

    /// True if the file was read but is not valid UTF-8.
    pub fn is_invalid_data(&self) -> bool {
        self.io_kind() == Some(std::io::ErrorKind::InvalidData)
    }
}

impl std::fmt::Display for AtomicFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtomicFileError::IoError(e) => write!(f, "I/O error: {}", e),
            AtomicFileError::LockError(e) => write!(f, "Lock error: {}", e),
        }
    }
}

impl std::error::Error for AtomicFileError {}

impl From<std::io::Error> for AtomicFileError {
    fn from(e: std::io::Error) -> Self {
        AtomicFileError::IoError(e)
    }
}

/// A handle to a file that is always replaced as a whole.
///
/// Provides:
/// - **Atomicity**: Writes are all-or-nothing via tmp file + atomic rename
/// - **Isolation**: File locking prevents concurrent writers
/// - **Durability**: Explicit fsync before rename
#[derive(Debug, Clone)]
pub struct AtomicFile {
    path: PathBuf,
}

impl AtomicFile {
    /// Creates a new handle. Nothing is touched on disk.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole file.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(String))`: File content
    /// - `Ok(None)`: File doesn't exist or is blank
    /// - `Err`: Failed to read the file
    pub fn read(&self) -> Result<Option<String>, AtomicFileError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(content))
    }

    /// Replaces the file content atomically.
    ///
    /// Holds an exclusive lock for the duration of the write.
    pub fn write(&self, content: &str) -> Result<(), AtomicFileError> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let _lock = FileLock::acquire(&self.path)?;

        // Write to temporary file in the same directory
        let tmp_path = self.get_temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(content.as_bytes())?;

        // Ensure data is written to disk
        tmp_file.sync_all()?;
        drop(tmp_file);

        // Atomic rename
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        Ok(())
    }

    /// Gets a temporary file path for atomic writes.
    fn get_temp_path(&self) -> Result<PathBuf, AtomicFileError> {
        let file_name = self.path.file_name().ok_or_else(|| {
            AtomicFileError::IoError(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no file name",
            ))
        })?;

        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(self.path.with_file_name(tmp_name))
    }
}

/// An exclusive lock on `<path>.lock`, released when the guard is dropped.
///
/// The lock file itself stays on disk so every writer locks the same inode.
struct FileLock {
    _file: File,
}

impl FileLock {
    /// Acquires an exclusive lock next to the given path.
    fn acquire(path: &Path) -> Result<Self, AtomicFileError> {
        let lock_path = path.with_extension("lock");

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|e| AtomicFileError::LockError(format!("Failed to acquire lock: {}", e)))?;
        }

        Ok(FileLock { _file: file })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicFile::new(temp_dir.path().join("settings.json"));

        file.write("{\"a\":1}").unwrap();

        assert_eq!(file.read().unwrap().as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn test_read_missing_or_blank_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicFile::new(temp_dir.path().join("missing.json"));
        assert!(file.read().unwrap().is_none());

        let blank_path = temp_dir.path().join("blank.json");
        fs::write(&blank_path, "  \n").unwrap();
        assert!(AtomicFile::new(blank_path).read().unwrap().is_none());
    }

    #[test]
    fn test_write_creates_parent_and_leaves_no_temp_files() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("settings.json");
        let file = AtomicFile::new(path.clone());

        file.write("first").unwrap();
        file.write("second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        assert!(!temp_dir.path().join("nested").join(".settings.json.tmp").exists());
    }

    #[test]
    fn test_lock_file_is_kept_between_writes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        let file = AtomicFile::new(path.clone());

        file.write("first").unwrap();
        let lock_path = path.with_extension("lock");
        assert!(lock_path.exists());

        file.write("second").unwrap();
        assert!(lock_path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_concurrent_writers_leave_one_complete_payload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");

        let payloads: Vec<String> = (0..8)
            .map(|i| format!("writer-{}-", i).repeat(512))
            .collect();
        let handles: Vec<_> = payloads
            .iter()
            .cloned()
            .map(|payload| {
                let file = AtomicFile::new(path.clone());
                std::thread::spawn(move || file.write(&payload))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap().unwrap();
        }

        let content = fs::read_to_string(&path).unwrap();
        assert!(payloads.contains(&content));
        assert!(!temp_dir.path().join(".settings.json.tmp").exists());
    }

    #[test]
    fn test_error_kinds() {
        let read_only = AtomicFileError::from(std::io::Error::from(
            std::io::ErrorKind::ReadOnlyFilesystem,
        ));
        assert!(read_only.is_permission_denied());
        assert!(!read_only.is_invalid_data());

        let denied =
            AtomicFileError::from(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        assert!(denied.is_permission_denied());

        let lock = AtomicFileError::LockError("busy".to_string());
        assert!(!lock.is_permission_denied());
        assert!(!lock.is_invalid_data());
    }

    #[test]
    fn test_read_non_utf8_is_invalid_data() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, [0xff, 0xfe, 0x7b]).unwrap();

        let err = AtomicFile::new(path).read().unwrap_err();
        assert!(err.is_invalid_data());
    }
}
