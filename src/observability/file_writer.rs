//! Rotating file writer with size-based rotation and backup retention.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// Maximum file size before rotation (8 MB).
const MAX_FILE_SIZE_BYTES: u64 = 8 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 2;

/// Thread-safe file writer with automatic size-based rotation.
///
/// When the current file exceeds `MAX_FILE_SIZE_BYTES` it is renamed with a
/// timestamp suffix and a fresh file is started; backups beyond
/// `MAX_BACKUP_FILES` are removed. Writes go through an internal `Mutex`, so
/// a single instance is safe to share.
pub struct RotatingFileWriter {
    /// Path to the primary trace file.
    file_path: PathBuf,
    /// Lazily-initialized file handle (opens on first write).
    writer: Mutex<Option<std::fs::File>>,
}

impl RotatingFileWriter {
    /// Creates a writer for the given path. The file is not opened until the
    /// first write, so construction cannot fail.
    pub const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            writer: Mutex::new(None),
        }
    }

    /// Writes one line (a trailing newline is added) and flushes.
    ///
    /// The file size is checked before writing and rotation happens first if
    /// needed.
    ///
    /// # Errors
    ///
    /// Propagates filesystem errors from rotation, opening, writing, or
    /// flushing, and reports a poisoned mutex as an I/O error.
    pub fn write_line(&self, json: &str) -> std::io::Result<()> {
        let mut writer = self.writer.lock().map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::Other, format!("mutex poisoned: {e}"))
        })?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "no file available"))?;

        writeln!(file, "{json}")?;
        file.flush()?;
        drop(writer);

        Ok(())
    }

    /// Closes the handle and rotates when the file has grown past the limit.
    fn check_and_rotate(&self, writer: &mut Option<std::fs::File>) -> std::io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > MAX_FILE_SIZE_BYTES {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    /// Renames the current file to `<name>.json.<unix_timestamp>` and prunes
    /// old backups.
    fn rotate_files(&self) -> std::io::Result<()> {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or(std::time::Duration::from_secs(0))
            .as_secs();

        let backup_path = self.file_path.with_extension(format!("json.{timestamp}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()?;

        Ok(())
    }

    /// Deletes backups beyond the retention limit, newest first. Individual
    /// deletion failures are ignored so cleanup makes as much progress as it
    /// can.
    fn cleanup_old_backups(&self) -> std::io::Result<()> {
        let parent_dir = self
            .file_path
            .parent()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "no parent directory"))?;

        let file_stem = self
            .file_path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "invalid file name"))?;

        let mut backups: Vec<PathBuf> = fs::read_dir(parent_dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(file_stem) && name.contains(".json."))
            })
            .collect();

        backups.sort_by(|a, b| {
            let a_time = fs::metadata(a).and_then(|m| m.modified()).ok();
            let b_time = fs::metadata(b).and_then(|m| m.modified()).ok();
            b_time.cmp(&a_time)
        });

        for old_backup in backups.iter().skip(MAX_BACKUP_FILES) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl std::fmt::Debug for RotatingFileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFileWriter")
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_lines_to_fresh_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("traces.json");
        let writer = RotatingFileWriter::new(path.clone());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "{\"a\":1}\n{\"b\":2}\n");
    }
}
