//! File-backed key-value store
//!
//! Each key is one file inside the tracker directory. Writers take an
//! exclusive lock on the directory's `.lock` file before touching the temp
//! file, then rename it over the target, so a reader never sees a
//! half-written value and two writers never share a temp file.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::kv::{KeyValueStore, StorageError};

/// Serializes writers within one store directory
const LOCK_FILE: &str = ".lock";

/// Store keeping one file per key in a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the directory holding the store files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file path for a key
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    fn read_err(key: &str) -> impl FnOnce(std::io::Error) -> StorageError + '_ {
        move |source| StorageError::Read {
            key: key.to_string(),
            source,
        }
    }

    fn write_err(key: &str) -> impl FnOnce(std::io::Error) -> StorageError + '_ {
        move |source| StorageError::Write {
            key: key.to_string(),
            source,
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);

        let mut file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Self::read_err(key)(e)),
        };

        // Acquire shared lock for reading
        file.lock_shared().map_err(Self::read_err(key))?;

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(Self::read_err(key))?;

        // Lock is released when file is dropped
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|source| StorageError::Encoding {
                key: key.to_string(),
                source,
            })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(Self::write_err(key))?;

        let path = self.path_for(key);
        let temp_path = self.dir.join(format!("{}.tmp", key));

        let lock = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(self.dir.join(LOCK_FILE))
            .map_err(Self::write_err(key))?;
        lock.lock_exclusive().map_err(Self::write_err(key))?;

        {
            // Truncating is safe only once the lock is held
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .map_err(Self::write_err(key))?;

            let mut writer = BufWriter::new(&file);
            writer
                .write_all(value.as_bytes())
                .map_err(Self::write_err(key))?;
            writer.flush().map_err(Self::write_err(key))?;
        }

        // Atomic rename, still under the lock
        fs::rename(&temp_path, &path).map_err(Self::write_err(key))?;

        // Lock is released when the lock file is dropped
        Ok(())
    }
}
