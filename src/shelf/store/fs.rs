use super::{DataStore, LibraryData};
use crate::error::{Result, ShelfError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_DATA_FILE: &str = "library_data.json";

/// Persists the library as a single JSON file.
///
/// Saving overwrites the file in place. A crash mid-write can truncate it.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ShelfError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<LibraryData> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(LibraryData::default()),
            Err(e) => return Err(ShelfError::Io(e)),
        };
        let data: LibraryData =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(data)
    }

    fn save(&mut self, data: &LibraryData) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(data).map_err(ShelfError::Serialization)?;
        fs::write(&self.path, content).map_err(ShelfError::Io)?;
        debug!(path = %self.path.display(), "library saved");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
