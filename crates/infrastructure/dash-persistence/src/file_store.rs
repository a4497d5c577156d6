use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::{default_preferences_path, PreferenceError, PreferenceStore};

type Document = BTreeMap<String, String>;

/// Preferences kept as a flat JSON object in a single file.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FilePreferenceStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn open_default() -> Result<Self, PreferenceError> {
        Ok(Self::at(default_preferences_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Document, PreferenceError> {
        if !self.path.exists() {
            return Ok(Document::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Document::new());
        }
        Ok(serde_json::from_str(&content)?)
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.read_document()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut doc = match self.read_document() {
            Ok(doc) => doc,
            Err(PreferenceError::Serde(e)) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "Discarding unreadable preference document: {e}"
                );
                Document::new()
            }
            Err(e) => return Err(e),
        };
        doc.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&doc)?;
        atomic_write(&self.path, json.as_bytes())
    }
}

fn atomic_write(path: &Path, contents: &[u8]) -> Result<(), PreferenceError> {
    let tmp_path = {
        let mut name = path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    };

    let mut file = fs::File::create(&tmp_path)?;
    file.write_all(contents)?;
    file.sync_all()?;
    drop(file);

    match fs::rename(&tmp_path, path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            fs::remove_file(path).ok();
            fs::rename(&tmp_path, path)?;
            Ok(())
        }
        Err(e) => {
            fs::remove_file(&tmp_path).ok();
            Err(e.into())
        }
    }
}
