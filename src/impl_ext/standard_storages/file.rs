use std::{
    fs, io,
    path::{Path, PathBuf},
};

use fractic_server_error::ServerError;

use crate::{
    entities::DraftStorage,
    errors::{ReadError, WriteError},
};

/// Storage rooted in a directory, one file per key.
///
/// Keys are escaped into file names, so distinct keys always map to distinct
/// files ("accounting-app:draft" -> "accounting-app%3Adraft.json").
#[derive(Debug, Clone)]
pub struct FileDraftStorage {
    dir: PathBuf,
}

impl FileDraftStorage {
    /// The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        let mut name = String::with_capacity(key.len() + 5);
        for b in key.bytes() {
            if b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b'.' {
                name.push(b as char);
            } else {
                name.push_str(&format!("%{:02X}", b));
            }
        }
        name.push_str(".json");
        self.dir.join(name)
    }
}

impl DraftStorage for FileDraftStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ServerError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ReadError::with_debug(key, &e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ServerError> {
        fs::create_dir_all(&self.dir).map_err(|e| WriteError::with_debug(key, &e))?;
        // Write next to the target, then rename, so readers never see a
        // partially written draft.
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|e| WriteError::with_debug(key, &e))?;
        fs::rename(&tmp, &path).map_err(|e| WriteError::with_debug(key, &e))
    }

    fn remove(&self, key: &str) -> Result<(), ServerError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(WriteError::with_debug(key, &e)),
        }
    }
}
