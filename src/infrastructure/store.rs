//! Durable and in-memory implementations of the tag store

use crate::domain::expression::TagSet;
use crate::domain::index::TagStore;
use crate::error::{FtagError, Result};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

/// Tag store persisted as a single JSON object on disk.
///
/// The whole map is read on every `get` and rewritten on every `set`, so
/// each operation observes and produces a durable state with no caching
/// layer in between. Writes go to a temp file in the same directory and
/// are renamed into place.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open a store backed by the given file. The file may not exist yet;
    /// a missing file reads as an empty map.
    pub fn open(path: PathBuf) -> Self {
        JsonFileStore { path }
    }

    /// Create an empty store file, failing if one already exists.
    pub fn create(path: PathBuf) -> Result<Self> {
        if path.exists() {
            return Err(FtagError::Config(format!(
                "Store already exists: {}",
                path.display()
            )));
        }
        let store = JsonFileStore { path };
        store.save(&BTreeMap::new())?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, TagSet>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(FtagError::Io(e)),
        };

        serde_json::from_str(&contents).map_err(|e| {
            FtagError::Store(format!(
                "Failed to parse {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    /// Write the full map using a temp-file-then-rename replace.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we
    /// remove the destination first.
    fn save(&self, map: &BTreeMap<String, TagSet>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(map)
            .map_err(|e| FtagError::Store(format!("Failed to serialize index: {}", e)))?;

        let tmp_name = format!(
            "{}.ftag-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("index.json"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, contents)?;

        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl TagStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<TagSet>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &TagSet) -> Result<()> {
        let mut map = self.load()?;
        map.insert(key.to_string(), value.clone());
        self.save(&map)
    }
}

/// In-memory tag store for unit tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    map: HashMap<String, TagSet>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl TagStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<TagSet>> {
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &TagSet) -> Result<()> {
        self.map.insert(key.to_string(), value.clone());
        Ok(())
    }
}
