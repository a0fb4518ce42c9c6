//! Tag database discovery and initialization

use crate::error::{FtagError, Result};
use crate::infrastructure::store::JsonFileStore;
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

const FTAG_DIR: &str = ".ftag";
const INDEX_FILE: &str = "index.json";

/// Locates the `.ftag` directory holding the config and index files.
#[derive(Debug, Clone)]
pub struct TagRepository {
    pub root: PathBuf,
}

impl TagRepository {
    /// Create a repository rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        TagRepository { root }
    }

    /// Discover the database root by walking up from the current directory.
    /// First checks the FTAG_ROOT environment variable, then falls back to
    /// discovery.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("FTAG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_ftag_dir(&path) {
                return Ok(TagRepository::new(path));
            } else {
                return Err(FtagError::Config(format!(
                    "FTAG_ROOT is set to '{}' but no .ftag directory found. \
                    Run 'ftag init' in that directory or unset FTAG_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the database root by walking up from a specific directory.
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_ftag_dir(&current) {
                return Ok(TagRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(FtagError::NotInitialized(start.to_path_buf()));
                }
            }
        }
    }

    fn has_ftag_dir(path: &Path) -> bool {
        path.join(FTAG_DIR).is_dir()
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_ftag_dir(&self.root)
    }

    /// Create the `.ftag` directory with a default config and empty index.
    pub fn initialize(&self) -> Result<()> {
        let ftag_dir = self.root.join(FTAG_DIR);

        if ftag_dir.exists() {
            return Err(FtagError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&ftag_dir)?;
        Config::default().save_to_dir(&self.root)?;
        JsonFileStore::create(ftag_dir.join(INDEX_FILE))?;
        Ok(())
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    /// Open the index store for this repository, refusing stores written
    /// by an incompatible version.
    pub fn open_store(&self) -> Result<JsonFileStore> {
        self.load_config()?.ensure_supported()?;
        Ok(JsonFileStore::open(
            self.root.join(FTAG_DIR).join(INDEX_FILE),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_structure() {
        let temp = TempDir::new().unwrap();
        let repo = TagRepository::new(temp.path().to_path_buf());

        assert!(!repo.is_initialized());
        repo.initialize().unwrap();

        assert!(repo.is_initialized());
        assert!(temp.path().join(".ftag/config.toml").exists());
        assert!(temp.path().join(".ftag/index.json").exists());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let repo = TagRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();
        let err = repo.initialize().unwrap_err();
        assert!(matches!(err, FtagError::Config(_)));
    }

    #[test]
    fn test_discover_from_nested_directory() {
        let temp = TempDir::new().unwrap();
        let repo = TagRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        let nested = temp.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();

        let found = TagRepository::discover_from(&nested).unwrap();
        assert_eq!(found.root, temp.path());
    }

    #[test]
    fn test_open_store_after_initialize() {
        let temp = TempDir::new().unwrap();
        let repo = TagRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        let store = repo.open_store().unwrap();
        assert!(store.path().ends_with(".ftag/index.json"));
    }

    #[test]
    fn test_discover_without_database_fails() {
        let temp = TempDir::new().unwrap();

        let err = TagRepository::discover_from(temp.path()).unwrap_err();
        assert!(matches!(err, FtagError::NotInitialized(_)));
        assert_eq!(err.exit_code(), 3);
    }
}
