//! Initialize tag database use case

use crate::error::Result;
use crate::infrastructure::TagRepository;
use std::fs;
use std::path::Path;

/// Initialize a new tag database at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = TagRepository::new(path.to_path_buf());
    repo.initialize()?;

    println!("Initialized ftag database at {}", path.display());

    Ok(())
}
