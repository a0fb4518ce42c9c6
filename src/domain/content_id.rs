//! Content identity: files are addressed by a digest of their bytes

use crate::error::{FtagError, Result};
use sha2::{Digest, Sha256};
use std::fmt::{self, Write as _};
use std::fs::File;
use std::io;
use std::path::Path;

/// A 64-character lowercase hex SHA-256 digest of a file's content.
///
/// Two files with identical bytes share a key regardless of path,
/// timestamps, or permissions. This is the identity tags attach to.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContentKey(String);

impl ContentKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_digest(digest: &[u8]) -> Self {
        let mut hex = String::with_capacity(digest.len() * 2);
        for byte in digest {
            let _ = write!(&mut hex, "{byte:02x}");
        }
        ContentKey(hex)
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the content key for the file at `path`.
///
/// Streams the file through the hasher, so arbitrarily large files never
/// need to be resident in memory. Returns `FtagError::NotFound` when the
/// path is missing or not a regular file, `FtagError::Io` on a read
/// failure mid-stream.
pub fn identify(path: &Path) -> Result<ContentKey> {
    if !path.is_file() {
        return Err(FtagError::NotFound(path.to_path_buf()));
    }

    let mut file = File::open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound || e.kind() == io::ErrorKind::PermissionDenied {
            FtagError::NotFound(path.to_path_buf())
        } else {
            FtagError::Io(e)
        }
    })?;

    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;

    let key = ContentKey::from_digest(&hasher.finalize());
    tracing::debug!(path = %path.display(), key = %key, "hashed file content");
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_known_digest() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("hello.txt");
        fs::write(&path, "hello").unwrap();

        let key = identify(&path).unwrap();
        assert_eq!(
            key.as_str(),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn test_key_is_fixed_length_lowercase_hex() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.bin");
        fs::write(&path, [0u8, 255, 17, 42]).unwrap();

        let key = identify(&path).unwrap();
        assert_eq!(key.as_str().len(), 64);
        assert!(key
            .as_str()
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_identical_content_identical_key() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a.txt");
        let b = temp.path().join("deeply-different-name.md");
        fs::write(&a, "same bytes").unwrap();
        fs::write(&b, "same bytes").unwrap();

        assert_eq!(identify(&a).unwrap(), identify(&b).unwrap());
    }

    #[test]
    fn test_different_content_different_key() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a.txt");
        let b = temp.path().join("b.txt");
        fs::write(&a, "one").unwrap();
        fs::write(&b, "two").unwrap();

        assert_ne!(identify(&a).unwrap(), identify(&b).unwrap());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.txt");

        let err = identify(&missing).unwrap_err();
        assert!(matches!(err, FtagError::NotFound(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_directory_is_not_found() {
        let temp = TempDir::new().unwrap();

        let err = identify(temp.path()).unwrap_err();
        assert!(matches!(err, FtagError::NotFound(_)));
    }
}
