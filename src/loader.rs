//! File Loader Module
//!
//! A [`Loader`] that reads values from files in a single directory. Each key
//! names a file directly under the root; every value is stamped with the
//! configured TTL.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cache::{Cacheable, Loader};
use crate::config::Config;

// == File Value ==
/// Contents of one file, as served from the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileValue {
    /// The key the file was loaded for
    pub key: String,
    /// UTF-8 file contents
    pub contents: String,
    cache_seconds: i64,
}

impl Cacheable for FileValue {
    fn cache_seconds(&self) -> i64 {
        self.cache_seconds
    }
}

// == File Loader ==
/// Reads `<root>/<key>` on every cache miss.
#[derive(Debug, Clone)]
pub struct FileLoader {
    root: PathBuf,
    cache_seconds: i64,
}

impl FileLoader {
    pub fn new(root: impl Into<PathBuf>, cache_seconds: i64) -> Self {
        Self {
            root: root.into(),
            cache_seconds,
        }
    }

    /// Creates a loader over `config.data_dir` using `config.ttl_seconds`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.data_dir.clone(), config.ttl_seconds)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a key onto a file directly under the root.
    ///
    /// Keys that could address anything else resolve to nothing.
    fn resolve(&self, key: &str) -> Option<PathBuf> {
        let invalid = key.is_empty()
            || key == "."
            || key == ".."
            || key.contains(&['/', '\\', '\0'][..])
            || key.contains(std::path::MAIN_SEPARATOR);
        if invalid {
            return None;
        }
        Some(self.root.join(key))
    }
}

impl Loader<String> for FileLoader {
    type Value = FileValue;
    type Error = io::Error;

    fn load(&self, key: &String) -> io::Result<Option<FileValue>> {
        let Some(path) = self.resolve(key) else {
            debug!(key = %key, "Rejected key that does not name a file");
            return Ok(None);
        };

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(FileValue {
                key: key.clone(),
                contents,
                cache_seconds: self.cache_seconds,
            })),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_load_existing_file() -> TestResult {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("greeting"), "hello")?;

        let loader = FileLoader::new(dir.path(), 30);
        let value = loader.load(&"greeting".to_string())?.unwrap();

        assert_eq!(value.key, "greeting");
        assert_eq!(value.contents, "hello");
        assert_eq!(value.cache_seconds(), 30);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_absent() -> TestResult {
        let dir = TempDir::new()?;
        let loader = FileLoader::new(dir.path(), 30);

        assert!(loader.load(&"nope".to_string())?.is_none());
        Ok(())
    }

    #[test]
    fn test_keys_outside_root_are_absent() -> TestResult {
        let dir = TempDir::new()?;
        let loader = FileLoader::new(dir.path(), 30);

        for key in ["", ".", "..", "../etc/passwd", "nested/file", "back\\slash"] {
            assert!(
                loader.load(&key.to_string()).unwrap().is_none(),
                "key {key:?} should not resolve"
            );
        }
        Ok(())
    }

    #[test]
    fn test_unreadable_contents_is_an_error() -> TestResult {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("blob"), [0xff, 0xfe, 0x00, 0x80])?;
        let loader = FileLoader::new(dir.path(), 30);

        let err = loader.load(&"blob".to_string()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        Ok(())
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            max_size: 10,
            ttl_seconds: -1,
            data_dir: PathBuf::from("/srv/values"),
        };
        let loader = FileLoader::from_config(&config);

        assert_eq!(loader.root(), Path::new("/srv/values"));
        assert_eq!(loader.cache_seconds, -1);
    }
}
