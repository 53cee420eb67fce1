//! Persistence collaborator for show metadata.
//!
//! Show records are written as one JSON file per league ID under the
//! platform's cache directory. Writes are fire-and-forget from the mapper's
//! perspective; a failed write never fails a scrape.

use crate::types::ShowInfo;
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The platform cache directory could not be determined
    #[error("Failed to determine cache directory location")]
    CacheDirectoryNotFound,

    /// The cache directory could not be created
    #[error("Failed to create cache directory at {path}: {source}")]
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A cached record could not be read
    #[error("Failed to read cache file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A record could not be written
    #[error("Failed to write cache file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A cached record was not valid JSON for a show
    #[error("Failed to deserialize cache file {path}: {source}")]
    DeserializationFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A show record could not be serialized
    #[error("Failed to serialize show info: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// File-backed cache of show records, keyed by league ID.
pub struct ShowInfoCache {
    cache_dir: PathBuf,
}

impl ShowInfoCache {
    /// Opens the cache under the platform's standard cache directory,
    /// creating it when missing.
    pub fn open() -> Result<Self, CacheError> {
        let proj_dirs = ProjectDirs::from("", "", "sportsdb_scraper")
            .ok_or(CacheError::CacheDirectoryNotFound)?;
        Self::at(proj_dirs.cache_dir().join("shows"))
    }

    /// Opens the cache at an explicit directory. Tests use this to keep
    /// cache files out of the real cache location.
    pub fn at(dir: impl Into<PathBuf>) -> Result<Self, CacheError> {
        let cache_dir = dir.into();
        fs::create_dir_all(&cache_dir).map_err(|e| CacheError::DirectoryCreationFailed {
            path: cache_dir.clone(),
            source: e,
        })?;
        Ok(Self { cache_dir })
    }

    /// Persists a show record under its league ID, replacing any previous one.
    pub fn store(&self, show_info: &ShowInfo) -> Result<(), CacheError> {
        let file_path = self.file_path(&show_info.id);
        let content = serde_json::to_string_pretty(show_info)?;
        fs::write(&file_path, content).map_err(|e| CacheError::WriteFailed {
            path: file_path,
            source: e,
        })?;
        Ok(())
    }

    /// Loads a cached show record, or `None` when the league was never cached.
    pub fn load(&self, league_id: &str) -> Result<Option<ShowInfo>, CacheError> {
        let file_path = self.file_path(league_id);
        if !file_path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&file_path).map_err(|e| CacheError::ReadFailed {
            path: file_path.clone(),
            source: e,
        })?;
        let show_info =
            serde_json::from_str(&content).map_err(|e| CacheError::DeserializationFailed {
                path: file_path,
                source: e,
            })?;
        Ok(Some(show_info))
    }

    fn file_path(&self, league_id: &str) -> PathBuf {
        self.cache_dir
            .join(format!("{}.json", sanitize_key(league_id)))
    }
}

/// Keys are league IDs and should be plain digits, but anything that is not
/// filename-safe is replaced before touching the filesystem.
fn sanitize_key(key: &str) -> String {
    key.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SeasonEntry;
    use std::collections::HashMap;

    fn sample_show() -> ShowInfo {
        ShowInfo {
            id: "4328".to_string(),
            name: Some("English Premier League".to_string()),
            description_en: Some("Top flight football".to_string()),
            formed_year: Some("1992".to_string()),
            first_event_date: Some("1992-08-15".to_string()),
            sport: Some("Soccer".to_string()),
            tv_rights: None,
            country: Some("England".to_string()),
            fanart1: None,
            fanart2: None,
            fanart3: None,
            poster: None,
            banner: None,
            ratings: HashMap::new(),
            seasons: Some(vec![SeasonEntry {
                season_num: 2024,
                season_name: "2024-2025".to_string(),
            }]),
        }
    }

    #[test]
    fn store_then_load_round_trips_a_show_record() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ShowInfoCache::at(dir.path().join("shows")).unwrap();
        let show = sample_show();

        cache.store(&show).unwrap();
        let loaded = cache.load("4328").unwrap().unwrap();

        assert_eq!(loaded, show);
    }

    #[test]
    fn load_of_an_unknown_league_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ShowInfoCache::at(dir.path()).unwrap();

        assert!(cache.load("9999").unwrap().is_none());
    }

    #[test]
    fn sanitize_key_keeps_digits_and_replaces_the_rest() {
        assert_eq!(sanitize_key("4328"), "4328");
        assert_eq!(sanitize_key("A/B c"), "a_b_c");
    }
}
