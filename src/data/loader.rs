//! RON data loader
//!
//! Loads configuration and object templates from external RON files, falling
//! back to hardcoded defaults when a file is missing or broken.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use super::{GameConfig, ObjectTemplates};

const CONFIG_FILE: &str = "config.ron";
const OBJECTS_FILE: &str = "data/objects.ron";

/// Errors reading a data file
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Read and parse one RON file
pub fn load_ron<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let content = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&content).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Manages all external game data
#[derive(Debug, Clone, Default)]
pub struct DataManager {
    pub config: GameConfig,
    pub objects: ObjectTemplates,
}

impl DataManager {
    /// Load from the first data directory that has files, else defaults
    pub fn new() -> Self {
        let roots = data_roots();
        Self {
            config: load_or_default(&roots, CONFIG_FILE),
            objects: load_or_default(&roots, OBJECTS_FILE),
        }
    }

    /// Load from one directory only
    pub fn load_from(root: &Path) -> Self {
        let roots = [root.to_path_buf()];
        Self {
            config: load_or_default(&roots, CONFIG_FILE),
            objects: load_or_default(&roots, OBJECTS_FILE),
        }
    }
}

/// Candidate directories, most specific first
fn data_roots() -> Vec<PathBuf> {
    let mut roots = Vec::new();
    if let Some(proj_dirs) = directories::ProjectDirs::from("com", "tilecrawl", "Tilecrawl") {
        roots.push(proj_dirs.config_dir().to_path_buf());
    }
    roots.push(PathBuf::from("assets"));
    roots
}

fn load_or_default<T: DeserializeOwned + Default>(roots: &[PathBuf], file: &str) -> T {
    for root in roots {
        let path = root.join(file);
        if !path.exists() {
            continue;
        }
        match load_ron(&path) {
            Ok(value) => {
                log::info!("Loaded {}", path.display());
                return value;
            }
            Err(e) => log::warn!("{}. Using defaults.", e),
        }
    }
    log::debug!("No {} found, using defaults", file);
    T::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tilecrawl-{}-{}", name, std::process::id()));
        fs::create_dir_all(dir.join("data")).unwrap();
        dir
    }

    #[test]
    fn test_missing_files_fall_back() {
        let data = DataManager::load_from(Path::new("/nonexistent/tilecrawl"));
        assert_eq!(data.config, GameConfig::default());
        assert_eq!(data.objects, ObjectTemplates::default());
    }

    #[test]
    fn test_broken_file_falls_back() {
        let dir = scratch_dir("broken");
        fs::write(dir.join(CONFIG_FILE), "(map: (width: \"wide\"))").unwrap();

        let err = load_ron::<GameConfig>(&dir.join(CONFIG_FILE)).unwrap_err();
        assert!(matches!(err, DataError::Parse { .. }));
        assert_eq!(DataManager::load_from(&dir).config, GameConfig::default());

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_loads_overrides() {
        let dir = scratch_dir("overrides");
        fs::write(dir.join(CONFIG_FILE), "(seed: Some(77))").unwrap();
        fs::write(dir.join(OBJECTS_FILE), "(allies: [], enemies: [])").unwrap();

        let data = DataManager::load_from(&dir);
        assert_eq!(data.config.seed, Some(77));
        assert!(data.objects.allies.is_empty());

        fs::remove_dir_all(dir).ok();
    }
}
