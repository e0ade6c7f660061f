use std::fs;
use std::path::{Path, PathBuf};

use super::core::CmdcovConfig;
use crate::core::{CoverageError, Result};

pub const CONFIG_FILE_NAME: &str = ".cmdcov.toml";
const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Configuration together with the file it came from, if any
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedConfig {
    pub config: CmdcovConfig,
    pub source: Option<PathBuf>,
}

/// Pure function to parse config from TOML string
pub fn parse_config(contents: &str) -> std::result::Result<CmdcovConfig, String> {
    toml::from_str::<CmdcovConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load an explicitly named config file; any failure is an error.
pub fn load_config_file(path: &Path) -> Result<LoadedConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        CoverageError::config(format!("Failed to read {}: {}", path.display(), e))
    })?;
    let config = parse_config(&contents).map_err(CoverageError::config)?;
    Ok(LoadedConfig {
        config: config.resolve_relative_to(base_dir(path)),
        source: Some(path.to_path_buf()),
    })
}

/// Try a discovered config file, warning and skipping it when unusable
fn try_load_config_from_path(config_path: &Path) -> Option<LoadedConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    "Failed to read config file {}: {}",
                    config_path.display(),
                    e
                );
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            Some(LoadedConfig {
                config: config.resolve_relative_to(base_dir(config_path)),
                source: Some(config_path.to_path_buf()),
            })
        }
        Err(e) => {
            tracing::warn!("{}. Using defaults.", e);
            None
        }
    }
}

fn base_dir(config_path: &Path) -> &Path {
    config_path.parent().unwrap_or_else(|| Path::new("."))
}

/// Search `start` and its ancestors for a config file.
pub fn discover_config(start: PathBuf) -> LoadedConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            LoadedConfig::default()
        })
}

/// Load the explicit config if given, otherwise discover one from the
/// current directory.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig> {
    if let Some(path) = explicit {
        return load_config_file(path);
    }
    match std::env::current_dir() {
        Ok(current) => Ok(discover_config(current)),
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            Ok(LoadedConfig::default())
        }
    }
}
