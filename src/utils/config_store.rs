//! ConfigStore - Local Configuration Storage

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::constants::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, CONFIG_FILE_NAME};
use crate::domain::catalog::Catalog;
use crate::domain::config::AppConfig;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))
}

/// Get the application config directory
pub fn config_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().to_path_buf())
}

/// Get the application log directory, creating it if missing
pub fn log_dir() -> Result<PathBuf> {
    let dir = project_dirs()?.data_local_dir().join("logs");

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

/// Load `config.toml` from the config directory; defaults when absent
pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load a TOML config file; defaults when absent
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = AppConfig::from_toml_str(&content)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    Ok(config)
}

/// Load the catalog named by the config, or the builtin one
pub fn load_catalog(config: &AppConfig) -> Result<Catalog> {
    let Some(path) = config.catalog_file.as_deref() else {
        return Ok(Catalog::builtin());
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    let catalog = Catalog::from_toml_str(&content)
        .with_context(|| format!("Invalid catalog {}", path.display()))?;
    Ok(catalog)
}
