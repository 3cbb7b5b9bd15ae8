//! Configuration file support for vision-hive.
//!
//! Provides YAML-based configuration through `vision-hive.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use vision_hive::hierarchy::policies::CapacityPolicy;
use vision_hive::hierarchy::services::PaginationConfig;

const CONFIG_FILENAME: &str = "vision-hive.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub pagination: Option<PaginationSection>,
    pub capacity_policy: Option<CapacityPolicy>,
    pub data_file: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Page size defaults applied to every listing.
#[derive(Debug, Deserialize, Default)]
pub struct PaginationSection {
    pub default_page_size: Option<u32>,
    pub max_page_size: Option<u32>,
}

impl ConfigFile {
    /// Builds the pagination settings, falling back to 10 / 100.
    pub fn pagination_config(&self) -> Result<PaginationConfig> {
        let section = self.pagination.as_ref();
        let default_page_size = section
            .and_then(|p| p.default_page_size)
            .unwrap_or(PaginationConfig::DEFAULT_PAGE_SIZE);
        let max_page_size = section
            .and_then(|p| p.max_page_size)
            .unwrap_or(PaginationConfig::MAX_PAGE_SIZE);

        PaginationConfig::new(default_page_size, max_page_size)
            .map_err(|e| anyhow!("Invalid config: pagination {}", e))
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax \
             and capacity_policy is 'enforced' or 'advisory'.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref pagination) = config.pagination {
        for (name, value) in [
            ("default_page_size", pagination.default_page_size),
            ("max_page_size", pagination.max_page_size),
        ] {
            if value == Some(0) {
                bail!(
                    "Invalid config: pagination.{} must be at least 1.\n\n\
                     💡 Hint: Remove the field to use the built-in default.",
                    name
                );
            }
        }
        if let (Some(default), Some(max)) = (pagination.default_page_size, pagination.max_page_size)
        {
            if default > max {
                bail!(
                    "Invalid config: pagination.default_page_size ({}) exceeds pagination.max_page_size ({}).\n\n\
                     💡 Hint: The default page size must not be larger than the maximum.",
                    default,
                    max
                );
            }
        }
    }
    if let Some(ref data_file) = config.data_file {
        if data_file.as_os_str().is_empty() {
            bail!(
                "Invalid config: data_file must not be empty.\n\n\
                 💡 Hint: Use a path such as \"vision-hive.json\"."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
