use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use stride_editor::ValidationLimits;

/// Current config version. Bump this when changing shape.
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrideConfig {
    /// Schema version. Missing means the current version.
    #[serde(default = "current_version")]
    pub config_version: u32,
    pub created_at: jiff::Timestamp,
    #[serde(default)]
    pub log_format: LogFormat,
    /// Bounds used when validating drafts.
    #[serde(default)]
    pub limits: ValidationLimits,
}

fn current_version() -> u32 {
    CURRENT_VERSION
}

impl Default for StrideConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            created_at: jiff::Timestamp::now(),
            log_format: LogFormat::default(),
            limits: ValidationLimits::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("stride").join("config.json"))
}

pub fn load_config(path: &Path) -> eyre::Result<StrideConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so the version can be checked before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = match json.get("config_version").and_then(|v| v.as_u64()) {
        Some(v) => u32::try_from(v)
            .map_err(|_| eyre::eyre!("config_version {v} is not a valid version"))?,
        None => CURRENT_VERSION,
    };
    check_version(on_disk_version)?;

    let config: StrideConfig = serde_json::from_value(json)?;
    Ok(config)
}

/// Load the config at `path`, falling back to defaults when no file exists.
pub fn load_or_default(path: &Path) -> eyre::Result<StrideConfig> {
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        Ok(StrideConfig::default())
    }
}

/// Refuse configs written by a newer build.
fn check_version(on_disk_version: u32) -> eyre::Result<()> {
    if on_disk_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {on_disk_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update stride."
        ));
    }
    Ok(())
}

pub fn save_config(path: &Path, config: &StrideConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let mut tmp_path = path.as_os_str().to_owned();
    tmp_path.push(".tmp");
    let tmp_path = PathBuf::from(tmp_path);
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
