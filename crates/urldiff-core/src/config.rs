use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default switch values loaded from `~/.config/urldiff/config.toml`.
///
/// Each field mirrors a CLI flag. A flag given on the command line always
/// enables its option; the file only changes the default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UrldiffConfig {
    /// Also diff URL hostnames (`--hostname`).
    #[serde(default)]
    pub diff_hostname: bool,
    /// Only print differing names (`--names`).
    #[serde(default)]
    pub names_only: bool,
    /// Use `+`/`-` markers instead of `<`/`>` (`--unified`).
    #[serde(default)]
    pub unified: bool,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urldiff")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrldiffConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrldiffConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: UrldiffConfig = toml::from_str(&data)?;
    Ok(cfg)
}
