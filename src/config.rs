use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

/// Root configuration structure, deserialized from `.gradle-miner/config.toml`.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// What to look for while walking the project tree.
    #[serde(default)]
    pub scan: ScanConfig,
    /// Where results are written.
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct ScanConfig {
    /// File names treated as build scripts.
    #[serde(default = "default_build_files")]
    pub build_files: Vec<String>,
    /// Directory names pruned from the walk.
    #[serde(default = "default_skip_dirs")]
    pub skip_dirs: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving `gradle-model.json` and `il-deps.json`.
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

fn default_build_files() -> Vec<String> {
    vec!["build.gradle".to_string()]
}

fn default_skip_dirs() -> Vec<String> {
    vec![".git".to_string(), ".gradle".to_string(), "build".to_string()]
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("results")
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            build_files: default_build_files(),
            skip_dirs: default_skip_dirs(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            dir: default_output_dir(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scan: ScanConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<project_path>/.gradle-miner/config.toml`
/// 3. `~/.config/gradle-miner/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    let project_config = project_path.join(".gradle-miner").join("config.toml");
    if project_config.exists() {
        let content = std::fs::read_to_string(&project_config)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("gradle-miner")
            .join("config.toml");
        if home_config.exists() {
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(Config::default())
}
