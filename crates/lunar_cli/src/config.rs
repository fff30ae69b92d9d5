use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "lunar.toml";

/// Top-level configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct LunarConfig {
    /// Phase classification settings.
    #[serde(default)]
    pub phase: PhaseToml,

    /// Random line sources.
    #[serde(default)]
    pub lines: LinesToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhaseToml {
    #[serde(default = "default_wrap")]
    pub wrap: String,
    #[serde(default = "default_true")]
    pub validate: bool,
}

impl Default for PhaseToml {
    fn default() -> Self {
        Self {
            wrap: default_wrap(),
            validate: default_true(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct LinesToml {
    pub exclamations: Option<PathBuf>,
    pub quotes: Option<PathBuf>,
    pub seed: Option<u64>,
}

fn default_wrap() -> String {
    "single-cycle".to_string()
}

fn default_true() -> bool {
    true
}

impl LunarConfig {
    /// Load from an explicit path, or from `lunar.toml` if it exists, or defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::read(p),
            None => {
                let p = Path::new(DEFAULT_CONFIG_FILE);
                if p.exists() {
                    Self::read(p)
                } else {
                    debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "reading config");
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}
