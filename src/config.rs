use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub queue: QueueConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Capacity used when no usable size argument is given
    pub default_capacity: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Output format: "text" or "json"
    pub format: ReportFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Text,
    Json,
}

// ── Defaults ─────────────────────────────────────────────────────────

pub const DEFAULT_CAPACITY: usize = 10;

impl Default for QueueConfig {
    fn default() -> Self {
        Self { default_capacity: DEFAULT_CAPACITY }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { format: ReportFormat::Text }
    }
}

// ── Load / Save ───────────────────────────────────────────────────────

impl Config {
    pub fn load() -> Self {
        match try_load() {
            Ok(c)  => c,
            Err(e) => {
                log::info!("using default config ({})", e);
                // Write defaults on first run (best-effort)
                if let Err(e) = try_write_defaults() {
                    log::warn!("could not write default config: {}", e);
                }
                Config::default()
            }
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("boundq").join("boundq.toml"))
    }

    /// Capacity to fall back on; a zero in the file is treated as unset.
    pub fn default_capacity(&self) -> usize {
        if self.queue.default_capacity == 0 { DEFAULT_CAPACITY } else { self.queue.default_capacity }
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

fn try_load() -> Result<Config> {
    let path = Config::config_path().ok_or_else(|| anyhow::anyhow!("no config dir"))?;
    let text = fs::read_to_string(&path)?;
    let cfg = Config::parse(&text)?;
    log::info!("loaded config from {}", path.display());
    Ok(cfg)
}

fn try_write_defaults() -> Result<()> {
    let path = Config::config_path().ok_or_else(|| anyhow::anyhow!("no config dir"))?;
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(&Config::default())?;
    fs::write(path, format!("# boundq configuration\n# Generated on first run, edit freely\n\n{}", text))?;
    Ok(())
}
