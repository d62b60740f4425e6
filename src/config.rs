use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rigcart", about = "Terminal storefront and PC build configurator")]
pub struct Cli {
    /// View to open on start: "shop" or "builder"
    #[arg(long)]
    pub view: Option<String>,
    /// Load the storefront catalog from a JSON file instead of the built-in one
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    /// Print the catalogs as JSON and exit
    #[arg(long)]
    pub json: bool,
    /// Remove the saved configuration and exit
    #[arg(long)]
    pub reset: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartView {
    #[serde(rename = "shop")]
    Shop,
    #[serde(rename = "builder")]
    Builder,
}

/// UI preferences persisted between sessions. Cart contents are
/// deliberately not part of this; the cart lives and dies with the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedConfig {
    pub currency: String,
    pub start_view: StartView,
    pub show_subtotals: bool,
}

impl Default for SavedConfig {
    fn default() -> Self {
        SavedConfig {
            currency: "₱".to_string(),
            start_view: StartView::Shop,
            show_subtotals: true,
        }
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rigcart").join("config.json"))
}

fn load_from(path: &Path) -> Option<SavedConfig> {
    let data = fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}

fn save_to(path: &Path, config: &SavedConfig) -> Result<(), io::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)
}

/// Load the saved configuration, if any. A missing or unreadable file is
/// simply "no saved configuration".
pub fn load_config() -> Option<SavedConfig> {
    load_from(&config_path()?)
}

pub fn save_config(config: &SavedConfig) -> Result<(), io::Error> {
    let path = config_path()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no config directory available"))?;
    save_to(&path, config)
}

/// Remove the saved configuration. Ok(true) when a file was removed,
/// Ok(false) when there was nothing to remove.
pub fn reset_config() -> Result<bool, io::Error> {
    let Some(path) = config_path() else {
        return Ok(false);
    };
    if path.exists() {
        fs::remove_file(&path)?;
        Ok(true)
    } else {
        Ok(false)
    }
}
