use crate::error::{BookError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PROMPT: &str = "> ";
const DEFAULT_LOG_FILTER: &str = "warn";
const DEFAULT_LIST_WIDTH: usize = 100;
const MIN_LIST_WIDTH: usize = 40;

/// Configuration for patientbook, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookConfig {
    /// Prompt printed before each line when running interactively
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// `tracing` filter directive used when `PATIENTBOOK_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Start with the bundled sample patients
    #[serde(default = "default_load_sample_data")]
    pub load_sample_data: bool,

    /// Width of a rendered patient line
    #[serde(default = "default_list_width")]
    pub list_width: usize,
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

fn default_load_sample_data() -> bool {
    true
}

fn default_list_width() -> usize {
    DEFAULT_LIST_WIDTH
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            log_filter: default_log_filter(),
            load_sample_data: default_load_sample_data(),
            list_width: default_list_width(),
        }
    }
}

impl BookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: BookConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.list_width < MIN_LIST_WIDTH {
            return Err(BookError::Config(format!(
                "list_width must be at least {}, got {}",
                MIN_LIST_WIDTH, self.list_width
            )));
        }
        Ok(())
    }
}

/// The per-user config directory, e.g. `~/.config/patientbook` on Linux.
pub fn default_config_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "patientbook", "patientbook")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| BookError::Config("Could not determine config dir".into()))
}
