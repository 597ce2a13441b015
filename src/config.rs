use crate::model::boot::BootTimings;
use crate::model::contrast::{Background, ContrastSwitch};
use crate::model::site::SectionId;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur while loading, saving or validating the config
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write config file at {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },

    #[error("Could not determine config directory")]
    NoConfigDir,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How long the splash screen stays up
    pub splash_ms: u64,
    /// Delay between the splash leaving and the navbar arriving
    pub nav_delay_ms: u64,
    /// Delay between the navbar arriving and the content arriving
    pub content_delay_ms: u64,
    pub slide_interval_ms: u64,
    pub frame_rate: u32,
    /// Fraction of the remaining distance smooth scrolling covers per frame
    pub smooth_scroll_lerp: f64,
    /// Rows moved per scroll key press or wheel notch
    pub scroll_step: u16,
    /// Pixel lengths are divided by this to get rows
    pub px_per_row: f64,
    /// Viewport row the navbar samples for contrast
    pub contrast_sample_row: u16,
    /// Section tags the navbar treats as dark
    pub dark_sections: Vec<String>,
    /// Classification used when no tagged section is under the sample row;
    /// unset keeps the previous one
    pub page_background: Option<Background>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            splash_ms: 3000,
            nav_delay_ms: 500,
            content_delay_ms: 300,
            slide_interval_ms: 7000,
            frame_rate: 60,
            smooth_scroll_lerp: 0.1,
            scroll_step: 3,
            px_per_row: 16.0,
            contrast_sample_row: 1,
            dark_sections: vec![
                "section-hero".to_string(),
                "section-footer".to_string(),
                "section-founder".to_string(),
            ],
            page_background: None,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".smartotels-tui"))
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the config from the default location.
    ///
    /// Returns `None` when there is no config file. A file that cannot be
    /// read or parsed is logged and treated as absent.
    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        match Self::load_from(&config_path) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!(error = %e, "ignoring unreadable config");
                None
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save the config to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&config_path)?;
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            // Create config directory if it doesn't exist
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).map_err(|source| ConfigError::Write {
                    path: path.to_path_buf(),
                    source,
                })?;
            }
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reject values the animation engine cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let durations = [
            ("splash_ms", self.splash_ms),
            ("nav_delay_ms", self.nav_delay_ms),
            ("content_delay_ms", self.content_delay_ms),
            ("slide_interval_ms", self.slide_interval_ms),
        ];
        if let Some((field, _)) = durations.iter().find(|(_, ms)| *ms == 0) {
            return Err(ConfigError::InvalidValue {
                field: *field,
                message: "duration must be greater than zero".to_string(),
            });
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::InvalidValue {
                field: "frame_rate",
                message: "must be at least 1".to_string(),
            });
        }
        if !(self.smooth_scroll_lerp > 0.0 && self.smooth_scroll_lerp <= 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "smooth_scroll_lerp",
                message: format!("{} is outside (0, 1]", self.smooth_scroll_lerp),
            });
        }
        if let Some(tag) = self
            .dark_sections
            .iter()
            .find(|tag| SectionId::from_tag(tag).is_none())
        {
            return Err(ConfigError::InvalidValue {
                field: "dark_sections",
                message: format!("unknown section '{}'", tag),
            });
        }
        if !(self.px_per_row > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "px_per_row",
                message: "must be positive".to_string(),
            });
        }
        Ok(())
    }

    pub fn boot_timings(&self) -> BootTimings {
        BootTimings {
            splash: Duration::from_millis(self.splash_ms),
            nav_delay: Duration::from_millis(self.nav_delay_ms),
            content_delay: Duration::from_millis(self.content_delay_ms),
        }
    }

    pub fn slide_interval(&self) -> Duration {
        Duration::from_millis(self.slide_interval_ms)
    }

    /// Navbar contrast classifier for the configured dark sections. The hero
    /// is dark, so that is where the classification starts.
    pub fn contrast_switch(&self) -> ContrastSwitch {
        let switch = ContrastSwitch::new(self.dark_sections.iter().cloned(), Background::Dark);
        match self.page_background {
            Some(background) => switch.with_page_default(background),
            None => switch,
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_micros(1_000_000 / u64::from(self.frame_rate.max(1)))
    }
}
