use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_offset;
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const FALLBACK_ACTIVITY: &str = "Breathing";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_sessions_dir")]
    pub sessions_dir: String,
    #[serde(default = "default_fallback_activity")]
    pub fallback_activity: String,
    #[serde(default = "default_activities")]
    pub activities: Vec<String>,
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,
    #[serde(default = "default_refresh_ms")]
    pub refresh_ms: u64,
}

fn default_sessions_dir() -> String {
    "sessions".to_string()
}
fn default_fallback_activity() -> String {
    FALLBACK_ACTIVITY.to_string()
}
fn default_activities() -> Vec<String> {
    [
        "Study",
        "Essentials",
        "Procrastinating",
        "Programming",
        "Reading",
        "Web-Surfing",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
fn default_utc_offset() -> String {
    "+09:00".to_string()
}
fn default_refresh_ms() -> u64 {
    50
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sessions_dir: default_sessions_dir(),
            fallback_activity: default_fallback_activity(),
            activities: default_activities(),
            utc_offset: default_utc_offset(),
            refresh_ms: default_refresh_ms(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimerecorder")
        } else {
            let home = dirs::home_dir()
                .or_else(|| env::var("HOME").ok().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from("."));
            home.join(".rtimerecorder")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimerecorder.conf")
    }

    /// Return the full path of the operation journal
    pub fn journal_file() -> PathBuf {
        Self::config_dir().join("rtimerecorder.log")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values that would make the recorder misbehave.
    pub fn validate(&self) -> AppResult<()> {
        parse_offset(&self.utc_offset)?;
        if self.fallback_activity.trim().is_empty() {
            return Err(AppError::Config(
                "fallback_activity must not be empty".to_string(),
            ));
        }
        if self.refresh_ms == 0 {
            return Err(AppError::Config("refresh_ms must be > 0".to_string()));
        }
        Ok(())
    }

    /// The fixed reference offset all timestamps are shown in.
    pub fn offset(&self) -> AppResult<FixedOffset> {
        parse_offset(&self.utc_offset)
    }

    /// Resolved directory sessions are saved into.
    pub fn sessions_path(&self) -> PathBuf {
        expand_tilde(&self.sessions_dir)
    }

    /// List the top-level keys a config file is missing (filled by defaults).
    pub fn missing_fields(content: &str) -> AppResult<Vec<&'static str>> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
        let map = value.as_mapping();

        let known = [
            "sessions_dir",
            "fallback_activity",
            "activities",
            "utc_offset",
            "refresh_ms",
        ];

        Ok(known
            .into_iter()
            .filter(|k| map.map(|m| !m.contains_key(*k)).unwrap_or(true))
            .collect())
    }

    /// Write the configuration file and create the sessions directory.
    ///
    /// In test mode nothing is written to the user's config directory.
    pub fn init_all(&self, is_test: bool) -> AppResult<PathBuf> {
        let sessions = self.sessions_path();
        fs::create_dir_all(&sessions)?;

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(sessions)
    }
}
