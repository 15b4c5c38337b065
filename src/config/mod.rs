use crate::core::clock::DayBoundary;
use crate::models::policy::{DEFAULT_BASE_INTERVAL, DEFAULT_GROWTH_PERCENT};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod migrate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub day_boundary: DayBoundary,
    #[serde(default = "default_base_interval")]
    pub default_base_interval: i64,
    #[serde(default = "default_growth_percent")]
    pub default_growth_percent: i64,
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    #[serde(default = "default_gap_short")]
    pub gap_short_minutes: i64,
    #[serde(default = "default_gap_long")]
    pub gap_long_minutes: i64,
}

fn default_base_interval() -> i64 {
    DEFAULT_BASE_INTERVAL
}
fn default_growth_percent() -> i64 {
    DEFAULT_GROWTH_PERCENT
}
fn default_history_limit() -> usize {
    10
}
fn default_gap_short() -> i64 {
    30
}
fn default_gap_long() -> i64 {
    120
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            day_boundary: DayBoundary::default(),
            default_base_interval: default_base_interval(),
            default_growth_percent: default_growth_percent(),
            history_limit: default_history_limit(),
            gap_short_minutes: default_gap_short(),
            gap_long_minutes: default_gap_long(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rsmokelog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rsmokelog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rsmokelog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rsmokelog.sqlite")
    }

    /// Load configuration from file. A missing file gives the defaults; an
    /// unreadable one does too, with a warning.
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Self::default();
        }

        let parsed = fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|content| {
                serde_yaml::from_str::<Config>(&content).map_err(|e| e.to_string())
            });

        match parsed {
            Ok(mut cfg) => {
                cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
                cfg
            }
            Err(e) => {
                warning(format!(
                    "Ignoring unreadable configuration {}: {}",
                    path.display(),
                    e
                ));
                Self::default()
            }
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = expand_tilde(&name);
            if p.is_absolute() { p } else { dir.join(p) }
        } else {
            dir.join("rsmokelog.sqlite")
        };

        let config = Self::with_database(db_path.clone());

        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(config)
    }

    /// Settings that parse but contradict each other.
    pub fn value_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.gap_short_minutes > self.gap_long_minutes {
            issues.push(format!(
                "gap_short_minutes ({}) is greater than gap_long_minutes ({})",
                self.gap_short_minutes, self.gap_long_minutes
            ));
        }
        issues
    }
}
