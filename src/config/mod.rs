use crate::core::calculator::reorder::{
    DEFAULT_COVERAGE_DAYS, DEFAULT_THRESHOLD_DAYS, ReorderPolicy,
};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::path::{expand_tilde, resolve_in};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "rtablets";
const CONFIG_FILE: &str = "rtablets.conf";
const DB_FILE: &str = "rtablets.sqlite";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_threshold")]
    pub reorder_threshold_days: i64,
    #[serde(default = "default_coverage")]
    pub reorder_coverage_days: i64,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_threshold() -> i64 {
    DEFAULT_THRESHOLD_DAYS
}
fn default_coverage() -> i64 {
    DEFAULT_COVERAGE_DAYS
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            reorder_threshold_days: default_threshold(),
            reorder_coverage_days: default_coverage(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join(APP_DIR)
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(format!(".{APP_DIR}"))
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DB_FILE)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let mut cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {}", path.display(), e)))?;

        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> AppResult<()> {
        if self.reorder_threshold_days < 0 {
            return Err(AppError::Config(
                "reorder_threshold_days cannot be negative".into(),
            ));
        }
        if self.reorder_coverage_days < 0 {
            return Err(AppError::Config(
                "reorder_coverage_days cannot be negative".into(),
            ));
        }
        Ok(())
    }

    pub fn reorder_policy(&self) -> ReorderPolicy {
        ReorderPolicy {
            threshold_days: self.reorder_threshold_days,
            coverage_days: self.reorder_coverage_days,
        }
    }

    /// First character of `separator_char`, `-` if empty.
    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Initialize configuration and database files.
    ///
    /// Returns the path of the database to initialize. In test mode the
    /// config file is left untouched.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => resolve_in(&dir, name),
            None => dir.join(DB_FILE),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;

            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            fs::write(Self::config_file(), config.to_yaml()?)?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}
