use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Presentation settings only. The regulatory data (threshold table,
/// rest-time windows, surcharge values) is compiled in and never configured.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_decimals")]
    pub decimals: u8,
    #[serde(default = "default_use_colors")]
    pub use_colors: bool,
    #[serde(default = "default_show_formula_note")]
    pub show_formula_note: bool,
}

fn default_decimals() -> u8 {
    2
}
fn default_use_colors() -> bool {
    true
}
fn default_show_formula_note() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decimals: default_decimals(),
            use_colors: default_use_colors(),
            show_formula_note: default_show_formula_note(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rpegel")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".rpegel")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rpegel.conf")
    }

    /// Load configuration from a file, or return defaults if not found or
    /// unreadable. A custom path (--config) takes precedence.
    pub fn load(custom_path: Option<&str>) -> Self {
        let path = custom_path
            .map(PathBuf::from)
            .unwrap_or_else(Self::config_file);

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
                    crate::ui::messages::warning(format!(
                        "Ignoring malformed config {:?}: {}",
                        path, e
                    ));
                    Config::default()
                }),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Initialize the configuration directory and write the default file.
    /// In test mode nothing is written.
    pub fn init_all(is_test: bool) -> AppResult<()> {
        if is_test {
            return Ok(());
        }

        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config::default();
        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| AppError::Config(format!("serialize defaults: {e}")))?;
        let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;

        println!("✅ Config file: {:?}", Self::config_file());
        Ok(())
    }
}
