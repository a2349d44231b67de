// src/config.rs
//
// Configuration is loaded from (in order of precedence):
// 1. Command-line arguments
// 2. Environment variables (INTELLIGENTSIA_*)
// 3. Config file (~/.config/intelligentsia/config.toml, or --config)
// 4. Default values

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};
use crate::i18n::Language;

pub const ENV_PREFIX: &str = "INTELLIGENTSIA_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding both log files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_contact_file")]
    pub contact_file: String,

    #[serde(default = "default_guestbook_file")]
    pub guestbook_file: String,

    /// Static pages, stylesheet, script and images.
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,

    #[serde(default)]
    pub default_language: Language,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub json_logs: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_contact_file() -> String {
    "messages.txt".to_string()
}

fn default_guestbook_file() -> String {
    "guestbook.txt".to_string()
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_dir: default_data_dir(),
            contact_file: default_contact_file(),
            guestbook_file: default_guestbook_file(),
            public_dir: default_public_dir(),
            default_language: Language::default(),
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

impl Config {
    /// Layers defaults, the TOML file and the environment.
    pub fn figment(config_path: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Loads configuration from all sources.
    ///
    /// Reports configuration errors on stderr and falls back to defaults.
    pub fn load(config_path: &Path) -> Self {
        match Self::figment(config_path).extract::<Config>() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: configuration error, using defaults");
                eprintln!("  Config file: {}", config_path.display());
                eprintln!("  Error: {}", e);
                Config::default()
            }
        }
    }

    /// Returns the path to the default config file.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("intelligentsia")
    }

    pub fn contact_path(&self) -> PathBuf {
        self.data_dir.join(&self.contact_file)
    }

    pub fn guestbook_path(&self) -> PathBuf {
        self.data_dir.join(&self.guestbook_file)
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| SiteError::InvalidInput(format!("Invalid listen address: {}", e)))
    }

    /// Writes the configuration as TOML, creating the parent directory.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let toml_str = toml::to_string_pretty(self).map_err(|e| SiteError::Config(e.to_string()))?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }
}

/// Prints the effective configuration and its sources.
pub fn show_config(config: &Config, config_path: &Path) {
    println!("Intelligentsia Configuration");
    println!("============================\n");

    println!("Config file: {}", config_path.display());
    if config_path.exists() {
        println!("Status: Found\n");
    } else {
        println!("Status: Not found (using defaults)\n");
    }

    println!("Current settings:");
    println!("  host: {}", config.host);
    println!("  port: {}", config.port);
    println!("  data_dir: {}", config.data_dir.display());
    println!("  contact_file: {}", config.contact_file);
    println!("  guestbook_file: {}", config.guestbook_file);
    println!("  public_dir: {}", config.public_dir.display());
    println!("  default_language: {}", config.default_language);
    println!("  log_level: {}", config.log_level);
    println!("  json_logs: {}", config.json_logs);

    println!("\nEnvironment variables:");
    for key in [
        "HOST",
        "PORT",
        "DATA_DIR",
        "CONTACT_FILE",
        "GUESTBOOK_FILE",
        "PUBLIC_DIR",
        "DEFAULT_LANGUAGE",
        "LOG_LEVEL",
        "JSON_LOGS",
    ] {
        println!("  {}{}", ENV_PREFIX, key);
    }
}
