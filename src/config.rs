use crate::error::{Error, Result};
use crate::github::DEFAULT_API_URL;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    pub url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct DefaultsConfig {
    pub org: Option<String>,
}

impl Config {
    pub fn api_url(&self) -> &str {
        self.api.url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    /// Picks the organization from an explicit value, then the configured default.
    pub fn resolve_org(&self, org_flag: Option<&str>) -> Result<String> {
        org_flag
            .or(self.defaults.org.as_deref())
            .map(str::to_string)
            .ok_or_else(|| {
                Error::Config(
                    "No organization given. Pass one or run `orgrepos config --org <ORG>`.".into(),
                )
            })
    }
}

pub fn config_path() -> Result<PathBuf> {
    config_path_from(std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from), dirs::home_dir())
}

fn config_path_from(xdg: Option<PathBuf>, home: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(xdg) = xdg {
        return Ok(xdg.join("orgrepos").join("config.toml"));
    }

    let home = home.ok_or_else(|| Error::Config("Cannot find home directory".into()))?;
    Ok(home.join(".config").join("orgrepos").join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}

pub fn save_config(config: &Config) -> Result<()> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config)?;
    fs::write(&path, &contents)?;
    Ok(())
}
