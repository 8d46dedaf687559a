use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_latitude() -> f64 {
    33.6938
}
fn default_longitude() -> f64 {
    73.0651
}
fn default_location_name() -> String {
    "Islamabad".to_string()
}
fn default_calc_method() -> String {
    "MuslimWorldLeague".to_string()
}
fn default_madhab() -> String {
    "Hanafi".to_string()
}
fn default_timezone_offset() -> i32 {
    300
}
fn default_hijri_offset() -> i32 {
    0
}
fn default_currency() -> String {
    "USD".to_string()
}
fn default_nisab_basis() -> String {
    "silver".to_string()
}
fn default_gold_price() -> f64 {
    75.0
}
fn default_silver_price() -> f64 {
    0.90
}

/// Location and calculation settings. Used by prayer times, the qibla
/// compass, and the Hijri display. When no location has been configured the
/// defaults act as the fallback city.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    #[serde(default = "default_location_name")]
    pub name: String,
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    #[serde(default = "default_calc_method")]
    pub calc_method: String,
    #[serde(default = "default_madhab")]
    pub madhab: String,
    #[serde(default = "default_timezone_offset")]
    pub timezone_offset: i32, // minutes from UTC
    /// Days to add/subtract from the Hijri date for local moon sighting.
    /// 0 = default (Saudi), -1 = one day behind, +1 = one day ahead
    #[serde(default = "default_hijri_offset")]
    pub hijri_offset: i32,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            name: default_location_name(),
            latitude: default_latitude(),
            longitude: default_longitude(),
            calc_method: default_calc_method(),
            madhab: default_madhab(),
            timezone_offset: default_timezone_offset(),
            hijri_offset: default_hijri_offset(),
        }
    }
}

/// Defaults for the zakat calculator. Metal prices are per gram in
/// `currency` and can be overridden per invocation on the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZakatConfig {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_nisab_basis")]
    pub nisab_basis: String,
    #[serde(default = "default_gold_price")]
    pub gold_price_per_gram: f64,
    #[serde(default = "default_silver_price")]
    pub silver_price_per_gram: f64,
}

impl Default for ZakatConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            nisab_basis: default_nisab_basis(),
            gold_price_per_gram: default_gold_price(),
            silver_price_per_gram: default_silver_price(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub zakat: ZakatConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "rafiq").context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn data_dir() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.data_dir().to_path_buf())
    }

    pub fn db_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("rafiq.db"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(&path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(&path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }

    pub fn ensure_data_dir() -> Result<PathBuf> {
        let dir = Self::data_dir()?;
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: AppConfig = toml::from_str("[location]\nname = \"Lahore\"\n").unwrap();
        assert_eq!(config.location.name, "Lahore");
        assert_eq!(config.location.calc_method, "MuslimWorldLeague");
        assert_eq!(config.zakat.nisab_basis, "silver");
    }

    #[test]
    fn empty_toml_is_the_default_city() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.location.name, "Islamabad");
        assert_eq!(config.location.timezone_offset, 300);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut config = AppConfig::default();
        config.location.name = "Kuala Lumpur".into();
        config.zakat.currency = "MYR".into();
        let s = toml::to_string_pretty(&config).unwrap();
        let back: AppConfig = toml::from_str(&s).unwrap();
        assert_eq!(back.location.name, "Kuala Lumpur");
        assert_eq!(back.zakat.currency, "MYR");
    }
}
