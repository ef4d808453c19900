use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::{LinearModelParams, WakeTime};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip)]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub defaults: InputDefaults,
    #[serde(default)]
    pub model: LinearModelParams,
}

/// Default form inputs used when the corresponding flag is omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputDefaults {
    pub wake: WakeTime,
    pub sleep_goal_hours: f64,
    pub coffee_cups: u8,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            wake: WakeTime::default(),
            sleep_goal_hours: 8.0,
            coffee_cups: 1,
        }
    }
}

impl Config {
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.unwrap_or_else(|| {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("bedrest")
        });

        std::fs::create_dir_all(&data_dir)
            .context("Failed to create config directory")?;

        let config_path = data_dir.join("config.json");

        if config_path.exists() {
            let config_str = std::fs::read_to_string(&config_path)
                .context("Failed to read config.json")?;
            let mut config: Config = serde_json::from_str(&config_str)
                .context("Failed to parse config.json")?;
            config.data_dir = data_dir;
            return Ok(config);
        }

        let config = Config {
            data_dir,
            defaults: InputDefaults::default(),
            model: LinearModelParams::default(),
        };
        config.save()?;

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = self.config_file();
        let json_str = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;
        std::fs::write(&config_path, json_str)
            .context("Failed to write config.json")?;
        Ok(())
    }

    pub fn config_file(&self) -> PathBuf {
        self.data_dir.join("config.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("bedrest-test-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_creates_default_config() {
        let dir = temp_dir("create");
        let config = Config::new(Some(dir.clone())).unwrap();

        assert!(config.config_file().exists());
        assert_eq!(config.defaults.wake, WakeTime::default());
        assert_eq!(config.defaults.sleep_goal_hours, 8.0);
        assert_eq!(config.defaults.coffee_cups, 1);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_reloads_saved_config() {
        let dir = temp_dir("reload");
        let mut config = Config::new(Some(dir.clone())).unwrap();
        config.defaults.sleep_goal_hours = 9.25;
        config.model.coffee = 700.0;
        config.save().unwrap();

        let reloaded = Config::new(Some(dir.clone())).unwrap();
        assert_eq!(reloaded.defaults.sleep_goal_hours, 9.25);
        assert_eq!(reloaded.model.coffee, 700.0);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
