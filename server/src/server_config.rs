use std::net::SocketAddr;

use serde::{Deserialize, Serialize};
use snake_engine::SnakeSettings;
use snake_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};

pub const DEFAULT_CONFIG_FILE: &str = "snake_server_config.yaml";

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, ServerConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub listen_address: String,
    pub arena: ArenaConfig,
    pub engine: SnakeSettings,
}

/// Arguments for every restart, including the one at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaConfig {
    pub width: i32,
    pub height: i32,
    pub food_count: usize,
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        self.listen_address
            .parse::<SocketAddr>()
            .map_err(|e| format!("listen_address '{}' is invalid: {}", self.listen_address, e))?;
        self.arena.validate()?;
        self.engine.validate()?;
        Ok(())
    }
}

impl Validate for ArenaConfig {
    fn validate(&self) -> Result<(), String> {
        if !(10..=10_000).contains(&self.width) || !(10..=10_000).contains(&self.height) {
            return Err("arena dimensions must be between 10 and 10000".to_string());
        }
        if self.food_count > 1000 {
            return Err("food_count must not exceed 1000".to_string());
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: "0.0.0.0:8080".to_string(),
            arena: ArenaConfig {
                width: 600,
                height: 300,
                food_count: 10,
            },
            engine: SnakeSettings::default(),
        }
    }
}
