use std::io;

#[derive(Debug)]
pub enum ConfigError {
    Read(io::Error),
    Write(io::Error),
    Parse(String),
    Serialize(String),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Read(e) => write!(f, "Failed to read config file: {}", e),
            ConfigError::Write(e) => write!(f, "Failed to write config file: {}", e),
            ConfigError::Parse(e) => write!(f, "Failed to deserialize config: {}", e),
            ConfigError::Serialize(e) => write!(f, "Failed to serialize config: {}", e),
            ConfigError::Invalid(e) => write!(f, "Config validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read(e) | ConfigError::Write(e) => Some(e),
            _ => None,
        }
    }
}
