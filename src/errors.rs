use std::error::Error;
use std::fmt;

/// Custom error types for routing operations
#[derive(Debug)]
pub enum RouterError {
    /// Malformed or missing provider/fallback configuration
    ConfigError(String),
    /// Every candidate tier failed the availability gate
    NoProviderAvailable(String),
    /// A provider key that does not name a known tier
    UnknownTier(String),
}

impl fmt::Display for RouterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouterError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            RouterError::NoProviderAvailable(msg) => write!(f, "No provider available: {}", msg),
            RouterError::UnknownTier(key) => write!(f, "Unknown provider tier: {}", key),
        }
    }
}

impl Error for RouterError {}

/// Convert std::io::Error to RouterError
impl From<std::io::Error> for RouterError {
    fn from(err: std::io::Error) -> Self {
        RouterError::ConfigError(err.to_string())
    }
}

/// Convert toml parsing errors to RouterError
impl From<toml::de::Error> for RouterError {
    fn from(err: toml::de::Error) -> Self {
        RouterError::ConfigError(err.to_string())
    }
}

/// Result type alias for routing operations
pub type RouterResult<T> = Result<T, RouterError>;
