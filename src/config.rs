use std::env;

use thiserror::Error;

pub const CHANNEL_CAPACITY_VAR: &str = "HOTEL_CHANNEL_CAPACITY";
pub const LOG_FILTER_VAR: &str = "HOTEL_LOG";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

/// Runtime settings for the booking system.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelConfig {
    /// Mailbox size of each store actor.
    pub channel_capacity: usize,
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            log_filter: "info".to_string(),
        }
    }
}

impl HotelConfig {
    /// Reads settings from the process environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds the config from any key lookup; missing keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(CHANNEL_CAPACITY_VAR) {
            config.channel_capacity = match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        var: CHANNEL_CAPACITY_VAR,
                        value,
                    })
                }
            };
        }
        if let Some(filter) = lookup(LOG_FILTER_VAR).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        Ok(config)
    }
}
