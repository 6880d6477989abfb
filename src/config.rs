use std::{env, path::PathBuf};

use teloxide::types::UserId;
use thiserror::Error;

pub const BOT_TOKEN_ENV_VAR: &str = "BOT_TOKEN";
pub const ADMIN_ID_ENV_VAR: &str = "ADMIN_ID";
pub const CATALOGUE_PATH_ENV_VAR: &str = "COURSE_BOT_CATALOGUE";

pub struct Package {
    pub name: &'static str,
    pub version: &'static str,
}

pub const PACKAGE: Package = Package {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("env var `{0}` is not set or empty")]
    Missing(&'static str),
    #[error("env var `ADMIN_ID` is not a telegram user id: '{0}'")]
    InvalidAdminId(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    // Validated at startup only, nothing routes on it.
    pub admin_id: UserId,
    pub catalogue_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let bot_token = required(BOT_TOKEN_ENV_VAR)?;
        let admin_id = required(ADMIN_ID_ENV_VAR)?;
        let admin_id = admin_id
            .parse::<u64>()
            .map(UserId)
            .map_err(|_| ConfigError::InvalidAdminId(admin_id))?;

        let catalogue_path = lookup(CATALOGUE_PATH_ENV_VAR)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bot_token,
            admin_id,
            catalogue_path,
        })
    }
}
