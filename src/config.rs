use std::error::Error;
use std::fmt::Display;
use std::str::FromStr;
use anyhow::anyhow;

pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
pub const ENV_DATABASE_MAX_CONNECTIONS: &str = "DATABASE_MAX_CONNECTIONS";

#[derive(Clone, Debug, derive_more::Constructor)]
pub struct DatabaseConfig {
    /// SQLite connection string, e.g. `sqlite://ads.db` or `sqlite::memory:`
    pub url: String,
    pub max_connections: u32
}

impl DatabaseConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            url: get_env_mandatory_value(ENV_DATABASE_URL)?,
            max_connections: get_env_value_or_default(ENV_DATABASE_MAX_CONNECTIONS, 10)
        })
    }
}

pub(crate) fn get_env_mandatory_value<T, E>(key: &str) -> anyhow::Result<T>
where
    T: FromStr<Err = E>,
    E: Error + Send + Sync + 'static
{
    std::env::var(key)
        .map_err(|e| anyhow!("{key}: {e}"))?
        .parse()
        .map_err(|e: E| anyhow!(e))
}

pub(crate) fn get_env_value_or_default<T, E>(key: &str, default: T) -> T
where
    T: FromStr<Err = E> + Display,
    E: Error + Send + Sync + 'static
{
    std::env::var(key)
        .map_err(|e| {
            log::warn!("no value was found for an optional environment variable {key}, using the default value {default}");
            anyhow!(e)
        })
        .and_then(|v| v.parse()
            .map_err(|e: E| {
                log::warn!("invalid value of the {key} environment variable, using the default value {default}");
                anyhow!(e)
            }))
        .unwrap_or(default)
}
