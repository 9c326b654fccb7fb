use serde::Deserialize;

use crate::error::ConfigError;

/// Connection settings for the courses database, resolved from the `DB_*`
/// environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct DbSettings {
    /// Hostname or IP address of the MySQL server (`DB_HOST`).
    pub host: String,
    /// TCP port the server listens on (`DB_PORT`).
    pub port: u16,
    /// Schema holding the courses tables (`DB_DATABASE`).
    pub database: String,
    /// Account used for the read-only session (`DB_USERNAME`).
    pub username: String,
    /// Password for that account (`DB_PASSWORD`). Empty by default.
    pub password: String,
}

/// Resolves `DbSettings` from the environment.
///
/// Every variable is optional; unset variables fall back to the defaults
/// below. `DB_PORT` must parse as a number.
pub fn load_settings() -> Result<DbSettings, ConfigError> {
    let builder = config::Config::builder()
        .set_default("host", "127.0.0.1")?
        .set_default("port", 3306)?
        .set_default("database", "online_courses")?
        .set_default("username", "root")?
        .set_default("password", "")?
        .add_source(config::Environment::with_prefix("DB").try_parsing(true))
        .build()?;

    let settings = builder.try_deserialize::<DbSettings>()?;

    Ok(settings)
}
