use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to resolve database settings: {0}")]
    LoadError(#[from] config::ConfigError),
}
