use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid request URL: {0}")]
    Url(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP status {status} from {path}")]
    Status { status: u16, path: String },
    #[error("fixture read error {path}: {source}")]
    FixtureRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
