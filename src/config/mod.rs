mod dotfile;
mod error;

pub use dotfile::Dotfile;
pub use error::ConfigError;
