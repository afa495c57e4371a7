use std::collections::BTreeMap;
use std::path::Path;

use crate::config::error::ConfigError;

/// Key/value pairs read from a `key: value` dotfile.
///
/// Every entry is forwarded as a query parameter on live requests, so
/// the file is expected to hold at least the `apiKey`. Keys are not
/// validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dotfile {
    entries: BTreeMap<String, String>,
}

impl Dotfile {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let dotfile = Self::from_str(&content);
        log::debug!("Read {} entries from {}", dotfile.len(), path.display());
        Ok(dotfile)
    }

    pub fn from_str(content: &str) -> Self {
        let mut entries = BTreeMap::new();

        for line in content.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            // Lines without a separator are dropped
            if let Some((key, value)) = line.split_once(':') {
                entries.insert(key.trim().to_string(), value.trim().to_string());
            }
        }

        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
