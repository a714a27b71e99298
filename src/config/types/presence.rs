//! Tracks which keys a config file actually sets.

use super::ConfigError;
use rustc_hash::FxHashSet;

/// Dotted key paths explicitly present in user config
/// (e.g. `editPost`, `editPost.enabled`).
#[derive(Debug, Clone, Default)]
pub struct ConfigPresence {
    paths: FxHashSet<String>,
}

impl ConfigPresence {
    /// Build presence set from raw TOML content.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let value: toml::Value = toml::from_str(content)?;
        let json = serde_json::to_value(value)?;
        let mut presence = Self::default();
        presence.collect_value("", &json);
        Ok(presence)
    }

    /// Build presence set from raw JSON content.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        let mut presence = Self::default();
        presence.collect_value("", &value);
        Ok(presence)
    }

    /// Check whether a field or section path was explicitly present.
    #[inline]
    pub fn contains(&self, path: &str) -> bool {
        !path.is_empty() && self.paths.contains(path)
    }

    /// Keys from `expected` the file left out, in `expected` order.
    pub fn missing<'a>(&self, expected: &[&'a str]) -> Vec<&'a str> {
        expected
            .iter()
            .copied()
            .filter(|key| !self.contains(key))
            .collect()
    }

    fn collect_value(&mut self, prefix: &str, value: &serde_json::Value) {
        if !prefix.is_empty() {
            self.paths.insert(prefix.to_string());
        }
        if let serde_json::Value::Object(map) = value {
            for (key, child) in map {
                let next = if prefix.is_empty() {
                    key.to_string()
                } else {
                    format!("{prefix}.{key}")
                };
                self.collect_value(&next, child);
            }
        }
    }
}
