//! TOML-based CLI configuration.
//!
//! Holds presentation-layer concerns the core deliberately knows nothing
//! about: the exercise catalog with its body-part tags, and prompt
//! behavior. Stored at `~/.config/liftlog/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use liftlog_core::storage::data_dir;

/// One catalog exercise with body-part tags used for filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Ask before removing a set (overridden per call with --yes).
    #[serde(default = "default_true")]
    pub confirm_removals: bool,
    #[serde(default = "default_catalog")]
    pub catalog: Vec<CatalogEntry>,
}

fn default_true() -> bool {
    true
}

fn catalog_entry(name: &str, tags: &[&str]) -> CatalogEntry {
    CatalogEntry {
        name: name.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn default_catalog() -> Vec<CatalogEntry> {
    vec![
        catalog_entry("Barbell Bench Press", &["chest", "arms"]),
        catalog_entry("Dumbbell Fly", &["chest"]),
        catalog_entry("Pull-Up", &["back", "arms"]),
        catalog_entry("Barbell Row", &["back"]),
        catalog_entry("Overhead Press", &["shoulders", "arms"]),
        catalog_entry("Lateral Raise", &["shoulders"]),
        catalog_entry("Barbell Squat", &["legs"]),
        catalog_entry("Leg Press", &["legs"]),
        catalog_entry("Bicep Curl", &["arms"]),
        catalog_entry("Tricep Pushdown", &["arms"]),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            confirm_removals: true,
            catalog: default_catalog(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() {
            return Err("config key is empty".into());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current
                    .as_object_mut()
                    .ok_or_else(|| format!("unknown config key: {key}"))?;
                let existing = obj
                    .get(part)
                    .ok_or_else(|| format!("unknown config key: {key}"))?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(value.parse::<bool>()?),
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value)?
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current
                .get_mut(part)
                .ok_or_else(|| format!("unknown config key: {key}"))?;
        }

        Err(format!("unknown config key: {key}").into())
    }

    fn path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or write and return the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(Self::path()?, content)?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key and persist. Returns an error if the
    /// key is unknown or the value cannot be parsed.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json)?;
        self.save()?;
        Ok(())
    }

    /// All tags appearing in the catalog, deduplicated, in first-seen
    /// order.
    pub fn tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        for entry in &self.catalog {
            for tag in &entry.tags {
                if !tags.contains(tag) {
                    tags.push(tag.clone());
                }
            }
        }
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert!(parsed.confirm_removals);
        assert_eq!(parsed.catalog.len(), 10);
    }

    #[test]
    fn default_catalog_covers_all_body_parts() {
        let cfg = Config::default();
        let tags = cfg.tags();
        for part in ["chest", "back", "shoulders", "legs", "arms"] {
            assert!(tags.iter().any(|t| t == part), "missing tag {part}");
        }
    }

    #[test]
    fn partial_config_fills_in_catalog() {
        let cfg: Config = toml::from_str("confirm_removals = false").unwrap();
        assert!(!cfg.confirm_removals);
        assert_eq!(cfg.catalog.len(), 10);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("confirm_removals").as_deref(), Some("true"));
        assert_eq!(cfg.get("catalog.0.name").as_deref(), None);
        assert!(cfg.get("missing_key").is_none());
    }

    #[test]
    fn set_json_value_by_path_updates_bool() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        Config::set_json_value_by_path(&mut json, "confirm_removals", "false").unwrap();
        assert_eq!(
            Config::get_json_value_by_path(&json, "confirm_removals").unwrap(),
            &serde_json::Value::Bool(false)
        );
    }

    #[test]
    fn set_json_value_by_path_replaces_catalog_from_json() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        Config::set_json_value_by_path(
            &mut json,
            "catalog",
            r#"[{"name": "Deadlift", "tags": ["back", "legs"]}]"#,
        )
        .unwrap();
        let cfg: Config = serde_json::from_value(json).unwrap();
        assert_eq!(cfg.catalog.len(), 1);
        assert_eq!(cfg.catalog[0].name, "Deadlift");
    }

    #[test]
    fn set_json_value_by_path_rejects_unknown_key() {
        let mut json = serde_json::to_value(Config::default()).unwrap();
        let result = Config::set_json_value_by_path(&mut json, "nonexistent_key", "value");
        assert!(result.is_err());
    }
}
