//! User preference storage
//!
//! The conversion engines never read preferences themselves; the caller looks
//! up the default unit for a category here and passes the id along.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::PathBuf;
use directories::ProjectDirs;
use crate::core::features::{Category, CategoryEngine};
use crate::shared::error::{AppError, AppResult};

/// Key-value preference store
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    /// Remove every stored preference
    fn reset(&mut self) -> AppResult<()>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn reset(&mut self) -> AppResult<()> {
        self.values.clear();
        Ok(())
    }
}

/// Preferences persisted as a flat JSON object of strings
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    pub fn get_default_path() -> AppResult<PathBuf> {
        ProjectDirs::from("com", "conversion-widgets", "conversion-widgets")
            .map(|dirs| dirs.config_dir().join("preferences.json"))
            .ok_or_else(|| AppError::Io("Failed to determine config directory".to_string()))
    }

    /// Open the store at the platform config location
    pub fn open_default() -> AppResult<Self> {
        Self::open(Self::get_default_path()?)
    }

    /// Open a store backed by `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "preferences file missing, starting empty");
            return Ok(Self { path, values: BTreeMap::new() });
        }

        let content = fs::read_to_string(&path)?;
        let values = serde_json::from_str(&content)?;
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn save_to_disk(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.save_to_disk()
    }

    fn reset(&mut self) -> AppResult<()> {
        self.values.clear();
        self.save_to_disk()
    }
}

/// Default-unit preferences layered over any [`PreferenceStore`]
pub struct Preferences;

impl Preferences {
    fn default_unit_key(category: &Category) -> String {
        format!("default_unit.{}", category.id())
    }

    /// Stored default unit for `category`, or the category's built-in default
    /// when nothing (or a stale id) is stored.
    pub fn default_unit(store: &dyn PreferenceStore, category: &Category) -> String {
        match store.get(&Self::default_unit_key(category)) {
            Some(unit_id) if category.has_unit(&unit_id) => unit_id,
            Some(stale) => {
                tracing::warn!(category = category.id(), unit = %stale, "ignoring stored default unit");
                category.default_unit_id().to_string()
            }
            None => category.default_unit_id().to_string(),
        }
    }

    pub fn set_default_unit(
        store: &mut dyn PreferenceStore,
        category: &Category,
        unit_id: &str,
    ) -> AppResult<()> {
        if !category.has_unit(unit_id) {
            return Err(AppError::UnknownUnit(unit_id.to_string()));
        }
        store.set(&Self::default_unit_key(category), unit_id)
    }
}
