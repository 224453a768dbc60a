//! Persisted key-value configuration with a default snapshot.
//!
//! Each store is scoped by name and backed by a TOML file under
//! `~/.config/lwconsole/<scope>.toml`. `set` persists immediately; a load
//! failure (missing file, unreadable, bad TOML) silently resets the store
//! to its declared defaults. Save errors are logged and never propagated;
//! losing a cosmetic flag must not take down the console.

use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use toml::{Table, Value};

/// Scoped key-value store with default-on-miss reads.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    scope: String,
    path: Option<PathBuf>,
    defaults: Table,
    values: Table,
}

impl ConfigStore {
    /// Open (or create) the file-backed store for `scope`. Falls back to an
    /// in-memory store when no home directory is available.
    pub fn open(scope: &str, defaults: Table) -> Self {
        let mut store = Self {
            scope: scope.to_string(),
            path: store_path(scope),
            defaults,
            values: Table::new(),
        };
        store.load();
        store
    }

    /// Store that never touches the filesystem. Used by tests and by hosts
    /// without a usable home directory.
    pub fn in_memory(scope: &str, defaults: Table) -> Self {
        Self {
            scope: scope.to_string(),
            path: None,
            defaults: defaults.clone(),
            values: defaults,
        }
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Stored value for `key`, or the declared default, or `None` when the
    /// key is unknown to both.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key).or_else(|| self.defaults.get(key))
    }

    /// Typed read through serde. Type mismatches read as `None`.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get(key).and_then(|value| value.clone().try_into().ok())
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.get_as(key).unwrap_or(false)
    }

    /// Store `value` under `key` and persist immediately.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.values.insert(key.to_string(), value.into());
        self.save();
    }

    /// Reset to the default snapshot and persist.
    pub fn reset(&mut self) {
        self.values = self.defaults.clone();
        self.save();
    }

    fn load(&mut self) {
        let Some(path) = &self.path else {
            self.values = self.defaults.clone();
            return;
        };
        let parsed = fs::read_to_string(path)
            .ok()
            .and_then(|contents| toml::from_str::<Table>(&contents).ok());
        match parsed {
            Some(values) => self.values = values,
            None => {
                log::debug!(
                    "config scope '{}': no usable state at {}, resetting to defaults",
                    self.scope,
                    path.display()
                );
                self.reset();
            }
        }
    }

    fn save(&self) {
        let Some(path) = &self.path else {
            return;
        };
        let result = (|| -> std::io::Result<()> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let contents = toml::to_string(&self.values)
                .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;
            fs::write(path, contents)
        })();
        if let Err(err) = result {
            log::debug!("config scope '{}': save failed: {err}", self.scope);
        }
    }
}

fn store_path(scope: &str) -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(
        home.join(".config")
            .join("lwconsole")
            .join(format!("{scope}.toml")),
    )
}
