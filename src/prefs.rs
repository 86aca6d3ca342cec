//! Persisted user preferences.
//!
//! Preferences are flat string key/value pairs stored one per line as
//! `key=value`. The store is a trait so tests can swap in an in-memory map;
//! the real store lives in the platform config directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Key under which the always-on-top choice is persisted ("true"/"false").
pub const ALWAYS_ON_TOP_KEY: &str = "always-on-top";

/// Durable string key/value storage for small UI preferences.
pub trait PreferenceStore {
    /// Read a value; `None` when the key has never been written.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Platform config path for the preferences file.
pub fn default_prefs_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("mdair").join("prefs");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("mdair")
                .join("prefs");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("mdair").join("prefs");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("mdair").join("prefs");
        }
    }

    PathBuf::from(".mdair-prefs")
}

/// File-backed store. The whole map is loaded at startup and rewritten on
/// every `set`; the file is tiny and writes are rare.
#[derive(Debug)]
pub struct FilePrefs {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePrefs {
    /// Load preferences from `path`. A missing file is an empty store.
    pub fn load(path: PathBuf) -> Result<Self> {
        let values = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read preferences {}", path.display()))?;
            parse_prefs(&content)
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create preferences dir {}", parent.display())
            })?;
        }
        let mut lines = Vec::with_capacity(self.values.len());
        for (key, value) in &self.values {
            lines.push(format!("{key}={value}"));
        }
        fs::write(&self.path, format!("{}\n", lines.join("\n")))
            .with_context(|| format!("Failed to write preferences {}", self.path.display()))
    }
}

impl PreferenceStore for FilePrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

fn parse_prefs(content: &str) -> BTreeMap<String, String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            line.split_once('=')
                .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        })
        .collect()
}

/// In-memory store for tests; `set` never fails.
#[derive(Debug, Default)]
pub struct MemoryPrefs {
    values: BTreeMap<String, String>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// Tests hand the app a clone and keep one to inspect persisted values.
#[cfg(test)]
impl PreferenceStore for std::rc::Rc<std::cell::RefCell<MemoryPrefs>> {
    fn get(&self, key: &str) -> Option<String> {
        self.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.borrow_mut().set(key, value)
    }
}
