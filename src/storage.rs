use anyhow::{Context, Result};
use log::*;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Durable string key-value storage
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// All keys live in one JSON object file
pub struct FileStore {
    path: PathBuf,
    // Serialises read-modify-write of the file
    lock: Mutex<()>,
}

fn read_if_found(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(&path) {
        Ok(c) => Ok(Some(c)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        FileStore {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        read_if_found(&self.path)?
            .map(|c| {
                serde_json::from_str::<BTreeMap<String, String>>(&c)
                    .with_context(|| format!("Error de-serialising storage file {:?}", self.path))
            })
            .unwrap_or_else(|| Ok(BTreeMap::new()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock().map_err(|_| anyhow::Error::msg("Storage lock poisoned"))?;
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock.lock().map_err(|_| anyhow::Error::msg("Storage lock poisoned"))?;
        // An unreadable file is replaced rather than blocking every write
        let mut all = self.read_all().unwrap_or_else(|e| {
            warn!("{:#}, starting a fresh storage file", e);
            BTreeMap::new()
        });
        all.insert(key.to_owned(), value.to_owned());
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Error ensuring path {:?} exists", parent))?;
        }
        let contents = serde_json::to_string(&all)?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("Error writing storage file {:?}", self.path))
    }
}

#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.lock().map_err(|_| anyhow::Error::msg("Storage lock poisoned"))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.lock().map_err(|_| anyhow::Error::msg("Storage lock poisoned"))?;
        values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
