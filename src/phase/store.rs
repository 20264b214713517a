use std::{
    cell::RefCell,
    collections::BTreeMap,
    path::{Path, PathBuf},
    rc::Rc,
};

use crate::foundation::error::{JourneyError, JourneyResult};

/// Key of the durable "story seen" flag.
pub const STORY_SEEN_KEY: &str = "dk_story_seen";

/// Durable boolean flags that outlive a session.
///
/// Callers treat every error as "flag absent"; implementations should not retry.
pub trait FlagStore {
    /// Read `key`. A missing key reads as `false`.
    fn read_flag(&self, key: &str) -> JourneyResult<bool>;
    /// Persist `value` under `key`.
    fn write_flag(&mut self, key: &str, value: bool) -> JourneyResult<()>;
}

#[derive(Debug, Default)]
struct MemoryFlags {
    flags: BTreeMap<String, bool>,
    writes: usize,
}

/// In-memory store for tests and embedding hosts that persist elsewhere.
///
/// Clones share the same flags, so a caller can keep a handle after giving one away.
#[derive(Clone, Debug, Default)]
pub struct MemoryFlagStore {
    inner: Rc<RefCell<MemoryFlags>>,
}

impl MemoryFlagStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with `key` already set.
    pub fn with_flag(key: &str, value: bool) -> Self {
        let store = Self::new();
        store.inner.borrow_mut().flags.insert(key.to_owned(), value);
        store
    }

    /// Current value of `key`, if set.
    pub fn get(&self, key: &str) -> Option<bool> {
        self.inner.borrow().flags.get(key).copied()
    }

    /// Number of successful writes.
    pub fn writes(&self) -> usize {
        self.inner.borrow().writes
    }
}

impl FlagStore for MemoryFlagStore {
    fn read_flag(&self, key: &str) -> JourneyResult<bool> {
        Ok(self.get(key).unwrap_or(false))
    }

    fn write_flag(&mut self, key: &str, value: bool) -> JourneyResult<()> {
        let mut inner = self.inner.borrow_mut();
        inner.flags.insert(key.to_owned(), value);
        inner.writes += 1;
        Ok(())
    }
}

/// Store that is never available, like storage disabled in a private window.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableFlagStore;

impl FlagStore for UnavailableFlagStore {
    fn read_flag(&self, key: &str) -> JourneyResult<bool> {
        Err(JourneyError::store(format!("cannot read '{key}': storage unavailable")))
    }

    fn write_flag(&mut self, key: &str, _value: bool) -> JourneyResult<()> {
        Err(JourneyError::store(format!("cannot write '{key}': storage unavailable")))
    }
}

/// Flags kept as a JSON object in one file.
#[derive(Clone, Debug)]
pub struct FileFlagStore {
    path: PathBuf,
}

impl FileFlagStore {
    /// Use `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> JourneyResult<BTreeMap<String, bool>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let bytes = std::fs::read(&self.path).map_err(|e| {
            JourneyError::store(format!("read '{}': {e}", self.path.display()))
        })?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl FlagStore for FileFlagStore {
    fn read_flag(&self, key: &str) -> JourneyResult<bool> {
        Ok(self.load()?.get(key).copied().unwrap_or(false))
    }

    fn write_flag(&mut self, key: &str, value: bool) -> JourneyResult<()> {
        let mut flags = self.load()?;
        flags.insert(key.to_owned(), value);
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                JourneyError::store(format!("create dir '{}': {e}", parent.display()))
            })?;
        }
        let json = serde_json::to_vec_pretty(&flags)?;
        std::fs::write(&self.path, json)
            .map_err(|e| JourneyError::store(format!("write '{}': {e}", self.path.display())))
    }
}
