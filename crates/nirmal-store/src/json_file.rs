//! A JSON array persisted in a single file.

use crate::error::StoreError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A collection of `T` stored as one pretty-printed JSON array.
///
/// Every operation reads the whole file and, when mutating, rewrites the
/// whole file. [`JsonFile::read`] and [`JsonFile::update`] hold a mutex for
/// the entire cycle.
pub struct JsonFile<T> {
    path: PathBuf,
    lock: Mutex<()>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonFile<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Create a handle for the file at `path`. Nothing is touched on disk
    /// until the first load.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
            _marker: PhantomData,
        }
    }

    /// Read the whole collection, creating the file as `[]` if it is absent.
    ///
    /// Does not take the lock; use [`JsonFile::read`] to read under it.
    pub fn load(&self) -> Result<Vec<T>, StoreError> {
        if !self.path.exists() {
            if let Some(parent) = self.path.parent()
                && !parent.as_os_str().is_empty()
                && !parent.exists()
            {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, "[]")?;
            tracing::debug!(path = %self.path.display(), "Initialized empty collection");
        }

        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Overwrite the collection wholesale.
    ///
    /// The JSON is written to a sibling temp file and renamed over the
    /// original, so readers see either the old or the new collection.
    pub fn save(&self, items: &[T]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(items)?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Run `f` over a freshly loaded collection while holding the lock.
    pub fn read<R>(&self, f: impl FnOnce(&[T]) -> R) -> Result<R, StoreError> {
        let _guard = self.guard();
        let items = self.load()?;
        Ok(f(&items))
    }

    /// Load, mutate with `f`, and save, all under the lock.
    ///
    /// If `f` returns an error the file is left untouched.
    pub fn update<R>(
        &self,
        f: impl FnOnce(&mut Vec<T>) -> Result<R, StoreError>,
    ) -> Result<R, StoreError> {
        let _guard = self.guard();
        let mut items = self.load()?;
        let result = f(&mut items)?;
        self.save(&items)?;
        Ok(result)
    }

    /// Poisoning is ignored: the mutex guards no data, the file is the state.
    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
