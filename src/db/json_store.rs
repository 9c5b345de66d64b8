use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::common::StoreError;

/// A collection stored as one JSON array in one file.
///
/// Reads take no lock: writers replace the file by rename, so a reader sees
/// either the previous or the next version, never a torn one. Writers are
/// serialized by `write_lock` for the whole read-modify-write cycle.
pub struct JsonStore<T> {
    path: PathBuf,
    write_lock: Mutex<()>,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonStore<T>
where
    T: Serialize + DeserializeOwned + Send,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
            _records: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the backing file as an empty array if it does not exist yet.
    pub async fn ensure_exists(&self) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        if tokio::fs::try_exists(&self.path).await? {
            return Ok(());
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        log::info!("Creating empty store at {}", self.path.display());
        self.persist(&[]).await
    }

    pub async fn load(&self) -> Result<Vec<T>, StoreError> {
        let raw = tokio::fs::read(&self.path).await?;
        let records = serde_json::from_slice(&raw)?;
        Ok(records)
    }

    /// Runs one read-modify-write cycle under the writer lock.
    ///
    /// The file is rewritten only when `apply` returns `Ok`.
    pub async fn mutate<R, F>(&self, apply: F) -> Result<R, StoreError>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R, StoreError>,
    {
        let _guard = self.write_lock.lock().await;

        let mut records = self.load().await?;
        let out = apply(&mut records)?;
        self.persist(&records).await?;

        Ok(out)
    }

    async fn persist(&self, records: &[T]) -> Result<(), StoreError> {
        let body = serde_json::to_vec_pretty(records)?;

        let tmp = self.temp_path();
        if let Err(e) = tokio::fs::write(&tmp, &body).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }

        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }

        Ok(())
    }

    // Same directory as the target so the rename never crosses filesystems.
    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "store".to_string());

        self.path
            .with_file_name(format!(".{}.{}.tmp", name, Uuid::new_v4()))
    }
}

/// `1 + max(ids)`, or `1` for an empty collection. Fails once the id space
/// is used up.
pub fn next_id(ids: impl IntoIterator<Item = u64>) -> Result<u64, StoreError> {
    ids.into_iter()
        .max()
        .unwrap_or(0)
        .checked_add(1)
        .ok_or(StoreError::IdsExhausted)
}
