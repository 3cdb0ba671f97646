//! JSON snapshot persistence. One file per concern inside the data
//! directory, written atomically so an interrupted save never clobbers the
//! previous snapshot.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use dirs::home_dir;
use serde::Serialize;

use crate::{errors::StoreResult, ledger::TransactionStore, profile::Profile};

const DEFAULT_DIR_NAME: &str = ".calendar_core";
const TRANSACTIONS_FILE: &str = "transactions.json";
const PROFILE_FILE: &str = "profile.json";

/// Application data directory, `~/.calendar_core` unless overridden via the
/// `CALENDAR_CORE_HOME` environment variable.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("CALENDAR_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// File-backed snapshot adapter for the transaction store and profile.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    root: PathBuf,
}

impl SnapshotStore {
    /// Adapter rooted at the default data directory.
    pub fn open_default() -> StoreResult<Self> {
        Self::open(app_data_dir())
    }

    /// Adapter rooted at a caller-chosen directory, created if missing.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Loads the transaction snapshot. A missing file is a fresh install
    /// and yields an empty store; a corrupt or invariant-breaking file is
    /// an error.
    pub fn load_transactions(&self) -> StoreResult<TransactionStore> {
        let path = self.transactions_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no transaction snapshot, starting empty");
            return Ok(TransactionStore::new());
        }
        let data = fs::read_to_string(&path)?;
        let store: TransactionStore = serde_json::from_str(&data)?;
        TransactionStore::validate_records(store.transactions())?;
        Ok(store)
    }

    pub fn save_transactions(&self, store: &TransactionStore) -> StoreResult<()> {
        write_atomic(&self.transactions_path(), store)?;
        tracing::debug!(records = store.len(), "saved transaction snapshot");
        Ok(())
    }

    /// Loads the profile, defaulting to an empty one when no file exists.
    pub fn load_profile(&self) -> StoreResult<Profile> {
        let path = self.profile_path();
        if !path.exists() {
            return Ok(Profile::default());
        }
        let data = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn save_profile(&self, profile: &Profile) -> StoreResult<()> {
        write_atomic(&self.profile_path(), profile)
    }

    pub fn transactions_path(&self) -> PathBuf {
        self.root.join(TRANSACTIONS_FILE)
    }

    pub fn profile_path(&self) -> PathBuf {
        self.root.join(PROFILE_FILE)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Writes the value to a staging file and renames it over the target.
fn write_atomic<T: Serialize>(path: &Path, value: &T) -> StoreResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}
