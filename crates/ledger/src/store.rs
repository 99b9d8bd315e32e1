//! Ledger persistence.
//!
//! The whole ledger lives in memory and is written back to a single JSON file
//! after every mutation. Writes go to a temporary sibling first and are then
//! renamed over the target, so a crash mid-write leaves the previous file
//! intact.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::{LedgerError, Transaction};

/// Per-user transaction history, users kept in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    users: IndexMap<String, Vec<Transaction>>,
}

impl Ledger {
    /// Transactions of `user_id` in entry order. Unknown users have none.
    pub fn transactions(&self, user_id: &str) -> &[Transaction] {
        self.users.get(user_id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn push(&mut self, user_id: &str, transaction: Transaction) {
        self.users
            .entry(user_id.to_string())
            .or_default()
            .push(transaction);
    }

    fn pop(&mut self, user_id: &str) -> Option<Transaction> {
        let entries = self.users.get_mut(user_id)?;
        let popped = entries.pop();
        if entries.is_empty() {
            self.users.shift_remove(user_id);
        }
        popped
    }

    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.users.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Reads a ledger file. A missing file is an empty ledger.
    pub fn load(path: &Path) -> Result<Self, LedgerError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(err.into()),
        };

        if raw.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_json::from_str(&raw)?)
    }

    /// Overwrites `path` with the full ledger.
    pub fn save(&self, path: &Path) -> Result<(), LedgerError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;

        let tmp = path.with_extension("tmp");
        fs::write(&tmp, json)?;
        match fs::rename(&tmp, path) {
            Ok(()) => Ok(()),
            Err(_) => {
                fs::copy(&tmp, path)?;
                let _ = fs::remove_file(&tmp);
                Ok(())
            }
        }
    }
}

/// Shared handle to the ledger and its backing file.
///
/// Cloning is cheap; every clone sees the same ledger. All mutation goes
/// through [`LedgerStore::append`].
#[derive(Clone, Debug)]
pub struct LedgerStore {
    path: PathBuf,
    inner: Arc<Mutex<Ledger>>,
}

impl LedgerStore {
    /// Loads the ledger from `path`, starting empty if the file does not
    /// exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, LedgerError> {
        let path = path.into();
        let ledger = Ledger::load(&path)?;
        tracing::info!(
            "Loaded ledger from {} ({} users)",
            path.display(),
            ledger.users.len()
        );

        Ok(Self {
            path,
            inner: Arc::new(Mutex::new(ledger)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `transaction` to the history of `user_id` and persists the
    /// full ledger. On write failure the append is rolled back.
    pub async fn append(&self, user_id: &str, transaction: Transaction) -> Result<(), LedgerError> {
        let mut guard = self.inner.lock().await;
        guard.push(user_id, transaction);

        if let Err(err) = guard.save(&self.path) {
            tracing::error!("failed to persist ledger to {}: {err}", self.path.display());
            guard.pop(user_id);
            return Err(err);
        }

        Ok(())
    }

    /// Snapshot of the transactions of `user_id`.
    pub async fn transactions(&self, user_id: &str) -> Vec<Transaction> {
        let guard = self.inner.lock().await;
        guard.transactions(user_id).to_vec()
    }

    /// Snapshot of the whole ledger.
    pub async fn snapshot(&self) -> Ledger {
        self.inner.lock().await.clone()
    }
}
