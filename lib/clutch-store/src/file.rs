use crate::error::StoreError;
use crate::LinkStore;
use async_trait::async_trait;
use clutch_api::model::PlayerIdentity;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::warn;

/// Whole-file JSON store, one record per Discord user, keyed by the
/// stringified user id.
///
/// Every mutation re-reads the file, applies the change and swaps the file in
/// through a rename, so readers never observe a partial write. The mutex
/// serializes mutating commands that would otherwise interleave their
/// read-modify-write cycles. A missing or corrupt file degrades to an empty
/// mapping instead of failing the command.
#[derive(Debug)]
pub struct FileLinkStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileLinkStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> HashMap<String, PlayerIdentity> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return HashMap::new(),
            Err(e) => {
                warn!("Failed to read link store at {:?}: {e}", self.path);
                return HashMap::new();
            }
        };
        match serde_json::from_str(&contents) {
            Ok(accounts) => accounts,
            Err(e) => {
                warn!(
                    "Link store at {:?} is corrupt, treating it as empty: {e}",
                    self.path
                );
                HashMap::new()
            }
        }
    }

    async fn save(&self, accounts: &HashMap<String, PlayerIdentity>) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(accounts)?;
        let staging = self.path.with_extension("tmp");
        fs::write(&staging, contents).await?;
        fs::rename(&staging, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl LinkStore for FileLinkStore {
    async fn get(&self, user_id: u64) -> Result<Option<PlayerIdentity>, StoreError> {
        Ok(self.load().await.remove(&user_id.to_string()))
    }

    async fn upsert(&self, user_id: u64, identity: PlayerIdentity) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut accounts = self.load().await;
        accounts.insert(user_id.to_string(), identity);
        self.save(&accounts).await
    }

    async fn remove(&self, user_id: u64) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut accounts = self.load().await;
        let existed = accounts.remove(&user_id.to_string()).is_some();
        if existed {
            self.save(&accounts).await?;
        }
        Ok(existed)
    }

    async fn list_all(&self) -> Result<HashMap<u64, PlayerIdentity>, StoreError> {
        let accounts = self.load().await;
        let mut entries = HashMap::with_capacity(accounts.len());
        for (key, identity) in accounts {
            match key.parse() {
                Ok(user_id) => {
                    entries.insert(user_id, identity);
                }
                Err(_) => warn!("Skipping link store entry with non-numeric key {key:?}"),
            }
        }
        Ok(entries)
    }
}
