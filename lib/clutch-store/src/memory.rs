use crate::error::StoreError;
use crate::LinkStore;
use async_trait::async_trait;
use clutch_api::model::PlayerIdentity;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// In-memory implementation, mainly a test double for command handlers.
#[derive(Debug, Default)]
pub struct MemoryLinkStore {
    accounts: Mutex<HashMap<u64, PlayerIdentity>>,
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn get(&self, user_id: u64) -> Result<Option<PlayerIdentity>, StoreError> {
        Ok(self.accounts.lock().await.get(&user_id).cloned())
    }

    async fn upsert(&self, user_id: u64, identity: PlayerIdentity) -> Result<(), StoreError> {
        self.accounts.lock().await.insert(user_id, identity);
        Ok(())
    }

    async fn remove(&self, user_id: u64) -> Result<bool, StoreError> {
        Ok(self.accounts.lock().await.remove(&user_id).is_some())
    }

    async fn list_all(&self) -> Result<HashMap<u64, PlayerIdentity>, StoreError> {
        Ok(self.accounts.lock().await.clone())
    }
}
