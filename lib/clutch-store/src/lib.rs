use async_trait::async_trait;
use clutch_api::model::PlayerIdentity;
use std::collections::HashMap;

pub mod error;
pub mod file;
pub mod memory;

pub use error::StoreError;
pub use file::FileLinkStore;
pub use memory::MemoryLinkStore;

/// Durable mapping from a Discord user to the Riot account they linked.
///
/// One entry per user; relinking overwrites. Validation of the identity is
/// the caller's job (done against the stats API before `upsert`).
#[async_trait]
pub trait LinkStore: Send + Sync {
    async fn get(&self, user_id: u64) -> Result<Option<PlayerIdentity>, StoreError>;

    /// Link or relink an account, replacing any previous entry for the user.
    async fn upsert(&self, user_id: u64, identity: PlayerIdentity) -> Result<(), StoreError>;

    /// Returns whether an entry existed and was removed.
    async fn remove(&self, user_id: u64) -> Result<bool, StoreError>;

    /// Full enumeration for leaderboard construction.
    async fn list_all(&self) -> Result<HashMap<u64, PlayerIdentity>, StoreError>;
}
