use async_trait::async_trait;

use crate::ZyntroResult;

/// Key under which the active project id is persisted.
pub const ACTIVE_PROJECT_KEY: &str = "activeProjectId";

/// Durable string key-value storage.
/// Writes are last-writer-wins; there is no delete.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> ZyntroResult<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> ZyntroResult<()>;
}
