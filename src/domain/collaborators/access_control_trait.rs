use async_trait::async_trait;

use crate::error::Result;

#[async_trait]
pub trait AccessControl: Send + Sync {
    /// Whether the current user holds the named capability (access group).
    async fn user_has_capability(&self, name: &str) -> Result<bool>;
}
