use async_trait::async_trait;

use crate::domain::models::User;

/// Write side of the user table. Nothing in this crate reads users back.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> anyhow::Result<()>;

    /// Releases the client's connections. Infallible; the default does nothing.
    async fn close(&self) {}
}
