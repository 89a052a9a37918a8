use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    application::services::storage::ClientFactory,
    domain::{models::User, repositories::UserRepository},
};

#[derive(Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> Vec<User> {
        self.users.read().await.clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> anyhow::Result<()> {
        let mut users = self.users.write().await;
        users.push(user.clone());
        Ok(())
    }
}

/// Every client it creates writes to the same backing store.
#[derive(Default, Clone)]
pub struct InMemoryClientFactory {
    store: InMemoryUserRepository,
}

impl InMemoryClientFactory {
    pub fn new(store: InMemoryUserRepository) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &InMemoryUserRepository {
        &self.store
    }
}

impl ClientFactory for InMemoryClientFactory {
    fn create_client(&self) -> anyhow::Result<Arc<dyn UserRepository>> {
        Ok(Arc::new(self.store.clone()))
    }
}
