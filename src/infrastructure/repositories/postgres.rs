use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{
    Pool, Postgres,
    postgres::{PgConnectOptions, PgPoolOptions},
};

use crate::{
    application::services::storage::ClientFactory,
    config::DatabaseConfig,
    domain::{models::User, repositories::UserRepository},
};

pub type PgPool = Pool<Postgres>;

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
    insert_sql: String,
}

impl PostgresUserRepository {
    /// `table` must already be a validated identifier; it is quoted, not bound.
    pub fn new(pool: PgPool, table: &str) -> Arc<Self> {
        Arc::new(Self {
            pool,
            insert_sql: format!(r#"INSERT INTO "{table}" ("uuid") VALUES ($1)"#),
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(&self.insert_sql)
            .bind(user.uuid_string())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

/// Hands out a fresh lazily connecting pool per call.
pub struct PostgresClientFactory {
    config: DatabaseConfig,
}

impl PostgresClientFactory {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }
}

impl ClientFactory for PostgresClientFactory {
    fn create_client(&self) -> anyhow::Result<Arc<dyn UserRepository>> {
        let options = PgConnectOptions::from_str(&self.config.url)?;
        let pool = PgPoolOptions::new()
            .max_connections(self.config.max_connections)
            .connect_lazy_with(options);
        Ok(PostgresUserRepository::new(pool, &self.config.user_table))
    }
}
