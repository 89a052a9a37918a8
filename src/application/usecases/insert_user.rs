use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::{
    application::services::{cron::CronTask, storage::ClientFactory},
    domain::{errors::InsertUserError, models::User, repositories::UserRepository},
};

pub const TASK_NAME: &str = "insertUser";

pub struct InsertUserUseCase {
    factory: Arc<dyn ClientFactory>,
}

impl InsertUserUseCase {
    pub fn new(factory: Arc<dyn ClientFactory>) -> Self {
        Self { factory }
    }

    /// Inserts one freshly identified user.
    ///
    /// Insert failures are logged and swallowed. The client is closed before
    /// the end marker whatever the outcome. Only a failure to build the
    /// client escapes, and in that case no end marker is logged.
    pub async fn execute(&self) -> anyhow::Result<()> {
        info!(task = TASK_NAME, "cron start");

        let client = self.factory.create_client()?;

        if let Err(err) = Self::insert(client.as_ref()).await {
            error!(task = TASK_NAME, error = %err, "insert failed");
        }
        client.close().await;

        info!(task = TASK_NAME, "cron end");
        Ok(())
    }

    async fn insert(client: &dyn UserRepository) -> Result<User, InsertUserError> {
        let user = User::generate();
        client
            .create(&user)
            .await
            .map_err(InsertUserError::InsertFailure)?;
        Ok(user)
    }
}

#[async_trait]
impl CronTask for InsertUserUseCase {
    fn name(&self) -> &'static str {
        TASK_NAME
    }

    async fn run(&self) -> anyhow::Result<()> {
        self.execute().await
    }
}
