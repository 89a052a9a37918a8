use std::sync::Arc;

use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{error, info};

use crate::application::services::cron::CronTask;

/// Fires registered tasks on their cron schedules (UTC, seconds field first).
///
/// Firings are not serialized: a slow run can overlap the next one.
pub struct CronScheduler {
    inner: JobScheduler,
}

impl CronScheduler {
    pub async fn new() -> anyhow::Result<Self> {
        let inner = JobScheduler::new()
            .await
            .map_err(|err| anyhow::anyhow!("failed to create scheduler: {err:?}"))?;
        Ok(Self { inner })
    }

    pub async fn register(&self, schedule: &str, task: Arc<dyn CronTask>) -> anyhow::Result<()> {
        let name = task.name();
        let job = Job::new_async(schedule, move |_id, _scheduler| {
            let task = task.clone();
            Box::pin(async move {
                if let Err(err) = task.run().await {
                    let detail = format!("{err:#}");
                    error!(task = task.name(), error = %detail, "cron run aborted");
                }
            })
        })
        .map_err(|err| anyhow::anyhow!("invalid schedule '{schedule}' for {name}: {err:?}"))?;

        self.inner
            .add(job)
            .await
            .map_err(|err| anyhow::anyhow!("failed to register {name}: {err:?}"))?;
        info!(task = name, schedule, "cron task registered");
        Ok(())
    }

    pub async fn start(&self) -> anyhow::Result<()> {
        self.inner
            .start()
            .await
            .map_err(|err| anyhow::anyhow!("failed to start scheduler: {err:?}"))
    }

    pub async fn shutdown(mut self) -> anyhow::Result<()> {
        self.inner
            .shutdown()
            .await
            .map_err(|err| anyhow::anyhow!("failed to stop scheduler: {err:?}"))?;
        info!("cron scheduler stopped");
        Ok(())
    }
}
