use async_trait::async_trait;

/// A unit of work fired by the scheduler.
#[async_trait]
pub trait CronTask: Send + Sync {
    fn name(&self) -> &'static str;

    async fn run(&self) -> anyhow::Result<()>;
}
