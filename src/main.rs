use std::sync::Arc;

use insert_user::{
    application::usecases::insert_user::InsertUserUseCase,
    config::Config,
    infrastructure::{
        logging::init_logging, repositories::postgres::PostgresClientFactory,
        scheduler::CronScheduler,
    },
};
use tokio::{main, signal};
use tracing::info;

#[main]
async fn main() -> anyhow::Result<()> {
    let config = Config::try_parse()?;
    init_logging(&config.log_level);

    let factory = Arc::new(PostgresClientFactory::new(config.database.clone()));
    let task = Arc::new(InsertUserUseCase::new(factory));

    if config.run_once {
        return task.execute().await;
    }

    let scheduler = CronScheduler::new().await?;
    scheduler.register(&config.schedule, task).await?;
    scheduler.start().await?;
    info!(schedule = %config.schedule, "waiting for cron triggers, press Ctrl-C to stop");

    signal::ctrl_c().await?;
    scheduler.shutdown().await
}
