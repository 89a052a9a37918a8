use tracing_subscriber::EnvFilter;

pub fn init_logging(level: &str) {
    // RUST_LOG wins over the configured level when set.
    let default = format!("{level},insert_user={level},sqlx=warn,tokio_cron_scheduler=warn");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .init();
}
