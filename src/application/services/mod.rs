pub mod cron;
pub mod storage;
