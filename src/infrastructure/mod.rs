pub mod logging;
pub mod repositories;
pub mod scheduler;
