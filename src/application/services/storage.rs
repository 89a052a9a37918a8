use std::sync::Arc;

use crate::domain::repositories::UserRepository;

/// Builds a storage client bound to the configured connection target.
///
/// Construction must not touch the network: an unreachable server is reported
/// by the first operation on the returned client. An `Err` here means the
/// target itself is unusable (e.g. a malformed URL).
pub trait ClientFactory: Send + Sync {
    fn create_client(&self) -> anyhow::Result<Arc<dyn UserRepository>>;
}
