use thiserror::Error;

#[derive(Debug, Error)]
pub enum InsertUserError {
    #[error("failed to insert user: {0:#}")]
    InsertFailure(anyhow::Error),
}
