use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    QualitrackError(#[from] qualitrack::error::Error),
    #[error(transparent)]
    SessionError(#[from] qualitrack::error::SessionError),
    #[error(transparent)]
    StorageError(#[from] qualitrack::error::StorageError),
    #[error("Invalid test fixture: {0}")]
    InvalidFixture(String),
}
