use thiserror::Error;

#[derive(Debug, Error)]
pub enum PresenterError {
    #[error("presenter is not ready: {0}")]
    NotReady(String),

    #[error("presenter output failed: {0}")]
    Io(#[from] std::io::Error),
}
