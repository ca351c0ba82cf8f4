use thiserror::Error;

use crate::controllers::run_controller::RunError;
use crate::core::config::session_config::ConfigError;
use crate::core::data::sort_array::SortArrayError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error("a sorting run is already active")]
    AlreadyRunning,

    #[error(transparent)]
    Array(#[from] SortArrayError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<RunError> for ControllerError {
    fn from(err: RunError) -> Self {
        match err {
            RunError::AlreadyRunning => Self::AlreadyRunning,
        }
    }
}
