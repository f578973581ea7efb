use thiserror::Error;

/// Application-level errors (binary layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] marketcal_service::error::ServiceError),

    #[error(transparent)]
    CoreError(#[from] marketcal_core::error::CoreError),

    #[error("{failed} of {total} calendar artifacts failed: {names}")]
    ArtifactsFailed {
        failed: usize,
        total: usize,
        names: String,
    },
}

pub type AppResult<T> = std::result::Result<T, AppError>;
