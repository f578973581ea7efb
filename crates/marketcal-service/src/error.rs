use thiserror::Error;

/// Service layer errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Invalid holiday rule: {0}")]
    InvalidRule(String),

    #[error("Invalid year range {start}..={end}: {reason}")]
    InvalidRange {
        start: i32,
        end: i32,
        reason: &'static str,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] marketcal_rfc::error::RfcError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    CoreError(#[from] marketcal_core::error::CoreError),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
