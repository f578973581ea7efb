use thiserror::Error;

/// iCalendar building and validation errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Missing required property {property} in {component}")]
    MissingProperty {
        component: &'static str,
        property: &'static str,
    },
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
