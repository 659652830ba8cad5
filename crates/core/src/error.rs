use crate::validation::FieldErrors;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Invalid(FieldErrors),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid value for {field}: '{value}'")]
    InvalidChoice { field: &'static str, value: String },

    #[error("Invalid date: '{0}'")]
    InvalidDate(String),

    #[error("Invalid state: {0}")]
    InvalidState(&'static str),
}
