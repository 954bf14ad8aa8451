// Per-field request validation failures
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required.")]
    Required,

    #[error("This field may not be blank.")]
    Blank,

    #[error("Not a valid string.")]
    NotAString,

    #[error("A valid integer is required.")]
    NotAnInteger,
}
