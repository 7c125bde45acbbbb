use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("{message}")]
    ValidationError { message: String },

    #[error("This enrollment number is already registered")]
    DuplicateEnrollmentError,

    #[error("Failed to save registration")]
    SaveError,
}

pub type Result<T> = std::result::Result<T, RegistrationError>;
