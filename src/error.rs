use thiserror::Error;

pub type Result<T> = std::result::Result<T, LtfsConfigError>;

#[derive(Error, Debug)]
pub enum LtfsConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Mapping record not found: {0}")]
    RecordNotFound(String),

    #[error("Field write failed: {0}")]
    WriteFailed(String),

    #[error("Field read failed: {0}")]
    ReadFailed(String),

    #[error("Install location unresolved: {0}")]
    ResolveFailed(String),

    #[error("Invalid drive letter: {0}")]
    InvalidDriveLetter(String),

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

impl LtfsConfigError {
    pub fn store_unavailable<T: Into<String>>(msg: T) -> Self {
        Self::StoreUnavailable(msg.into())
    }

    pub fn record_not_found<T: Into<String>>(msg: T) -> Self {
        Self::RecordNotFound(msg.into())
    }

    pub fn write_failed<T: Into<String>>(msg: T) -> Self {
        Self::WriteFailed(msg.into())
    }

    pub fn read_failed<T: Into<String>>(msg: T) -> Self {
        Self::ReadFailed(msg.into())
    }

    pub fn resolve_failed<T: Into<String>>(msg: T) -> Self {
        Self::ResolveFailed(msg.into())
    }

    pub fn invalid_drive_letter<T: Into<String>>(msg: T) -> Self {
        Self::InvalidDriveLetter(msg.into())
    }
}
