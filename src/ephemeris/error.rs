use thiserror::Error;

#[derive(Debug, Error)]
pub enum EphemerisError {
    #[error("Elements file not found: {0}")]
    FileNotFound(String),
    #[error("Elements file read error: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("Invalid orbital elements in {source_name}: {message}")]
    InvalidElements { source_name: String, message: String },
    #[error("No elements for body '{0}'")]
    UnknownBody(String),
    #[error("Instant {instant} outside ephemeris coverage ({from}-{to})")]
    OutOfRange { instant: String, from: i32, to: i32 },
}
