use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("ephemeris lookup failed: {0}")]
    EphemerisLookup(String),
    #[error("ephemeris unavailable: {0}")]
    UpstreamUnavailable(String),
}

impl ChartError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ChartError::InvalidInput(message.into())
    }
}
