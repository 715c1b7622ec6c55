use thiserror::Error;

#[derive(Debug, Error)]
pub enum HoroscopeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{source_name} returned status {status}")]
    Status { source_name: String, status: u16 },
    #[error("Unknown zodiac sign: {0}")]
    UnknownSign(String),
    #[error("No horoscope data available.")]
    NoData,
    #[error("Translation failed: {0}")]
    Translation(String),
}
