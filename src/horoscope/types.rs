use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Turkish,
}

/// Daily horoscope text as returned by one source.
#[derive(Debug, Clone, PartialEq)]
pub struct Horoscope {
    pub text: String,
    pub language: Language,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HoroscopeResponse {
    pub sign: String,
    pub original: String,
    pub translated: String,
}
