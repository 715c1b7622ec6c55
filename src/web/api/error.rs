use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::chart::ChartError;
use crate::horoscope::HoroscopeError;

pub enum ApiError {
    Validation(String),
    Upstream(String),
}

impl From<ChartError> for ApiError {
    fn from(e: ChartError) -> Self {
        match e {
            ChartError::InvalidInput(msg) => ApiError::Validation(msg),
            ChartError::EphemerisLookup(_) | ChartError::UpstreamUnavailable(_) => {
                ApiError::Upstream(e.to_string())
            }
        }
    }
}

impl From<HoroscopeError> for ApiError {
    fn from(e: HoroscopeError) -> Self {
        match e {
            HoroscopeError::NoData | HoroscopeError::UnknownSign(_) => {
                ApiError::Validation(e.to_string())
            }
            _ => ApiError::Upstream(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(msg) => {
                log::debug!("Rejected request: {}", msg);
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(&msg))).into_response()
            }
            ApiError::Upstream(msg) => {
                log::error!("{}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new(&msg)),
                )
                    .into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: &str) -> Self {
        ErrorResponse {
            error: error.to_string(),
        }
    }
}
