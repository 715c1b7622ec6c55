use axum::{
    extract::{Path, State},
    Json,
};

use crate::horoscope::HoroscopeResponse;
use crate::web::api::error::{ApiResult, ErrorResponse};
use crate::web::state::AppState;

#[utoipa::path(
    get,
    path = "/translated-horoscope/{sign}",
    tag = "horoscope",
    params(
        ("sign" = String, Path, description = "Zodiac sign, English (`aries`) or Turkish (`koc`)")
    ),
    responses(
        (status = 200, description = "Daily horoscope with Turkish translation", body = HoroscopeResponse),
        (status = 400, description = "Unknown sign or no source had data", body = ErrorResponse),
        (status = 500, description = "Translation failed", body = ErrorResponse)
    )
)]
pub async fn translated_horoscope(
    State(state): State<AppState>,
    Path(sign): Path<String>,
) -> ApiResult<Json<HoroscopeResponse>> {
    let response = state.horoscopes.translated(&sign).await?;
    Ok(Json(response))
}
