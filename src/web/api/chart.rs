use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::chart::{ChartRequest, ChartResponse};
use crate::web::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::state::AppState;

#[utoipa::path(
    post,
    path = "/natal-chart",
    tag = "chart",
    request_body = ChartRequest,
    responses(
        (status = 200, description = "Natal chart with aspects", body = ChartResponse),
        (status = 400, description = "Malformed date, time, offset or coordinates", body = ErrorResponse),
        (status = 500, description = "Ephemeris unavailable for the requested instant", body = ErrorResponse)
    )
)]
pub async fn natal_chart(
    State(state): State<AppState>,
    payload: Result<Json<ChartRequest>, JsonRejection>,
) -> ApiResult<Json<ChartResponse>> {
    let Json(request) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;
    let response = state.charts.compute(&request)?;
    Ok(Json(response))
}
