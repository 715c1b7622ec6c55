use utoipa::OpenApi;

use super::api::error::ErrorResponse;
use super::api::health::HealthResponse;
use crate::chart::{
    Aspect, AspectKind, BodyPosition, ChartRequest, ChartResponse, Location, ZodiacSign,
};
use crate::ephemeris::CelestialBody;
use crate::horoscope::HoroscopeResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::chart::natal_chart,
        super::api::horoscope::translated_horoscope,
        super::api::health::health,
    ),
    components(
        schemas(
            ChartRequest,
            ChartResponse,
            BodyPosition,
            Aspect,
            AspectKind,
            Location,
            ZodiacSign,
            CelestialBody,
            HoroscopeResponse,
            HealthResponse,
            ErrorResponse,
        )
    ),
    info(
        title = "Natal Chart API",
        description = "Natal chart positions, aspects and translated daily horoscopes",
        version = "0.1.0"
    ),
    tags(
        (name = "chart", description = "Natal chart computation"),
        (name = "horoscope", description = "Daily horoscope text"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;
