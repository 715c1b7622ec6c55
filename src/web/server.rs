use axum::{routing::get, routing::post, Router};
use reqwest::Client;
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::chart::{ChartError, ChartService};
use crate::ephemeris::{EphemerisProvider, KeplerianEphemeris};
use crate::horoscope::{
    AztroSource, BurcYorumlariSource, HoroscopeAppSource, HoroscopeError, HoroscopeService,
    HoroscopeSource, OpenAiTranslator, Translator,
};

use super::api::chart as chart_handlers;
use super::api::health as health_handlers;
use super::api::horoscope as horoscope_handlers;
use super::api_doc::ApiDoc;
use super::config::Config;
use super::state::AppState;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error("HTTP client setup failed: {0}")]
    Horoscope(#[from] HoroscopeError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load the ephemeris once; the server must not start without it.
pub fn load_ephemeris(config: &Config) -> Result<Arc<dyn EphemerisProvider>, ChartError> {
    let ephemeris = KeplerianEphemeris::load(config.ephemeris.elements_file.as_deref())
        .map_err(|e| ChartError::UpstreamUnavailable(e.to_string()))?;
    Ok(Arc::new(ephemeris))
}

pub fn build_horoscope_service(config: &Config) -> Result<HoroscopeService, HoroscopeError> {
    let source_client = Client::builder().timeout(config.horoscope.timeout).build()?;
    let sources: Vec<Arc<dyn HoroscopeSource>> = vec![
        Arc::new(HoroscopeAppSource::new(
            source_client.clone(),
            config.horoscope.horoscope_app_url.clone(),
        )),
        Arc::new(AztroSource::new(
            source_client.clone(),
            config.horoscope.aztro_url.clone(),
        )),
        Arc::new(BurcYorumlariSource::new(
            source_client,
            config.horoscope.burc_yorumlari_url.clone(),
        )),
    ];

    let translator: Option<Arc<dyn Translator>> = match config.translation_api_key() {
        Some(api_key) => {
            let client = Client::builder().timeout(config.translation.timeout).build()?;
            let translator: Arc<dyn Translator> = Arc::new(OpenAiTranslator::new(
                client,
                config.translation.base_url.clone(),
                config.translation.model.clone(),
                api_key,
            ));
            Some(translator)
        }
        None => {
            log::warn!(
                "{} not set, English horoscopes cannot be translated",
                config.translation.api_key_env
            );
            None
        }
    };

    Ok(HoroscopeService::new(sources, translator))
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Chart endpoints
        .route("/natal-chart", post(chart_handlers::natal_chart))
        .route("/api/chart", post(chart_handlers::natal_chart))
        // Horoscope endpoints
        .route(
            "/translated-horoscope/{sign}",
            get(horoscope_handlers::translated_horoscope),
        )
        .route("/health", get(health_handlers::health))
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(config: Config) -> Result<(), ServerError> {
    let bind_addr = config.web.bind.clone();

    let ephemeris = load_ephemeris(&config)?;
    let horoscopes = build_horoscope_service(&config)?;

    let state = AppState {
        charts: ChartService::new(ephemeris),
        horoscopes: Arc::new(horoscopes),
    };
    let app = build_router(state);

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
