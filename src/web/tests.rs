use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::chart::ChartService;
use crate::ephemeris::KeplerianEphemeris;
use crate::horoscope::test_support::{EchoTranslator, FixedSource};
use crate::horoscope::{HoroscopeService, HoroscopeSource};

use super::server::build_router;
use super::state::AppState;

fn app(sources: Vec<Arc<dyn HoroscopeSource>>) -> Router {
    let ephemeris = KeplerianEphemeris::load(None).expect("embedded elements");
    build_router(AppState {
        charts: ChartService::new(Arc::new(ephemeris)),
        horoscopes: Arc::new(HoroscopeService::new(
            sources,
            Some(Arc::new(EchoTranslator)),
        )),
    })
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}

fn post_chart(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/natal-chart")
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .expect("request")
}

#[tokio::test]
async fn natal_chart_round_trip() {
    let body = json!({"date": "2000-01-01", "time": "12:00", "lat": 0, "lon": 0, "tz": "+00:00"});
    let (status, value) = send(app(vec![]), post_chart(body.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    let chart = value["chart"].as_array().expect("chart array");
    assert_eq!(chart.len(), 10);
    assert_eq!(chart[0]["name"], "Güneş");
    assert_eq!(chart[0]["sign"], "Oğlak");
    assert_eq!(chart[0]["house"], 10);
    assert_eq!(chart[0]["retrograde"], false);
    assert!(value["aspects"].is_array());
    assert_eq!(value["date"], "2000-01-01");
    assert_eq!(value["time"], "12:00");
    assert_eq!(value["timezone"], "+00:00");
    assert_eq!(value["location"], json!({"lat": 0.0, "lon": 0.0}));
}

#[tokio::test]
async fn api_chart_alias_defaults_timezone() {
    let body = json!({"date": "1985-07-13", "time": "08:45", "lat": "41.0", "lon": "29.0"});
    let request = Request::builder()
        .method("POST")
        .uri("/api/chart")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request");
    let (status, value) = send(app(vec![]), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["timezone"], "+00:00");
}

#[tokio::test]
async fn malformed_offset_is_a_client_error() {
    let body = json!({"date": "2000-01-01", "time": "12:00", "lat": 0, "lon": 0, "tz": "notanoffset"});
    let (status, value) = send(app(vec![]), post_chart(body.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(value["error"].as_str().unwrap().contains("notanoffset"));
}

#[tokio::test]
async fn malformed_json_is_a_client_error() {
    let (status, value) = send(app(vec![]), post_chart("{\"date\": ".to_string())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(value["error"].is_string());

    let missing_time = json!({"date": "2000-01-01", "lat": 0, "lon": 0});
    let (status, _) = send(app(vec![]), post_chart(missing_time.to_string())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn date_outside_coverage_is_a_server_error() {
    let body = json!({"date": "2300-01-01", "time": "12:00", "lat": 0, "lon": 0});
    let (status, value) = send(app(vec![]), post_chart(body.to_string())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(value["error"].is_string());
}

#[tokio::test]
async fn translated_horoscope_uses_first_source_with_text() {
    let sources: Vec<Arc<dyn HoroscopeSource>> = vec![
        FixedSource::failing(),
        FixedSource::english("Stars align."),
    ];
    let request = Request::builder()
        .uri("/translated-horoscope/gemini")
        .body(Body::empty())
        .expect("request");
    let (status, value) = send(app(sources), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        value,
        json!({"sign": "Gemini", "original": "Stars align.", "translated": "[tr] Stars align."})
    );
}

#[tokio::test]
async fn translated_horoscope_without_data_is_a_client_error() {
    let request = Request::builder()
        .uri("/translated-horoscope/aries")
        .body(Body::empty())
        .expect("request");
    let (status, value) = send(app(vec![FixedSource::empty()]), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["error"], "No horoscope data available.");
}

#[tokio::test]
async fn health_reports_ok() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .expect("request");
    let (status, value) = send(app(vec![]), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value, json!({"status": "ok"}));
}
