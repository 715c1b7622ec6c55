use std::sync::Arc;

use crate::chart::aspects::find_aspects;
use crate::chart::computer::compute_chart;
use crate::chart::error::ChartError;
use crate::chart::response::build_response;
use crate::chart::time::{resolve, DEFAULT_UTC_OFFSET};
use crate::chart::types::{ChartRequest, ChartResponse};
use crate::ephemeris::{CelestialBody, EphemerisProvider};

/// Request-level entry point: validation, time resolution, chart, aspects.
#[derive(Clone)]
pub struct ChartService {
    provider: Arc<dyn EphemerisProvider>,
}

impl ChartService {
    pub fn new(provider: Arc<dyn EphemerisProvider>) -> Self {
        Self { provider }
    }

    pub fn compute(&self, request: &ChartRequest) -> Result<ChartResponse, ChartError> {
        validate_coordinates(request.lat, request.lon)?;

        let timezone = request.tz.as_deref().unwrap_or(DEFAULT_UTC_OFFSET);
        let instant = resolve(&request.date, &request.time, timezone)?;
        log::debug!(
            "Computing chart for {} {} {} -> {}",
            request.date,
            request.time,
            timezone,
            instant
        );

        let chart = compute_chart(self.provider.as_ref(), instant, &CelestialBody::ALL);
        if !chart.iter().any(|p| p.is_placed()) {
            let reason = chart
                .iter()
                .find_map(|p| p.error.clone())
                .unwrap_or_else(|| "no bodies".to_string());
            return Err(ChartError::EphemerisLookup(reason));
        }

        let aspects = find_aspects(&chart);
        Ok(build_response(request, timezone, chart, aspects))
    }
}

fn validate_coordinates(lat: f64, lon: f64) -> Result<(), ChartError> {
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(ChartError::invalid(format!("latitude {} out of range [-90, 90]", lat)));
    }
    if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
        return Err(ChartError::invalid(format!(
            "longitude {} out of range [-180, 180]",
            lon
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::angles::angular_distance;
    use crate::chart::types::ZodiacSign;
    use crate::ephemeris::{EphemerisError, KeplerianEphemeris};
    use chrono::{DateTime, Utc};

    fn request(tz: Option<&str>) -> ChartRequest {
        ChartRequest {
            date: "2000-01-01".into(),
            time: "12:00".into(),
            lat: 0.0,
            lon: 0.0,
            tz: tz.map(String::from),
        }
    }

    fn service() -> ChartService {
        ChartService::new(Arc::new(KeplerianEphemeris::load(None).unwrap()))
    }

    struct FailingEphemeris;

    impl EphemerisProvider for FailingEphemeris {
        fn apparent_ecliptic_longitude(
            &self,
            body: CelestialBody,
            _instant: DateTime<Utc>,
        ) -> Result<f64, EphemerisError> {
            Err(EphemerisError::UnknownBody(body.key().to_string()))
        }
    }

    /// Fails only for the Moon.
    struct MoonlessEphemeris(KeplerianEphemeris);

    impl EphemerisProvider for MoonlessEphemeris {
        fn apparent_ecliptic_longitude(
            &self,
            body: CelestialBody,
            instant: DateTime<Utc>,
        ) -> Result<f64, EphemerisError> {
            if body == CelestialBody::Moon {
                return Err(EphemerisError::UnknownBody("moon".into()));
            }
            self.0.apparent_ecliptic_longitude(body, instant)
        }
    }

    #[test]
    fn j2000_chart_end_to_end() {
        let response = service().compute(&request(Some("+00:00"))).unwrap();

        assert_eq!(response.chart.len(), 10);
        for pos in &response.chart {
            assert!(pos.is_placed(), "{} failed: {:?}", pos.name, pos.error);
            assert!(ZodiacSign::ALL.contains(&pos.sign.unwrap()));
            assert!((1..=12).contains(&pos.house.unwrap()));
        }

        let sun = &response.chart[0];
        assert_eq!(sun.name, "Güneş");
        assert_eq!(sun.sign, Some(ZodiacSign::Capricorn));
        assert_eq!(sun.house, Some(10));
        assert_eq!(sun.retrograde, Some(false));

        // Every pair within the orb of a canonical angle must be reported
        for (i, a) in response.chart.iter().enumerate() {
            for b in &response.chart[i + 1..] {
                let diff = angular_distance(a.longitude.unwrap(), b.longitude.unwrap());
                for angle in [0.0, 60.0, 90.0, 120.0, 180.0] {
                    if (diff - angle).abs() <= 6.0 {
                        assert!(
                            response
                                .aspects
                                .iter()
                                .any(|x| x.body_a == a.key && x.body_b == b.key),
                            "missing aspect {} {}",
                            a.name,
                            b.name
                        );
                    }
                }
            }
        }

        assert_eq!(response.timezone, "+00:00");
        assert_eq!(response.location.lat, 0.0);
    }

    #[test]
    fn missing_tz_defaults_to_utc() {
        let response = service().compute(&request(None)).unwrap();
        assert_eq!(response.timezone, "+00:00");
    }

    #[test]
    fn malformed_tz_is_invalid_input() {
        let err = service().compute(&request(Some("notanoffset"))).unwrap_err();
        assert!(matches!(err, ChartError::InvalidInput(_)));
    }

    #[test]
    fn coordinates_are_validated() {
        let mut req = request(None);
        req.lat = 91.0;
        assert!(matches!(service().compute(&req), Err(ChartError::InvalidInput(_))));

        let mut req = request(None);
        req.lon = -180.5;
        assert!(matches!(service().compute(&req), Err(ChartError::InvalidInput(_))));

        let mut req = request(None);
        req.lat = f64::NAN;
        assert!(matches!(service().compute(&req), Err(ChartError::InvalidInput(_))));
    }

    #[test]
    fn one_failing_body_keeps_the_rest() {
        let provider = MoonlessEphemeris(KeplerianEphemeris::load(None).unwrap());
        let response = ChartService::new(Arc::new(provider))
            .compute(&request(None))
            .unwrap();

        assert_eq!(response.chart.len(), 10);
        assert_eq!(response.chart.iter().filter(|p| p.is_placed()).count(), 9);
        assert!(response.chart[1].error.is_some());
        assert!(response
            .aspects
            .iter()
            .all(|a| a.body_a != CelestialBody::Moon && a.body_b != CelestialBody::Moon));
    }

    #[test]
    fn all_bodies_failing_is_an_ephemeris_error() {
        let err = ChartService::new(Arc::new(FailingEphemeris))
            .compute(&request(None))
            .unwrap_err();
        assert!(matches!(err, ChartError::EphemerisLookup(_)));
    }

    #[test]
    fn out_of_coverage_dates_fail_as_ephemeris_errors() {
        let mut req = request(None);
        req.date = "2200-01-01".into();
        let err = service().compute(&req).unwrap_err();
        assert!(matches!(err, ChartError::EphemerisLookup(_)));
    }
}
