use chrono::{DateTime, Duration, Utc};

use crate::chart::angles::{normalize, round2_below, signed_delta};
use crate::chart::types::{BodyPosition, Placement, ZodiacSign};
use crate::ephemeris::{CelestialBody, EphemerisError, EphemerisProvider};

/// Lookback used to decide the direction of apparent motion.
pub const RETROGRADE_LOOKBACK: Duration = Duration::days(2);

/// Compute one position per body. A failed lookup yields a position with
/// `error` set instead of failing the whole chart.
pub fn compute_chart(
    provider: &dyn EphemerisProvider,
    instant: DateTime<Utc>,
    bodies: &[CelestialBody],
) -> Vec<BodyPosition> {
    bodies
        .iter()
        .map(|&body| match locate(provider, body, instant) {
            Ok(placement) => BodyPosition::placed(body, placement),
            Err(e) => {
                log::warn!("Ephemeris lookup failed for {}: {}", body.key(), e);
                BodyPosition::failed(body, e.to_string())
            }
        })
        .collect()
}

fn locate(
    provider: &dyn EphemerisProvider,
    body: CelestialBody,
    instant: DateTime<Utc>,
) -> Result<Placement, EphemerisError> {
    let now = provider.apparent_ecliptic_longitude(body, instant)?;
    let before = provider.apparent_ecliptic_longitude(body, instant - RETROGRADE_LOOKBACK)?;
    Ok(place(now, before))
}

/// Derive sign, degree, equal house and retrograde flag from two longitudes.
pub fn place(longitude: f64, previous_longitude: f64) -> Placement {
    let longitude = normalize(longitude);
    let sector = (longitude / 30.0).floor() as u8 % 12;

    Placement {
        longitude,
        sign: ZodiacSign::from_normalized(longitude),
        degree: round2_below(longitude % 30.0, 30.0),
        // Equal houses: house N is the Nth sign from Aries
        house: sector + 1,
        retrograde: signed_delta(previous_longitude, longitude) < 0.0,
    }
}
