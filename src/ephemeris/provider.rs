use chrono::{DateTime, Datelike, Utc};
use std::path::Path;

use crate::ephemeris::body::CelestialBody;
use crate::ephemeris::elements::ElementSet;
use crate::ephemeris::error::EphemerisError;
use crate::ephemeris::kepler::{heliocentric_position, to_spherical};
use crate::ephemeris::moon;
use crate::ephemeris::timescale::{days_to_centuries, tt_centuries};

/// Light travel time for one AU, in days.
const LIGHT_TIME_DAYS_PER_AU: f64 = 0.005_775_518_3;
/// Constant of annual aberration, in degrees.
const ABERRATION_DEG: f64 = 20.495_52 / 3600.0;
const EARTH_KEY: &str = "earth";

/// Source of apparent geocentric ecliptic longitudes.
///
/// Implementations are shared read-only across request handlers.
pub trait EphemerisProvider: Send + Sync {
    /// Longitude in degrees. Callers normalize; the value may fall outside [0, 360).
    fn apparent_ecliptic_longitude(
        &self,
        body: CelestialBody,
        instant: DateTime<Utc>,
    ) -> Result<f64, EphemerisError>;
}

/// Analytic ephemeris from mean Keplerian elements and a truncated lunar theory.
/// Accuracy is a few arcminutes for the planets, well below sign and orb scales.
#[derive(Debug, Clone)]
pub struct KeplerianEphemeris {
    elements: ElementSet,
}

impl KeplerianEphemeris {
    pub fn new(elements: ElementSet) -> Self {
        Self { elements }
    }

    /// Load from a YAML element file, or the embedded table when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, EphemerisError> {
        let elements = match path {
            Some(path) => ElementSet::from_file(path)?,
            None => ElementSet::embedded()?,
        };
        log::info!(
            "Loaded orbital elements for {} bodies (valid {}-{})",
            elements.bodies.len(),
            elements.valid_from_year,
            elements.valid_to_year
        );
        Ok(Self::new(elements))
    }

    fn check_coverage(&self, instant: DateTime<Utc>) -> Result<(), EphemerisError> {
        let year = instant.year();
        if year < self.elements.valid_from_year || year > self.elements.valid_to_year {
            return Err(EphemerisError::OutOfRange {
                instant: instant.to_rfc3339(),
                from: self.elements.valid_from_year,
                to: self.elements.valid_to_year,
            });
        }
        Ok(())
    }

    fn sun_longitude(&self, t: f64) -> Result<f64, EphemerisError> {
        let earth = heliocentric_position(self.elements.get(EARTH_KEY)?, t);
        let (lon, _, _) = to_spherical([-earth[0], -earth[1], -earth[2]]);
        Ok(lon)
    }

    fn planet_longitude(&self, key: &str, t: f64) -> Result<(f64, f64), EphemerisError> {
        let planet = self.elements.get(key)?;
        let earth = heliocentric_position(self.elements.get(EARTH_KEY)?, t);

        let geocentric = |helio: [f64; 3]| {
            [
                helio[0] - earth[0],
                helio[1] - earth[1],
                helio[2] - earth[2],
            ]
        };

        // One light-time pass: observe the planet where it was when the light left
        let (_, _, distance) = to_spherical(geocentric(heliocentric_position(planet, t)));
        let retarded = t - days_to_centuries(distance * LIGHT_TIME_DAYS_PER_AU);
        let (lon, lat, _) = to_spherical(geocentric(heliocentric_position(planet, retarded)));
        Ok((lon, lat))
    }
}

impl EphemerisProvider for KeplerianEphemeris {
    fn apparent_ecliptic_longitude(
        &self,
        body: CelestialBody,
        instant: DateTime<Utc>,
    ) -> Result<f64, EphemerisError> {
        self.check_coverage(instant)?;
        let t = tt_centuries(instant);
        let nutation = nutation_in_longitude(t);

        let lon = match body {
            // Lunar theory is already referred to the equinox of date
            CelestialBody::Moon => moon::geocentric_longitude(t) + nutation,
            CelestialBody::Sun => {
                let lon = self.sun_longitude(t)? + precession_in_longitude(t);
                lon + nutation + annual_aberration(lon, 0.0, lon)
            }
            planet => {
                let (lon, lat) = self.planet_longitude(planet.key(), t)?;
                let lon = lon + precession_in_longitude(t);
                let sun = self.sun_longitude(t)? + precession_in_longitude(t);
                lon + nutation + annual_aberration(lon, lat, sun)
            }
        };

        Ok(lon)
    }
}

/// General precession in longitude from J2000 to the equinox of date, degrees.
pub fn precession_in_longitude(t: f64) -> f64 {
    (5029.0966 * t + 1.11113 * t * t) / 3600.0
}

/// Nutation in longitude (dominant terms), degrees.
pub fn nutation_in_longitude(t: f64) -> f64 {
    let node = (125.04452 - 1934.136261 * t).to_radians();
    let sun_lon = (280.4665 + 36_000.7698 * t).to_radians();
    let moon_lon = (218.3165 + 481_267.8813 * t).to_radians();
    let arcsec = -17.20 * node.sin() - 1.32 * (2.0 * sun_lon).sin() - 0.23 * (2.0 * moon_lon).sin()
        + 0.21 * (2.0 * node).sin();
    arcsec / 3600.0
}

/// Annual aberration correction in longitude, degrees.
fn annual_aberration(lon: f64, lat: f64, sun_lon: f64) -> f64 {
    -ABERRATION_DEG * (sun_lon - lon).to_radians().cos() / lat.to_radians().cos()
}
