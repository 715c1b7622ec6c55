use crate::ephemeris::elements::OrbitalElements;

const KEPLER_TOLERANCE: f64 = 1e-12;
const KEPLER_MAX_ITERATIONS: usize = 30;

/// Heliocentric position in AU, mean ecliptic and equinox of J2000.
pub fn heliocentric_position(el: &OrbitalElements, centuries: f64) -> [f64; 3] {
    let a = el.semi_major_axis.at(centuries);
    let e = el.eccentricity.at(centuries);
    let incl = el.inclination.at(centuries).to_radians();
    let mean_lon = el.mean_longitude.at(centuries);
    let peri_lon = el.perihelion_longitude.at(centuries);
    let node = el.node_longitude.at(centuries);

    let arg_peri = (peri_lon - node).to_radians();
    let node = node.to_radians();
    let mean_anomaly = (mean_lon - peri_lon).rem_euclid(360.0).to_radians();
    let ecc_anomaly = solve_kepler(mean_anomaly, e);

    // Position in the orbital plane, x towards perihelion
    let xp = a * (ecc_anomaly.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc_anomaly.sin();

    let (sin_w, cos_w) = arg_peri.sin_cos();
    let (sin_n, cos_n) = node.sin_cos();
    let (sin_i, cos_i) = incl.sin_cos();

    [
        (cos_w * cos_n - sin_w * sin_n * cos_i) * xp + (-sin_w * cos_n - cos_w * sin_n * cos_i) * yp,
        (cos_w * sin_n + sin_w * cos_n * cos_i) * xp + (-sin_w * sin_n + cos_w * cos_n * cos_i) * yp,
        (sin_w * sin_i) * xp + (cos_w * sin_i) * yp,
    ]
}

/// Newton iteration on M = E - e sin E. Angles in radians.
pub fn solve_kepler(mean_anomaly: f64, e: f64) -> f64 {
    let mut ecc_anomaly = mean_anomaly + e * mean_anomaly.sin();
    for _ in 0..KEPLER_MAX_ITERATIONS {
        let delta = (ecc_anomaly - e * ecc_anomaly.sin() - mean_anomaly)
            / (1.0 - e * ecc_anomaly.cos());
        ecc_anomaly -= delta;
        if delta.abs() < KEPLER_TOLERANCE {
            break;
        }
    }
    ecc_anomaly
}

/// Ecliptic longitude and latitude in degrees of a cartesian vector.
pub fn to_spherical(v: [f64; 3]) -> (f64, f64, f64) {
    let rho = (v[0] * v[0] + v[1] * v[1]).sqrt();
    let distance = (rho * rho + v[2] * v[2]).sqrt();
    let lon = v[1].atan2(v[0]).to_degrees().rem_euclid(360.0);
    let lat = v[2].atan2(rho).to_degrees();
    (lon, lat, distance)
}
