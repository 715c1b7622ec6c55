// Periodic terms of the lunar longitude: multiples of D, M, M', F and the
// coefficient in 1e-6 degrees.
const LONGITUDE_TERMS: [(f64, f64, f64, f64, f64); 34] = [
    (0.0, 0.0, 1.0, 0.0, 6_288_774.0),
    (2.0, 0.0, -1.0, 0.0, 1_274_027.0),
    (2.0, 0.0, 0.0, 0.0, 658_314.0),
    (0.0, 0.0, 2.0, 0.0, 213_618.0),
    (0.0, 1.0, 0.0, 0.0, -185_116.0),
    (0.0, 0.0, 0.0, 2.0, -114_332.0),
    (2.0, 0.0, -2.0, 0.0, 58_793.0),
    (2.0, -1.0, -1.0, 0.0, 57_066.0),
    (2.0, 0.0, 1.0, 0.0, 53_322.0),
    (2.0, -1.0, 0.0, 0.0, 45_758.0),
    (0.0, 1.0, -1.0, 0.0, -40_923.0),
    (1.0, 0.0, 0.0, 0.0, -34_720.0),
    (0.0, 1.0, 1.0, 0.0, -30_383.0),
    (2.0, 0.0, 0.0, -2.0, 15_327.0),
    (0.0, 0.0, 1.0, 2.0, -12_528.0),
    (0.0, 0.0, 1.0, -2.0, 10_980.0),
    (4.0, 0.0, -1.0, 0.0, 10_675.0),
    (0.0, 0.0, 3.0, 0.0, 10_034.0),
    (4.0, 0.0, -2.0, 0.0, 8_548.0),
    (2.0, 1.0, -1.0, 0.0, -7_888.0),
    (2.0, 1.0, 0.0, 0.0, -6_766.0),
    (1.0, 0.0, -1.0, 0.0, -5_163.0),
    (1.0, 1.0, 0.0, 0.0, 4_987.0),
    (2.0, -1.0, 1.0, 0.0, 4_036.0),
    (2.0, 0.0, 2.0, 0.0, 3_994.0),
    (4.0, 0.0, 0.0, 0.0, 3_861.0),
    (2.0, 0.0, -3.0, 0.0, 3_665.0),
    (0.0, 1.0, -2.0, 0.0, -2_689.0),
    (2.0, 0.0, -1.0, 2.0, -2_602.0),
    (2.0, -1.0, -2.0, 0.0, 2_390.0),
    (1.0, 0.0, 1.0, 0.0, -2_348.0),
    (2.0, -2.0, 0.0, 0.0, 2_236.0),
    (0.0, 1.0, 2.0, 0.0, -2_120.0),
    (0.0, 2.0, 0.0, 0.0, -2_069.0),
];

/// Geocentric ecliptic longitude of the Moon in degrees, mean equinox of date.
pub fn geocentric_longitude(t: f64) -> f64 {
    let t2 = t * t;
    let mean_lon = 218.3164477 + 481_267.881_234_21 * t - 0.0015786 * t2;
    let elongation = (297.8501921 + 445_267.111_403_4 * t - 0.0018819 * t2).to_radians();
    let sun_anomaly = (357.5291092 + 35_999.050_290_9 * t - 0.0001536 * t2).to_radians();
    let moon_anomaly = (134.9633964 + 477_198.867_505_5 * t + 0.0087414 * t2).to_radians();
    let latitude_arg = (93.2720950 + 483_202.017_523_3 * t - 0.0036539 * t2).to_radians();

    // Earth orbit eccentricity damping of terms involving M
    let e = 1.0 - 0.002516 * t - 0.0000074 * t2;

    let mut sum: f64 = LONGITUDE_TERMS
        .iter()
        .map(|&(d, m, mp, f, coeff)| {
            let arg = d * elongation + m * sun_anomaly + mp * moon_anomaly + f * latitude_arg;
            let damping = e.powi(m.abs() as i32);
            coeff * damping * arg.sin()
        })
        .sum();

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    sum += 3958.0 * a1.sin()
        + 1962.0 * (mean_lon.to_radians() - latitude_arg).sin()
        + 318.0 * a2.sin();

    (mean_lon + sum / 1_000_000.0).rem_euclid(360.0)
}
