/// Normalize an angle in degrees into [0, 360).
pub fn normalize(deg: f64) -> f64 {
    let n = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if n >= 360.0 {
        0.0
    } else {
        n
    }
}

/// Signed shortest rotation from `from` to `to`, in (-180, 180].
pub fn signed_delta(from: f64, to: f64) -> f64 {
    let d = normalize(to - from);
    if d > 180.0 {
        d - 360.0
    } else {
        d
    }
}

/// Shortest arc between two angles, in [0, 180].
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs() % 360.0;
    if diff <= 180.0 {
        diff
    } else {
        360.0 - diff
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 2 decimals without reaching `limit`.
pub fn round2_below(value: f64, limit: f64) -> f64 {
    let rounded = round2(value);
    if rounded >= limit {
        limit - 0.01
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn normalize_wraps_both_directions() {
        assert_abs_diff_eq!(normalize(370.0), 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize(-10.0), 350.0, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize(720.0), 0.0, epsilon = 1e-12);
        assert!(normalize(-1e-15) < 360.0);
    }

    #[test]
    fn signed_delta_takes_short_path_across_zero() {
        assert_abs_diff_eq!(signed_delta(359.0, 2.0), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(signed_delta(2.0, 359.0), -3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(signed_delta(10.0, 190.0), 180.0, epsilon = 1e-12);
        assert_abs_diff_eq!(signed_delta(190.0, 10.0), 180.0, epsilon = 1e-12);
    }

    #[test]
    fn angular_distance_is_symmetric_and_bounded() {
        let samples = [0.0, 0.5, 29.99, 90.0, 179.9, 180.0, 181.0, 270.0, 359.99, -45.0, 725.0];
        for &a in &samples {
            for &b in &samples {
                let d = angular_distance(a, b);
                assert_eq!(d, angular_distance(b, a));
                assert!((0.0..=180.0).contains(&d), "{} {} -> {}", a, b, d);
            }
        }
        assert_abs_diff_eq!(angular_distance(350.0, 10.0), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn rounding_stays_below_limit() {
        assert_eq!(round2(12.345678), 12.35);
        assert_eq!(round2_below(29.996, 30.0), 29.99);
        assert_eq!(round2_below(15.0, 30.0), 15.0);
    }
}
