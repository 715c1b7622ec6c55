use chrono::{DateTime, Datelike, Utc};

pub const J2000_JD: f64 = 2_451_545.0;
const UNIX_EPOCH_JD: f64 = 2_440_587.5;
const SECONDS_PER_DAY: f64 = 86_400.0;
const DAYS_PER_CENTURY: f64 = 36_525.0;

pub fn julian_day_utc(instant: DateTime<Utc>) -> f64 {
    let seconds = instant.timestamp() as f64 + f64::from(instant.timestamp_subsec_millis()) / 1000.0;
    UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY
}

/// Decimal year, good enough for ΔT lookups.
fn decimal_year(instant: DateTime<Utc>) -> f64 {
    f64::from(instant.year()) + (f64::from(instant.ordinal0()) + 0.5) / 365.25
}

/// TT - UT in seconds, Espenak-Meeus polynomial fits.
pub fn delta_t_seconds(year: f64) -> f64 {
    if year < 1900.0 {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    } else if year < 1920.0 {
        let t = year - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
            - 0.000197 * t.powi(4)
    } else if year < 1941.0 {
        let t = year - 1920.0;
        21.20 + 0.84493 * t - 0.076100 * t.powi(2) + 0.0020936 * t.powi(3)
    } else if year < 1961.0 {
        let t = year - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
    } else if year < 1986.0 {
        let t = year - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    } else if year < 2005.0 {
        let t = year - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t.powi(2)
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else if year < 2050.0 {
        let t = year - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t.powi(2)
    } else {
        -20.0 + 32.0 * ((year - 1820.0) / 100.0).powi(2) - 0.5628 * (2150.0 - year)
    }
}

/// Julian centuries of Terrestrial Time since J2000.0.
pub fn tt_centuries(instant: DateTime<Utc>) -> f64 {
    let jd_tt = julian_day_utc(instant) + delta_t_seconds(decimal_year(instant)) / SECONDS_PER_DAY;
    (jd_tt - J2000_JD) / DAYS_PER_CENTURY
}

pub fn days_to_centuries(days: f64) -> f64 {
    days / DAYS_PER_CENTURY
}
