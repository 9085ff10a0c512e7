use chrono::{Datelike, NaiveDate};

use crate::types::EphemerisSample;

/// Julian day of the J2000.0 epoch (2000 Jan 1.5 TT).
pub const J2000: f64 = 2451545.0;

/// Sidereal-to-solar rate: 15 degrees per hour scaled by the ratio of the
/// solar day to the sidereal day, in radians.
pub const K1: f64 = 15.0 * 1.0027379 * std::f64::consts::PI / 180.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

/// Julian day number for midnight starting the given calendar date, after
/// Meeus. Dates in years before 1583 are read as Julian-calendar dates (no
/// Gregorian correction term); the cutover year is a fixed policy.
pub fn julian_day(date: NaiveDate) -> f64 {
    let mut year = date.year();
    let mut month = date.month() as i32;
    let day = date.day() as f64;

    let gregorian = year >= 1583;

    if month <= 2 {
        year -= 1;
        month += 12;
    }

    let a = (year as f64 / 100.0).floor();
    let b = if gregorian { 2.0 - a + (a / 4.0).floor() } else { 0.0 };

    (365.25 * (year as f64 + 4716.0)).floor()
        + (30.6001 * (month as f64 + 1.0)).floor()
        + day
        + b
        - 1524.5
}

/// Greenwich sidereal time adjusted for the observer's zone and meridian, in
/// radians. `lon_frac` is longitude/360, `tz_frac` is the west-positive zone
/// divided by 24, `jd` is days since J2000.
pub fn local_sidereal_time(lon_frac: f64, jd: f64, tz_frac: f64) -> f64 {
    let mut s = 24110.5 + 8640184.813 * jd / 36525.0 + 86636.6 * tz_frac + 86400.0 * lon_frac;
    s /= 86400.0;
    s -= s.floor();
    deg_to_rad(s * 360.0)
}

/// Low-precision solar position from fundamental arguments (Van Flandern and
/// Pulkkinen, 1979). `jd` is days since J2000, `ct` centuries since 1900.0.
/// Valid for an extended range around the epoch; far-off dates lose accuracy
/// silently.
pub fn sun_position(jd: f64, ct: f64) -> EphemerisSample {
    let tau = 2.0 * std::f64::consts::PI;

    // mean longitude and mean anomaly, reduced to a full turn
    let mut lo = 0.779072 + 0.00273790931 * jd;
    lo -= lo.floor();
    lo *= tau;

    let mut g = 0.993126 + 0.0027377785 * jd;
    g -= g.floor();
    g *= tau;

    let v = 0.39785 * lo.sin() - 0.01 * (lo - g).sin() + 0.00333 * (lo + g).sin()
        - 0.00021 * ct * lo.sin();

    let u = 1.0 - 0.03349 * g.cos() - 0.00014 * (2.0 * lo).cos() + 0.00008 * lo.cos();

    let w = -0.0001 - 0.04129 * (2.0 * lo).sin() + 0.03211 * g.sin()
        + 0.00104 * (2.0 * lo - g).sin()
        - 0.00035 * (2.0 * lo + g).sin()
        - 0.00008 * ct * g.sin();

    let s = w / (u - v * v).sqrt();
    let right_ascension = lo + (s / (1.0 - s * s).sqrt()).atan();

    let s = v / u.sqrt();
    let declination = (s / (1.0 - s * s).sqrt()).atan();

    EphemerisSample {
        right_ascension,
        declination,
    }
}
