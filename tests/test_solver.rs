use chrono::{NaiveDate, NaiveDateTime, Timelike};

use sun_times::solver::*;
use sun_times::types::*;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn minute_of_day(dt: NaiveDateTime) -> i32 {
    (dt.hour() * 60 + dt.minute()) as i32
}

const NEW_YORK: GeoCoordinate = GeoCoordinate {
    latitude: 40.7508,
    longitude: -73.9962,
};

// ── Coordinates ──

#[test]
fn test_to_signed_degrees_known_values() {
    assert_approx!(to_signed_degrees(40, 45, 3, Hemisphere::North), 40.750833, 1e-5);
    assert_approx!(to_signed_degrees(73, 59, 46, Hemisphere::West), -73.996111, 1e-5);
    assert_approx!(to_signed_degrees(0, 0, 0, Hemisphere::South), 0.0, 1e-12);
    assert_approx!(to_signed_degrees(151, 12, 0, Hemisphere::East), 151.2, 1e-9);
}

#[test]
fn test_from_dms_matches_decimal() {
    let coord = GeoCoordinate::from_dms(
        40, 45, 3, Hemisphere::North,
        73, 59, 46, Hemisphere::West,
    );
    assert_approx!(coord.latitude, NEW_YORK.latitude, 1e-3);
    assert_approx!(coord.longitude, NEW_YORK.longitude, 1e-3);
}

// ── Zone/longitude compatibility ──

#[test]
fn test_opposite_signs_rejected() {
    // negative UTC offset with an eastern longitude, and vice versa
    let east = GeoCoordinate::new(40.0, 100.0);
    assert!(matches!(
        sun_rise_set(east, date(2026, 3, 20), -5),
        Err(SunTimesError::IncompatibleZoneAndLongitude { .. })
    ));

    let west = GeoCoordinate::new(40.0, -100.0);
    assert!(matches!(
        sun_rise_set(west, date(2026, 3, 20), 5),
        Err(SunTimesError::IncompatibleZoneAndLongitude { .. })
    ));
}

#[test]
fn test_matching_signs_accepted() {
    let east = GeoCoordinate::new(40.0, 100.0);
    assert!(sun_rise_set(east, date(2026, 3, 20), 7).is_ok());
    assert!(sun_rise_set(NEW_YORK, date(2026, 3, 20), -5).is_ok());
}

#[test]
fn test_zone_zero_never_rejected() {
    for lon in [-170.0, -10.0, 0.0, 10.0, 170.0] {
        let coord = GeoCoordinate::new(40.0, lon);
        assert!(
            sun_rise_set(coord, date(2026, 3, 20), 0).is_ok(),
            "longitude {}",
            lon
        );
    }
}

#[test]
fn test_error_reports_inputs() {
    let coord = GeoCoordinate::new(40.0, 100.0);
    let err = sun_rise_set(coord, date(2026, 3, 20), -5).unwrap_err();
    let SunTimesError::IncompatibleZoneAndLongitude {
        utc_offset_hours,
        longitude,
    } = err;
    assert_eq!(utc_offset_hours, -5);
    assert_approx!(longitude, 100.0, 1e-12);
}

// ── New York scenario ──

#[test]
fn test_new_york_equinox() {
    let times = sun_rise_set(NEW_YORK, date(2026, 3, 20), -5).unwrap();
    assert!(times.sun_rises_today);
    assert!(times.sun_sets_today);

    let rise = minute_of_day(times.rise);
    let set = minute_of_day(times.set);
    assert!(rise > 5 * 60 && rise < 7 * 60, "rise at {} min", rise);
    assert!(set > 17 * 60 && set < 19 * 60, "set at {} min", set);
    assert!(set > rise);

    // on an equinox the sun rises close to due east and sets close to due west
    assert_approx!(times.rise_azimuth.unwrap(), 90.0, 12.0);
    assert_approx!(times.set_azimuth.unwrap(), 270.0, 12.0);
}

#[test]
fn test_new_york_whole_year_ordering() {
    for month in 1..=12 {
        let times = sun_rise_set(NEW_YORK, date(2026, month, 15), -5).unwrap();
        assert!(times.sun_rises_today, "month {}", month);
        assert!(times.sun_sets_today, "month {}", month);
        assert!(times.set > times.rise, "month {}", month);
    }
}

// ── Determinism ──

#[test]
fn test_repeated_calls_bit_identical() {
    let a = sun_rise_set(NEW_YORK, date(2026, 7, 4), -5).unwrap();
    let b = sun_rise_set(NEW_YORK, date(2026, 7, 4), -5).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        a.rise_azimuth.unwrap().to_bits(),
        b.rise_azimuth.unwrap().to_bits()
    );
    assert_eq!(
        a.set_azimuth.unwrap().to_bits(),
        b.set_azimuth.unwrap().to_bits()
    );
}

// ── Equator equinox symmetry ──

#[test]
fn test_equator_equinox_symmetric_about_noon() {
    let coord = GeoCoordinate::new(0.0, 0.0);
    let times = sun_rise_set(coord, date(2026, 3, 20), 0).unwrap();
    assert!(times.sun_rises_today && times.sun_sets_today);

    let rise = minute_of_day(times.rise);
    let set = minute_of_day(times.set);
    // midpoint sits at solar noon, offset from clock noon by the equation
    // of time (within roughly a quarter hour in March)
    let midpoint = (rise + set) as f64 / 2.0;
    assert_approx!(midpoint, 720.0, 15.0);
    // day length: twelve hours plus the refraction/semidiameter allowance
    let length = set - rise;
    assert!((715..=745).contains(&length), "day length {} min", length);
}

// ── Polar day and night ──

#[test]
fn test_polar_summer_always_up() {
    let coord = GeoCoordinate::new(89.0, 0.0);
    let times = sun_rise_set(coord, date(2026, 6, 21), 0).unwrap();
    assert!(times.sun_rises_today);
    assert!(!times.sun_sets_today);
    // no crossing found: times default to midnight, no azimuths
    assert_eq!(minute_of_day(times.rise), 0);
    assert_eq!(minute_of_day(times.set), 0);
    assert_eq!(times.rise_azimuth, None);
    assert_eq!(times.set_azimuth, None);
}

#[test]
fn test_polar_winter_always_down() {
    let coord = GeoCoordinate::new(89.0, 0.0);
    let times = sun_rise_set(coord, date(2026, 12, 21), 0).unwrap();
    assert!(!times.sun_rises_today);
    assert!(times.sun_sets_today);
    assert_eq!(minute_of_day(times.rise), 0);
    assert_eq!(minute_of_day(times.set), 0);
}

#[test]
fn test_southern_polar_seasons_reversed() {
    let coord = GeoCoordinate::new(-89.0, 0.0);
    let summer = sun_rise_set(coord, date(2026, 12, 21), 0).unwrap();
    assert!(summer.sun_rises_today && !summer.sun_sets_today);
    let winter = sun_rise_set(coord, date(2026, 6, 21), 0).unwrap();
    assert!(!winter.sun_rises_today && winter.sun_sets_today);
}

// ── Right-ascension wrap continuity ──

#[test]
fn test_rise_times_continuous_across_march_wrap() {
    // the sun's RA wraps past zero near the vernal equinox; rise times on
    // consecutive days must keep drifting smoothly through it
    let mut prev: Option<i32> = None;
    for day in 15..=25 {
        let times = sun_rise_set(NEW_YORK, date(2026, 3, day), -5).unwrap();
        let rise = minute_of_day(times.rise);
        if let Some(p) = prev {
            assert!(
                (rise - p).abs() <= 4,
                "March {}: rise {} vs previous {}",
                day, rise, p
            );
        }
        prev = Some(rise);
    }
}

// ── Azimuth range ──

#[test]
fn test_azimuths_always_normalized() {
    for month in 1..=12 {
        let times = sun_rise_set(NEW_YORK, date(2026, month, 15), -5).unwrap();
        for az in [times.rise_azimuth, times.set_azimuth].into_iter().flatten() {
            assert!(
                (0.0..360.0).contains(&az),
                "month {}: azimuth={}",
                month, az
            );
        }
    }
}

// ── Spanning days ──

#[test]
fn test_spanning_brackets_the_date() {
    let span = sun_rise_set_spanning(NEW_YORK, date(2026, 7, 4), -5).unwrap();
    assert_eq!(span.previous_set.date(), date(2026, 7, 3));
    assert_eq!(span.next_rise.date(), date(2026, 7, 5));
    assert_eq!(span.today, sun_rise_set(NEW_YORK, date(2026, 7, 4), -5).unwrap());
    assert!(span.previous_set < span.today.rise);
    assert!(span.today.set < span.next_rise);
}
