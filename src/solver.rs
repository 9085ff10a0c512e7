use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

use crate::ephemeris::{julian_day, local_sidereal_time, sun_position, J2000};
use crate::scanner::{sign, test_hour, HourWindow};
use crate::types::{CrossingEvent, CrossingKind, DaySpan, EphemerisSample, GeoCoordinate, SunTimes};

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SunTimesError {
    #[error("UTC offset {utc_offset_hours:+}h is incompatible with longitude {longitude}")]
    IncompatibleZoneAndLongitude {
        utc_offset_hours: i32,
        longitude: f64,
    },
}

/// Solve one calendar day for sunrise and sunset at the given location.
/// `utc_offset_hours` is the observer's whole-hour UTC offset for that date,
/// supplied by the caller from its own time-zone source.
///
/// Fails only when the offset and the longitude have opposite signs (both
/// nonzero), a location/zone mismatch that would make the sidereal-time
/// correction meaningless. Every other input produces a best-effort answer.
pub fn sun_rise_set(
    coord: GeoCoordinate,
    date: NaiveDate,
    utc_offset_hours: i32,
) -> Result<SunTimes, SunTimesError> {
    // internal zone convention is west-positive, the opposite of a UTC offset
    let zone = -f64::from(utc_offset_hours);
    let jd = julian_day(date) - J2000;

    if sign(zone) == sign(coord.longitude) && zone != 0.0 {
        log::warn!(
            "time zone and longitude are incompatible: offset {:+}h, longitude {}",
            utc_offset_hours,
            coord.longitude
        );
        return Err(SunTimesError::IncompatibleZoneAndLongitude {
            utc_offset_hours,
            longitude: coord.longitude,
        });
    }

    let lon_frac = coord.longitude / 360.0;
    let tz_frac = zone / 24.0;
    let ct = jd / 36525.0 + 1.0; // centuries since 1900.0
    let sidereal = local_sidereal_time(lon_frac, jd, tz_frac);

    // sun position at the start and end of the local day
    let start = sun_position(jd + tz_frac, ct);
    let mut end = sun_position(jd + tz_frac + 1.0, ct);

    // keep right ascension monotonic across the 0/2pi wrap so the hourly
    // interpolation below stays continuous
    if end.right_ascension < start.right_ascension {
        end.right_ascension += 2.0 * std::f64::consts::PI;
    }

    let mut window = HourWindow::starting_at(start);
    let mut rise: Option<CrossingEvent> = None;
    let mut set: Option<CrossingEvent> = None;

    for hour in 0..24 {
        let f = f64::from(hour + 1) / 24.0;
        window.set_end(EphemerisSample {
            right_ascension: start.right_ascension
                + f * (end.right_ascension - start.right_ascension),
            declination: start.declination + f * (end.declination - start.declination),
        });

        if let Some(event) = test_hour(hour, sidereal, coord.latitude, &mut window) {
            // first qualifying hour wins for each kind
            match event.kind {
                CrossingKind::Rise if rise.is_none() => rise = Some(event),
                CrossingKind::Set if set.is_none() => set = Some(event),
                _ => {}
            }
        }
        window.advance();
    }

    // after the final advance this is the altitude at the end of hour 23
    let final_altitude = window.altitude[0];
    let midnight = date.and_time(NaiveTime::MIN);

    let (sun_rises_today, sun_sets_today) = if rise.is_none() && set.is_none() {
        // sun up all day reports a perpetual rise, down all day a perpetual set
        (final_altitude >= 0.0, final_altitude < 0.0)
    } else {
        (rise.is_some(), set.is_some())
    };

    Ok(SunTimes {
        rise: event_time(date, rise, midnight),
        set: event_time(date, set, midnight),
        sun_rises_today,
        sun_sets_today,
        rise_azimuth: rise.map(|ev| ev.azimuth),
        set_azimuth: set.map(|ev| ev.azimuth),
    })
}

/// Today's times together with yesterday's sunset and tomorrow's sunrise, the
/// three-call pattern dawn/dusk consumers need for spanning midnight.
pub fn sun_rise_set_spanning(
    coord: GeoCoordinate,
    date: NaiveDate,
    utc_offset_hours: i32,
) -> Result<DaySpan, SunTimesError> {
    let yesterday = date.pred_opt().unwrap_or(date);
    let tomorrow = date.succ_opt().unwrap_or(date);

    let previous = sun_rise_set(coord, yesterday, utc_offset_hours)?;
    let today = sun_rise_set(coord, date, utc_offset_hours)?;
    let next = sun_rise_set(coord, tomorrow, utc_offset_hours)?;

    Ok(DaySpan {
        previous_set: previous.set,
        today,
        next_rise: next.rise,
    })
}

fn event_time(date: NaiveDate, event: Option<CrossingEvent>, default: NaiveDateTime) -> NaiveDateTime {
    event
        .and_then(|ev| NaiveTime::from_hms_opt(ev.hour, ev.minute, 0))
        .map(|t| date.and_time(t))
        .unwrap_or(default)
}
