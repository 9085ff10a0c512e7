use chrono::NaiveDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    pub fn sign(self) -> f64 {
        match self {
            Hemisphere::North | Hemisphere::East => 1.0,
            Hemisphere::South | Hemisphere::West => -1.0,
        }
    }
}

pub fn to_signed_degrees(degrees: u32, minutes: u32, seconds: u32, hemisphere: Hemisphere) -> f64 {
    hemisphere.sign() * (degrees as f64 + minutes as f64 / 60.0 + seconds as f64 / 3600.0)
}

/// Observer location in signed decimal degrees: latitude positive north,
/// longitude positive east. Expected ranges are [-90, 90] and [-180, 180];
/// values outside degrade the answer numerically rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoCoordinate {
            latitude,
            longitude,
        }
    }

    pub fn from_dms(
        lat_degrees: u32,
        lat_minutes: u32,
        lat_seconds: u32,
        lat_hemisphere: Hemisphere,
        lon_degrees: u32,
        lon_minutes: u32,
        lon_seconds: u32,
        lon_hemisphere: Hemisphere,
    ) -> Self {
        GeoCoordinate {
            latitude: to_signed_degrees(lat_degrees, lat_minutes, lat_seconds, lat_hemisphere),
            longitude: to_signed_degrees(lon_degrees, lon_minutes, lon_seconds, lon_hemisphere),
        }
    }
}

/// The sun's apparent equatorial position at one instant, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EphemerisSample {
    pub right_ascension: f64,
    pub declination: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrossingKind {
    Rise,
    Set,
}

/// A horizon crossing located by the hourly scan: local clock time plus the
/// sun's compass azimuth at that instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossingEvent {
    pub hour: u32,
    pub minute: u32,
    pub azimuth: f64,
    pub kind: CrossingKind,
}

/// Result of one day's solve. When no crossing of a kind was found, the
/// matching time defaults to midnight of the input date and the azimuth is
/// `None`; the flags then encode the all-day state (sun up all day reports
/// `sun_rises_today`, sun down all day reports `sun_sets_today`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunTimes {
    pub rise: NaiveDateTime,
    pub set: NaiveDateTime,
    pub sun_rises_today: bool,
    pub sun_sets_today: bool,
    pub rise_azimuth: Option<f64>,
    pub set_azimuth: Option<f64>,
}

/// Today's times bracketed by the previous sunset and the next sunrise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaySpan {
    pub previous_set: NaiveDateTime,
    pub today: SunTimes,
    pub next_rise: NaiveDateTime,
}
