pub mod ephemeris;
pub mod scanner;
pub mod solver;
pub mod types;

pub use ephemeris::{
    deg_to_rad, julian_day, local_sidereal_time, normalize_angle, rad_to_deg, sun_position, J2000,
    K1,
};

pub use scanner::{test_hour, HourWindow};

pub use solver::{sun_rise_set, sun_rise_set_spanning, SunTimesError};

pub use types::{
    to_signed_degrees, CrossingEvent, CrossingKind, DaySpan, EphemerisSample, GeoCoordinate,
    Hemisphere, SunTimes,
};
