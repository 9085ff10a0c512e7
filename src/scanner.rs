use crate::ephemeris::{deg_to_rad, normalize_angle, rad_to_deg, K1};
use crate::types::{CrossingEvent, CrossingKind, EphemerisSample};

/// Sliding three-sample window for one hour of the scan: index 0 is the hour
/// start, 1 the midpoint, 2 the hour end. The caller writes the end-of-hour
/// ephemeris before each test and advances the window afterwards, so the end
/// samples become the next hour's start samples without recomputation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourWindow {
    pub right_ascension: [f64; 3],
    pub declination: [f64; 3],
    pub altitude: [f64; 3],
}

impl HourWindow {
    pub fn starting_at(sample: EphemerisSample) -> Self {
        HourWindow {
            right_ascension: [sample.right_ascension, 0.0, 0.0],
            declination: [sample.declination, 0.0, 0.0],
            altitude: [0.0; 3],
        }
    }

    pub fn set_end(&mut self, sample: EphemerisSample) {
        self.right_ascension[2] = sample.right_ascension;
        self.declination[2] = sample.declination;
    }

    pub fn advance(&mut self) {
        self.right_ascension[0] = self.right_ascension[2];
        self.declination[0] = self.declination[2];
        self.altitude[0] = self.altitude[2];
    }
}

pub(crate) fn sign(value: f64) -> i32 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

/// Test one hour of the day for a horizon crossing. Fills in the window's
/// end-of-hour altitude (carried forward by `advance`) and, when the altitude
/// changes sign inside the hour, solves a local quadratic for the crossing
/// instant and azimuth.
pub fn test_hour(
    hour: u32,
    sidereal: f64,
    latitude: f64,
    window: &mut HourWindow,
) -> Option<CrossingEvent> {
    let k = hour as f64;
    let ha0 = sidereal - window.right_ascension[0] + k * K1;
    let ha2 = sidereal - window.right_ascension[2] + k * K1 + K1;

    // linear approximation over the hour: midpoint is the mean of the ends
    let ha1 = (ha0 + ha2) / 2.0;
    window.declination[1] = (window.declination[0] + window.declination[2]) / 2.0;

    let s = deg_to_rad(latitude).sin();
    let c = deg_to_rad(latitude).cos();
    // 90.833 degrees folds in 34' of refraction plus the sun's 16' semidiameter,
    // so the altitude proxy crosses zero at the visible horizon
    let z = deg_to_rad(90.833).cos();

    if hour == 0 {
        window.altitude[0] =
            s * window.declination[0].sin() + c * window.declination[0].cos() * ha0.cos() - z;
    }
    window.altitude[2] =
        s * window.declination[2].sin() + c * window.declination[2].cos() * ha2.cos() - z;

    if sign(window.altitude[0]) == sign(window.altitude[2]) {
        return None; // no crossing this hour
    }

    window.altitude[1] =
        s * window.declination[1].sin() + c * window.declination[1].cos() * ha1.cos() - z;

    // quadratic through the three samples via finite differences
    let a = 2.0 * window.altitude[0] - 4.0 * window.altitude[1] + 2.0 * window.altitude[2];
    let b = -3.0 * window.altitude[0] + 4.0 * window.altitude[1] - window.altitude[2];
    let d = b * b - 4.0 * a * window.altitude[0];

    if d < 0.0 {
        return None; // sign flip without a real root inside the hour
    }

    let d = d.sqrt();
    let mut e = (-b + d) / (2.0 * a);
    if !(0.0..=1.0).contains(&e) {
        e = (-b - d) / (2.0 * a);
    }

    // fractional-hour root to clock time, with a fixed half-minute bias
    let time = k + e + 1.0 / 120.0;
    let (event_hour, event_minute) = if time >= 24.0 {
        (23, 59) // root at the very end of hour 23
    } else {
        let whole = time.floor();
        (whole as u32, ((time - whole) * 60.0).floor() as u32)
    };

    // azimuth of the sun at the crossing instant
    let hz = ha0 + e * (ha2 - ha0);
    let dec1 = window.declination[1];
    let nz = -dec1.cos() * hz.sin();
    let dz = c * dec1.sin() - s * dec1.cos() * hz.cos();
    let azimuth = normalize_angle(rad_to_deg(nz.atan2(dz)));

    let kind = if window.altitude[0] < 0.0 && window.altitude[2] > 0.0 {
        CrossingKind::Rise
    } else if window.altitude[0] > 0.0 && window.altitude[2] < 0.0 {
        CrossingKind::Set
    } else {
        return None; // altitude exactly on the horizon at a window boundary
    };

    Some(CrossingEvent {
        hour: event_hour,
        minute: event_minute,
        azimuth,
        kind,
    })
}
