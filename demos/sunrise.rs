use chrono::{Datelike, NaiveDate, Offset, TimeZone};
use chrono_tz::America::New_York;

use sun_times::{sun_rise_set, GeoCoordinate};

fn main() {
    let coord = GeoCoordinate::new(40.7508, -73.9962);
    let date = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();

    // whole-hour UTC offset for that date, taken from the tz database
    let noon = New_York
        .with_ymd_and_hms(date.year(), date.month(), date.day(), 12, 0, 0)
        .unwrap();
    let offset_hours = noon.offset().fix().local_minus_utc() / 3600;

    let times = sun_rise_set(coord, date, offset_hours).unwrap();

    println!("=== Sunrise/Sunset Calculation Example ===");
    println!(
        "Location: New York, NY ({:.4}°N, {:.4}°W)",
        coord.latitude, -coord.longitude
    );
    println!("Date: {} (UTC{:+}h)", date, offset_hours);
    println!();
    println!("Sun rises today: {}", times.sun_rises_today);
    println!("Sun sets today:  {}", times.sun_sets_today);
    println!("Sunrise: {}", times.rise.time());
    println!("Sunset:  {}", times.set.time());
    if let Some(az) = times.rise_azimuth {
        println!("Sunrise azimuth: {:.1}° (0°=N, 90°=E)", az);
    }
    if let Some(az) = times.set_azimuth {
        println!("Sunset azimuth:  {:.1}°", az);
    }
}
