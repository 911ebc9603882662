use chrono::TimeZone;
use chrono_tz::America::Recife;

use solar_geometry::{from_zoned, SiteConfig};

fn main() -> solar_geometry::Result<()> {
    let site = SiteConfig::default();
    let tilt = 20.0;

    let dt = Recife.with_ymd_and_hms(2026, 6, 21, 14, 0, 0).unwrap();
    let pos = site.solar_position(from_zoned(&dt), tilt)?;

    println!("=== Solar Geometry Report ===");
    println!(
        "Site: latitude {:.4}°, longitude {:.4}°, standard meridian {:.1}°",
        site.latitude, site.local_longitude, site.standard_longitude
    );
    println!("Date/Time: {}", dt);
    println!();
    println!("--- Sun ---");
    println!("Day of year: {}", pos.day_of_year);
    println!("Declination: {:.2}°", pos.declination);
    println!("Sunset hour angle: {:.2}°", pos.sunset_hour_angle);
    println!("Day length: {:.2} hours", pos.day_length_hours());
    println!("Equation of Time: {:.2} minutes", pos.equation_of_time);
    println!("Solar time: {}", pos.solar_time.format("%H:%M:%S"));
    println!("Hour Angle: {:.2}°", pos.hour_angle);
    println!("Zenith Angle: {:.2}°", pos.zenith);
    println!("Azimuth: {:.2}° (negative = morning)", pos.azimuth);
    println!();
    println!("--- Surface ---");
    println!("Tilt: {:.1}°", tilt);
    println!("cos(incidence): {:.4}", pos.incidence_cosine);

    Ok(())
}
