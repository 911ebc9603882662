use chrono::{TimeDelta, Timelike};

use crate::error::{check_day_of_year, check_latitude, check_longitude, Error, Result};
use crate::instant::{day_of_year, days_since_new_year, Instant};
use crate::types::{SiteConfig, SolarAngles};

pub const EARTH_AXIAL_TILT: f64 = 23.45;
pub const DEGREES_PER_HOUR: f64 = 15.0;
/// Longitude correction, minutes of clock time per degree.
pub const MINUTES_PER_DEGREE: f64 = 4.0;

const SECONDS_PER_DAY: i64 = 86_400;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

/// numpy-style sign: zero stays zero, NaN stays NaN.
fn sign(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x.signum()
    }
}

/// Solar declination in degrees for day of year `n` (Cooper's approximation).
pub fn declination(n: i32) -> Result<f64> {
    check_day_of_year(n)?;
    Ok(EARTH_AXIAL_TILT * (2.0 * std::f64::consts::PI * (284 + n) as f64 / 365.0).sin())
}

/// Hour angle at sunset in degrees.
///
/// During polar day or night `|tan(lat)·tan(δ)| > 1` and the result is NaN.
pub fn sunset_hour_angle(n: i32, latitude: f64) -> Result<f64> {
    check_day_of_year(n)?;
    check_latitude(latitude)?;
    let dec_rad = deg_to_rad(declination(n)?);
    let lat_rad = deg_to_rad(latitude);
    Ok(rad_to_deg((-lat_rad.tan() * dec_rad.tan()).acos()))
}

/// Equation of time in minutes for the date of `instant`.
///
/// The last harmonic is `sin B`, not `sin 2B`.
pub fn equation_of_time(instant: Instant) -> f64 {
    let n = days_since_new_year(instant);
    let b = (n - 1) as f64 * (2.0 * std::f64::consts::PI / 365.0);
    229.2
        * (0.000075
            + 0.001868 * b.cos()
            - 0.032077 * b.sin()
            - 0.014615 * (2.0 * b).cos()
            - 0.04089 * b.sin())
}

fn minutes(m: f64) -> TimeDelta {
    TimeDelta::microseconds((m * 60_000_000.0).round() as i64)
}

/// Apparent solar time for a standard clock reading.
pub fn solar_time(
    instant: Instant,
    local_longitude: f64,
    standard_longitude: f64,
) -> Result<Instant> {
    check_longitude(local_longitude)?;
    check_longitude(standard_longitude)?;
    let correction =
        MINUTES_PER_DEGREE * (standard_longitude - local_longitude) + equation_of_time(instant);
    instant
        .checked_add_signed(minutes(correction))
        .ok_or(Error::InstantOutOfRange { instant })
}

fn civil_noon(instant: Instant) -> Instant {
    let since_midnight = TimeDelta::seconds(i64::from(instant.num_seconds_from_midnight()))
        + TimeDelta::nanoseconds(i64::from(instant.nanosecond()));
    instant - since_midnight + TimeDelta::hours(12)
}

/// Solar noon on the calendar date of `instant`, as a clock reading.
pub fn solar_noon(instant: Instant, site: &SiteConfig) -> Result<Instant> {
    solar_time(civil_noon(instant), site.local_longitude, site.standard_longitude)
}

/// Hours between solar noon and `instant`, reduced modulo one day into
/// (-12, 12]. A reference noon from another date aliases onto the same
/// sub-day offset. Negative before solar noon.
fn hours_since_solar_noon(instant: Instant, noon: Instant) -> f64 {
    let mut seconds = (instant - noon).num_seconds().rem_euclid(SECONDS_PER_DAY);
    if seconds > SECONDS_PER_DAY / 2 {
        seconds -= SECONDS_PER_DAY;
    }
    seconds as f64 / 3600.0
}

/// Solar hour angle in degrees: negative in the morning, zero at solar noon.
pub fn hour_angle(instant: Instant, site: &SiteConfig) -> Result<f64> {
    site.validate()?;
    let n = day_of_year(instant);
    let ws = sunset_hour_angle(n, site.latitude)?;
    let n_hours = ws / DEGREES_PER_HOUR;
    let elapsed = hours_since_solar_noon(instant, solar_noon(instant, site)?);
    Ok(ws * (elapsed / n_hours))
}

/// Cosine of the zenith angle. Never depends on azimuth.
fn zenith_cosine(instant: Instant, site: &SiteConfig) -> Result<f64> {
    let n = day_of_year(instant);
    let ha_rad = deg_to_rad(hour_angle(instant, site)?);
    let dec_rad = deg_to_rad(declination(n)?);
    let lat_rad = deg_to_rad(site.latitude);
    Ok(lat_rad.cos() * dec_rad.cos() * ha_rad.cos() + lat_rad.sin() * dec_rad.sin())
}

/// Solar azimuth in degrees, signed like the hour angle (negative before
/// solar noon).
///
/// The quotient by `sin θz` applies to the numerator only and is then scaled
/// by `cos(lat)`. With the sun at the zenith `sin θz = 0` and the result is NaN.
/// At solar noon the zero hour angle gives 0, unless rounding pushes the zenith
/// cosine past 1, in which case the result is NaN as well.
pub fn azimuth(instant: Instant, site: &SiteConfig) -> Result<f64> {
    site.validate()?;
    let n = day_of_year(instant);
    let zenith = zenith_cosine(instant, site)?.acos();
    let ha_rad = deg_to_rad(hour_angle(instant, site)?);
    let dec_rad = deg_to_rad(declination(n)?);
    let lat_rad = deg_to_rad(site.latitude);
    let arg = (zenith.cos() * lat_rad.sin() - dec_rad.sin()) / zenith.sin() * lat_rad.cos();
    Ok(sign(ha_rad) * rad_to_deg(arg.acos()).abs())
}

/// Cosine of the angle of incidence on a surface tilted `tilt` degrees from
/// horizontal, facing the azimuth reference.
pub fn incidence_cosine(instant: Instant, site: &SiteConfig, tilt: f64) -> Result<f64> {
    site.validate()?;
    if tilt == 0.0 {
        return zenith_cosine(instant, site);
    }

    let n = day_of_year(instant);
    let ha = deg_to_rad(hour_angle(instant, site)?);
    let dec = deg_to_rad(declination(n)?);
    let lat = deg_to_rad(site.latitude);
    let beta = deg_to_rad(tilt);
    let gamma = deg_to_rad(azimuth(instant, site)?);

    Ok(dec.sin() * lat.sin() * beta.cos()
        - dec.sin() * lat.cos() * beta.sin() * gamma.cos()
        + dec.cos() * lat.cos() * beta.cos() * ha.cos()
        + dec.cos() * lat.sin() * beta.sin() * gamma.cos() * ha.cos()
        + dec.cos() * beta.sin() * gamma.sin() * ha.sin())
}

/// Every quantity above for one instant, site and surface tilt.
pub fn solar_position(instant: Instant, site: &SiteConfig, tilt: f64) -> Result<SolarAngles> {
    site.validate()?;
    let n = day_of_year(instant);
    let cos_zenith = zenith_cosine(instant, site)?;
    Ok(SolarAngles {
        day_of_year: n,
        declination: declination(n)?,
        sunset_hour_angle: sunset_hour_angle(n, site.latitude)?,
        equation_of_time: equation_of_time(instant),
        solar_time: solar_time(instant, site.local_longitude, site.standard_longitude)?,
        hour_angle: hour_angle(instant, site)?,
        zenith_cosine: cos_zenith,
        zenith: rad_to_deg(cos_zenith.acos()),
        azimuth: azimuth(instant, site)?,
        incidence_cosine: incidence_cosine(instant, site, tilt)?,
    })
}
