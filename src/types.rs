#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angles;
use crate::error::{check_latitude, check_longitude, Result};
use crate::instant::Instant;

/// Latitude of the reference site, degrees (south negative).
pub const SITE_LATITUDE: f64 = -40.507778;
/// Longitude of the reference site, degrees (west negative).
pub const SITE_LONGITUDE: f64 = -40.507778;
/// Reference meridian of the site's standard time zone, degrees.
pub const STANDARD_MERIDIAN: f64 = -45.0;

/// Observer location. All site-dependent operations take it explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SiteConfig {
    pub latitude: f64,
    pub local_longitude: f64,
    pub standard_longitude: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            latitude: SITE_LATITUDE,
            local_longitude: SITE_LONGITUDE,
            standard_longitude: STANDARD_MERIDIAN,
        }
    }
}

impl SiteConfig {
    pub fn new(latitude: f64, local_longitude: f64, standard_longitude: f64) -> Result<Self> {
        let site = Self {
            latitude,
            local_longitude,
            standard_longitude,
        };
        site.validate()?;
        Ok(site)
    }

    /// Checks latitude, then both longitudes.
    pub fn validate(&self) -> Result<()> {
        check_latitude(self.latitude)?;
        check_longitude(self.local_longitude)?;
        check_longitude(self.standard_longitude)
    }

    pub fn with_latitude(self, latitude: f64) -> Self {
        Self { latitude, ..self }
    }

    pub fn sunset_hour_angle(&self, n: i32) -> Result<f64> {
        angles::sunset_hour_angle(n, self.latitude)
    }

    pub fn solar_time(&self, instant: Instant) -> Result<Instant> {
        angles::solar_time(instant, self.local_longitude, self.standard_longitude)
    }

    pub fn hour_angle(&self, instant: Instant) -> Result<f64> {
        angles::hour_angle(instant, self)
    }

    pub fn azimuth(&self, instant: Instant) -> Result<f64> {
        angles::azimuth(instant, self)
    }

    pub fn incidence_cosine(&self, instant: Instant, tilt: f64) -> Result<f64> {
        angles::incidence_cosine(instant, self, tilt)
    }

    pub fn solar_position(&self, instant: Instant, tilt: f64) -> Result<SolarAngles> {
        angles::solar_position(instant, self, tilt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolarAngles {
    pub day_of_year: i32,
    pub declination: f64,
    pub sunset_hour_angle: f64,
    /// Minutes.
    pub equation_of_time: f64,
    pub solar_time: Instant,
    pub hour_angle: f64,
    pub zenith_cosine: f64,
    pub zenith: f64,
    pub azimuth: f64,
    pub incidence_cosine: f64,
}

impl SolarAngles {
    /// Hours between sunrise and sunset. NaN during polar day or night.
    pub fn day_length_hours(&self) -> f64 {
        2.0 * self.sunset_hour_angle / angles::DEGREES_PER_HOUR
    }
}
