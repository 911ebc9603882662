pub mod angles;
pub mod error;
pub mod instant;
pub mod types;

pub use angles::{
    azimuth, deg_to_rad, declination, equation_of_time, hour_angle, incidence_cosine,
    rad_to_deg, solar_noon, solar_position, solar_time, sunset_hour_angle, DEGREES_PER_HOUR,
    EARTH_AXIAL_TILT, MINUTES_PER_DEGREE,
};

pub use error::{check_day_of_year, check_latitude, check_longitude, Error, ErrorKind, Result};

pub use instant::{day_of_year, days_since_new_year, from_zoned, parse_instant, Instant};

pub use types::{SiteConfig, SolarAngles, SITE_LATITUDE, SITE_LONGITUDE, STANDARD_MERIDIAN};
