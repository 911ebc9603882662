use thiserror::Error;

use crate::instant::Instant;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A numeric argument lies outside its documented range.
    Domain,
    /// An argument could not be read as a calendar instant.
    TypeMismatch,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Day of year outside (0, 366]
    #[error("invalid day of year {value} (must be in 1..=366)")]
    InvalidDayOfYear { value: i32 },

    /// Latitude outside [-90, 90] degrees
    #[error("invalid latitude {value}° (must be between -90° and +90°)")]
    InvalidLatitude { value: f64 },

    /// Longitude outside [-180, 180] degrees
    #[error("invalid longitude {value}° (must be between -180° and +180°)")]
    InvalidLongitude { value: f64 },

    #[error("solar time of {instant} falls outside the representable calendar range")]
    InstantOutOfRange { instant: Instant },

    #[error("not a calendar instant: {input:?}")]
    TypeMismatch { input: String },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDayOfYear { .. }
            | Self::InvalidLatitude { .. }
            | Self::InvalidLongitude { .. }
            | Self::InstantOutOfRange { .. } => ErrorKind::Domain,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
        }
    }
}

pub fn check_day_of_year(n: i32) -> Result<()> {
    if 0 < n && n <= 366 {
        Ok(())
    } else {
        Err(Error::InvalidDayOfYear { value: n })
    }
}

pub fn check_latitude(latitude: f64) -> Result<()> {
    if (-90.0..=90.0).contains(&latitude) {
        Ok(())
    } else {
        Err(Error::InvalidLatitude { value: latitude })
    }
}

pub fn check_longitude(longitude: f64) -> Result<()> {
    if (-180.0..=180.0).contains(&longitude) {
        Ok(())
    } else {
        Err(Error::InvalidLongitude { value: longitude })
    }
}
