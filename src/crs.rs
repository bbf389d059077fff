use crate::error::ProjectionError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::{fmt, str::FromStr};

static EPSG_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\s*(?:EPSG:)?(\d+)\s*$").unwrap());

/// Geographic WGS84, the CRS of all GeoJSON input.
pub const WGS84: Crs = Crs(4326);

/// An `EPSG:<code>` coordinate reference system identifier.
///
/// Parsing only checks the shape of the identifier. Whether the code is
/// actually usable is decided by [`proj_definition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crs(u32);

impl Crs {
    pub fn epsg(code: u32) -> Result<Crs, ProjectionError> {
        if code == 0 {
            return Err(ProjectionError::InvalidCrs(code.to_string()));
        }
        Ok(Crs(code))
    }

    pub fn code(&self) -> u32 {
        self.0
    }

    /// The proj4 definition of this CRS, or `UnknownCrs` if the EPSG
    /// database has no entry for it.
    pub fn definition(&self) -> Result<&'static str, ProjectionError> {
        proj_definition(self.0).ok_or(ProjectionError::UnknownCrs(*self))
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EPSG:{}", self.0)
    }
}

impl FromStr for Crs {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Crs, ProjectionError> {
        EPSG_ID
            .captures(s)
            .and_then(|caps| caps[1].parse::<u32>().ok())
            .ok_or_else(|| ProjectionError::InvalidCrs(s.to_string()))
            .and_then(Crs::epsg)
    }
}

/// proj4 definition for an EPSG code, looked up in the bundled EPSG
/// database.
pub fn proj_definition(code: u32) -> Option<&'static str> {
    u16::try_from(code)
        .ok()
        .and_then(crs_definitions::from_code)
        .map(|def| def.proj4)
}
