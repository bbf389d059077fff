use crate::crs::Crs;
use std::io;
use thiserror::Error;

/// Errors surfaced to the user. Processing failures are always tagged with
/// the stage they happened in.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    BadParameter(String),

    #[error("Failed to load STAC file: {0}")]
    StacLoad(#[from] StacError),
    #[error("Failed to parse geometry: {0}")]
    GeometryParse(#[from] GeometryError),
    #[error("Failed to reproject geometry: {0}")]
    Reproject(#[from] ProjectionError),
}

#[derive(Debug, Error)]
pub enum StacError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP request failed with status {0}")]
    HttpStatus(u16),
    #[error("Document is not a STAC Item")]
    NotStacItem,
    #[error("No 'geometry' field found in STAC file.")]
    MissingGeometry,
}

#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("{0}")]
    InvalidGeoJson(String),
    #[error("{0}")]
    InvalidWkt(String),
}

#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("Invalid CRS identifier: {0}")]
    InvalidCrs(String),
    #[error("Unknown CRS: {0}")]
    UnknownCrs(Crs),
    #[error("{0}")]
    Transform(String),
}

impl From<geojson::Error> for GeometryError {
    fn from(e: geojson::Error) -> Self {
        GeometryError::InvalidGeoJson(e.to_string())
    }
}

impl From<proj4rs::errors::Error> for ProjectionError {
    fn from(e: proj4rs::errors::Error) -> Self {
        ProjectionError::Transform(e.to_string())
    }
}

impl Error {
    /// Process exit status for this error. User-input problems exit with 2,
    /// everything that failed while processing exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage(_) | Error::BadParameter(_) => 2,
            _ => 1,
        }
    }
}
