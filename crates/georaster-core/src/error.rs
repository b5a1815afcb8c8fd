use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeoRasterError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{axis} coordinate {value} out of range [{min}, {max}]")]
    OutOfRange {
        axis: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Incompatible operands: {0}")]
    IncompatibleOperands(String),

    #[error("Rasters do not overlap")]
    NoOverlap,

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Raster has no geospatial frame")]
    MissingFrame,

    #[error("Malformed raster data: {0}")]
    Format(String),

    #[error("No decoder registered for format: {0}")]
    UnsupportedFormat(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Fieldless classification of a [`GeoRasterError`], for callers that branch
/// on the failure category rather than its message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    OutOfRange,
    IncompatibleOperands,
    NoOverlap,
    InvalidValue,
    MissingFrame,
    Format,
    UnsupportedFormat,
    Config,
    Io,
}

impl GeoRasterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GeoRasterError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            GeoRasterError::OutOfRange { .. } => ErrorKind::OutOfRange,
            GeoRasterError::IncompatibleOperands(_) => ErrorKind::IncompatibleOperands,
            GeoRasterError::NoOverlap => ErrorKind::NoOverlap,
            GeoRasterError::InvalidValue(_) => ErrorKind::InvalidValue,
            GeoRasterError::MissingFrame => ErrorKind::MissingFrame,
            GeoRasterError::Format(_) => ErrorKind::Format,
            GeoRasterError::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            GeoRasterError::Config(_) => ErrorKind::Config,
            GeoRasterError::Io(_) => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, GeoRasterError>;
