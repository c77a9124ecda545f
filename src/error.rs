use thiserror::Error;

/// Error type for hexfog operations.
///
/// Every variant is a local, deterministic failure. Nothing here is transient,
/// so callers should fix the input rather than retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HexFogError {
    /// Latitude or longitude is non-finite or outside its valid range.
    #[error("invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// The resolution is outside the supported range (0-15).
    #[error("unsupported resolution: {0}")]
    UnsupportedResolution(u8),

    /// The cell index is malformed or not part of the tessellation.
    #[error("invalid cell index: {0}")]
    InvalidCellIndex(String),

    /// Input geometry is not valid GeoJSON or not a supported type.
    #[error("geometry parse error: {0}")]
    GeometryParse(String),

    /// CSV parsing, reading, or writing error.
    #[error("CSV error: {0}")]
    Csv(String),

    /// File I/O error.
    #[error("IO error: {0}")]
    Io(String),

    /// Failed to serialize output as JSON.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for HexFogError {
    fn from(e: std::io::Error) -> Self {
        HexFogError::Io(e.to_string())
    }
}

impl From<csv::Error> for HexFogError {
    fn from(e: csv::Error) -> Self {
        HexFogError::Csv(e.to_string())
    }
}

impl From<serde_json::Error> for HexFogError {
    fn from(e: serde_json::Error) -> Self {
        HexFogError::Serialization(e.to_string())
    }
}
