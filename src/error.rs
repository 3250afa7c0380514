use thiserror::Error;

/// Errors produced by the coin geometry pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// A route needs at least two waypoints to trace a ribbon
    #[error("route must contain at least 2 points, got {0}")]
    TooFewPoints(usize),

    /// Unrecognized projection type in the export options
    #[error("unsupported projection type: {0}")]
    UnsupportedProjection(String),

    /// Shape types other than `track` are placeholders
    #[error("shape type '{0}' is not implemented")]
    UnsupportedShape(String),

    /// Projected route collapsed to a single point in the xy plane,
    /// so no scale-to-fit factor exists
    #[error("route footprint has zero width and depth, cannot scale to fit")]
    ZeroExtentFootprint,

    /// Two consecutive points coincide after simplification, leaving the
    /// ribbon with no direction at that segment
    #[error("zero-length segment between simplified points {0} and {1}")]
    ZeroLengthSegment(usize, usize),
}

pub type Result<T> = std::result::Result<T, Error>;
