use crate::config::{ExportOptions, fit};
use crate::error::{Error, Result};

use super::bounds::{Bounds, Point3};
use super::projection::ProjectedPoint;

/// A point after the scale-to-fit transform, in mm
///
/// z is provisional here: it has been scaled by the same xy-fit factor and
/// still awaits the vertical exaggeration stage.
#[derive(Debug, Clone, Copy)]
pub struct ScaledPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 for ScaledPoint {
    fn coords(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }
}

/// Scales projected coordinates (meters) uniformly to physical mm, centered
/// on the route's bounding-box midpoint
///
/// The target footprint is the base disc when a base is requested, otherwise
/// the print bed. Scaling is always uniform across x and y, so the route
/// shape is never anisotropically distorted.
#[derive(Debug, Clone)]
pub struct Scaler {
    /// Shrink factor applied after the meter -> mm conversion
    scale: f64,
    center_x: f64,
    center_y: f64,
    /// Fitted footprint size in mm
    available: f64,
}

impl Scaler {
    /// Compute the fit for a projected route
    ///
    /// # Errors
    /// `ZeroExtentFootprint` when the route collapses to a single point in
    /// the xy plane (or an exactly axis-aligned zero-extent line), which
    /// leaves no dimension to fit against.
    pub fn fit(bounds: &Bounds, options: &ExportOptions) -> Result<Self> {
        let available = if options.base > 0.0 && options.base_diameter > 0.0 {
            options.base_diameter - 2.0 * (options.buffer * fit::BUFFER_CLEARANCE_FACTOR)
        } else {
            options.bed_x.min(options.bed_y) - 2.0 * fit::BED_MARGIN_MM
        };

        let max_dim = bounds.width().max(bounds.depth());
        if max_dim <= 0.0 {
            return Err(Error::ZeroExtentFootprint);
        }

        Ok(Self {
            scale: available / (max_dim * 1000.0),
            center_x: bounds.center_x(),
            center_y: bounds.center_y(),
            available,
        })
    }

    /// Scale a projected point to mm; elevation is scaled by the same
    /// xy-fit factor and refined later by the exaggeration stage
    pub fn apply(&self, p: &ProjectedPoint) -> ScaledPoint {
        ScaledPoint {
            x: (p.x - self.center_x) * 1000.0 * self.scale,
            y: (p.y - self.center_y) * 1000.0 * self.scale,
            z: p.z * 1000.0 * self.scale,
        }
    }

    pub fn apply_points(&self, points: &[ProjectedPoint]) -> Vec<ScaledPoint> {
        points.iter().map(|p| self.apply(p)).collect()
    }

    /// The fitted footprint size in mm
    #[allow(dead_code)]
    pub fn available_size(&self) -> f64 {
        self.available
    }

    /// The applied scale factor (mm per meter, divided by 1000)
    #[allow(dead_code)]
    pub fn scale_factor(&self) -> f64 {
        self.scale
    }
}
