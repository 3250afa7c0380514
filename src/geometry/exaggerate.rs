use crate::config::ExportOptions;

use super::bounds::{Bounds, Point3};
use super::scaling::ScaledPoint;

/// A point with its final meshing height, in mm
#[derive(Debug, Clone, Copy)]
pub struct ExaggeratedPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 for ExaggeratedPoint {
    fn coords(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }
}

/// Rewrite the provisional heights with the configured height policy
///
/// With `target_height > 0` the full elevation range is stretched to exactly
/// that many mm. Otherwise the `vertical` multiplier is applied on top of the
/// xy-fit scale (two compounding factors, deliberately).
///
/// The `zcut` baseline decides what counts as zero: the route's lowest point
/// (relative mode) or the absolute z=0 of the scaled space. Note the absolute
/// baseline is expressed in xy-fit-scaled mm, not real-world mm.
///
/// `min_path_height` is added last so every point, including the lowest,
/// sits strictly above the base's top surface.
pub fn exaggerate_points(points: &[ScaledPoint], options: &ExportOptions) -> Vec<ExaggeratedPoint> {
    let bounds = Bounds::of(points);

    let baseline = if options.zcut { bounds.min_z } else { 0.0 };
    let current_range = bounds.max_z - baseline;

    let vertical_scale = if options.target_height > 0.0 {
        if current_range > 0.0 {
            // Stretch the relief to exactly the requested height
            options.target_height / current_range
        } else {
            // Flat route: nothing to stretch, keep it flat instead of
            // dividing by zero
            1.0
        }
    } else {
        options.vertical
    };

    points
        .iter()
        .map(|p| ExaggeratedPoint {
            x: p.x,
            y: p.y,
            z: (p.z - baseline) * vertical_scale + options.min_path_height,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scaled(points: &[(f64, f64, f64)]) -> Vec<ScaledPoint> {
        points
            .iter()
            .map(|&(x, y, z)| ScaledPoint { x, y, z })
            .collect()
    }

    #[test]
    fn test_target_height_stretches_range() {
        let points = scaled(&[(0.0, 0.0, 2.0), (10.0, 0.0, 7.0), (20.0, 0.0, 4.0)]);
        let options = ExportOptions {
            target_height: 20.0,
            min_path_height: 1.0,
            zcut: true,
            ..Default::default()
        };

        let result = exaggerate_points(&points, &options);
        let bounds = Bounds::of(&result);

        // Range 5mm stretched to exactly 20mm, then standoff applied
        assert!((bounds.height() - 20.0).abs() < 1e-9);
        assert!((bounds.min_z - 1.0).abs() < 1e-9);
        assert!((bounds.max_z - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_flat_route_keeps_standoff_only() {
        let points = scaled(&[(0.0, 0.0, 3.0), (10.0, 0.0, 3.0)]);
        let options = ExportOptions {
            target_height: 20.0,
            min_path_height: 1.0,
            zcut: true,
            ..Default::default()
        };

        let result = exaggerate_points(&points, &options);

        // Zero range: everything collapses onto the standoff plane
        for p in &result {
            assert!((p.z - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_vertical_multiplier_mode() {
        let points = scaled(&[(0.0, 0.0, 1.0), (10.0, 0.0, 3.0)]);
        let options = ExportOptions {
            target_height: 0.0,
            vertical: 5.0,
            min_path_height: 1.0,
            zcut: true,
            ..Default::default()
        };

        let result = exaggerate_points(&points, &options);

        // (1 - 1) * 5 + 1 and (3 - 1) * 5 + 1
        assert!((result[0].z - 1.0).abs() < 1e-9);
        assert!((result[1].z - 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_absolute_baseline() {
        let points = scaled(&[(0.0, 0.0, 2.0), (10.0, 0.0, 4.0)]);
        let options = ExportOptions {
            target_height: 0.0,
            vertical: 2.0,
            min_path_height: 1.0,
            zcut: false,
            ..Default::default()
        };

        let result = exaggerate_points(&points, &options);

        // Baseline 0 instead of min_z: heights keep their absolute offset
        assert!((result[0].z - 5.0).abs() < 1e-9);
        assert!((result[1].z - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_xy_untouched() {
        let points = scaled(&[(1.5, -2.5, 0.0), (3.0, 4.0, 10.0)]);
        let options = ExportOptions::default();

        let result = exaggerate_points(&points, &options);

        assert_eq!(result[0].x, 1.5);
        assert_eq!(result[0].y, -2.5);
        assert_eq!(result[1].x, 3.0);
        assert_eq!(result[1].y, 4.0);
    }
}
