pub mod naming;

pub use naming::output_filename;

use crate::config::{ExportOptions, fit};
use crate::domain::Route;
use crate::error::{Error, Result};
use crate::geometry::{Bounds, Projection, Scaler, exaggerate_points, simplify_points};
use crate::mesh::{Mesh, ValidationReport, build_base_plate, build_wall, merge_meshes, validate_mesh};

/// A finished coin: merged triangle soup plus its validation report
///
/// The caller owns the buffers; in a live-preview loop the previous mesh
/// should be dropped before or right after building the next one.
#[derive(Debug)]
pub struct CoinMesh {
    pub mesh: Mesh,
    pub report: ValidationReport,
}

impl CoinMesh {
    pub fn triangle_count(&self) -> usize {
        self.mesh.triangle_count()
    }
}

/// Run the full geometry pipeline for one route
///
/// project -> scale/center -> exaggerate -> simplify -> wall (+ base) ->
/// merge -> translate into positive xy space -> validate.
///
/// Pure function of its inputs: no shared state, safe to call concurrently
/// for different routes.
pub fn generate_coin_mesh(route: &Route, options: &ExportOptions) -> Result<CoinMesh> {
    if route.points.len() < 2 {
        return Err(Error::TooFewPoints(route.points.len()));
    }
    if options.shape != "track" {
        return Err(Error::UnsupportedShape(options.shape.clone()));
    }

    let projection = Projection::for_route(&options.projection, &route.points)?;
    let projected = projection.project_points(&route.points);

    let bounds = Bounds::of(&projected);
    let scaler = Scaler::fit(&bounds, options)?;
    let scaled = scaler.apply_points(&projected);

    let exaggerated = exaggerate_points(&scaled, options);
    let simplified = simplify_points(&exaggerated, fit::MIN_POINT_SPACING_MM);

    let wall = build_wall(&simplified, options.buffer)?;

    let base = if options.base > 0.0 {
        let (min, max) = wall.extent();
        let center_x = (min[0] + max[0]) / 2.0;
        let center_y = (min[1] + max[1]) / 2.0;
        Some(build_base_plate(center_x, center_y, options))
    } else {
        None
    };

    let mut mesh = merge_meshes(&wall, base.as_ref());

    // Slicers want the model in positive coordinates
    let (min, _) = mesh.extent();
    mesh.translate(-min[0], -min[1], 0.0);

    let report = validate_mesh(&mesh);

    Ok(CoinMesh { mesh, report })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Waypoint;

    fn test_route() -> Route {
        // A short out-and-back over a summit, due north
        Route::new(vec![
            Waypoint::new(37.000, -122.000, Some(0.0)),
            Waypoint::new(37.001, -122.000, Some(50.0)),
            Waypoint::new(37.002, -122.000, Some(0.0)),
        ])
    }

    #[test]
    fn test_too_few_points_rejected_before_geometry() {
        let route = Route::new(vec![Waypoint::new(37.0, -122.0, None)]);
        let err = generate_coin_mesh(&route, &ExportOptions::default()).unwrap_err();
        assert!(matches!(err, Error::TooFewPoints(1)));
    }

    #[test]
    fn test_unimplemented_shapes_rejected() {
        let options = ExportOptions {
            shape: "ring".to_string(),
            ..Default::default()
        };
        let err = generate_coin_mesh(&test_route(), &options).unwrap_err();
        assert!(matches!(err, Error::UnsupportedShape(_)));
    }

    #[test]
    fn test_end_to_end_default_options() {
        let coin = generate_coin_mesh(&test_route(), &ExportOptions::default()).unwrap();

        assert!(coin.report.is_valid());
        assert_eq!(
            coin.mesh.normals.len(),
            coin.mesh.positions.len(),
            "output buffers must stay in lockstep"
        );

        // All 3 points survive simplification (post-scale spacing is tens
        // of mm), so the wall alone is 8*2+4 = 20 triangles; the base adds
        // 128 more
        assert_eq!(coin.triangle_count(), 20 + 128);

        // Elevation range maps to exactly 20mm of relief riding on the 1mm
        // standoff; the base dips 3mm below the wall's zero plane, which
        // the final translate leaves untouched
        let (min, max) = coin.mesh.extent();
        assert!((max[2] - 21.0).abs() < 1e-3);
        assert!((min[2] + 3.0).abs() < 1e-3);

        // Translated into positive xy space
        assert!(min[0].abs() < 1e-3);
        assert!(min[1].abs() < 1e-3);
    }

    #[test]
    fn test_idempotent_output() {
        let route = test_route();
        let options = ExportOptions::default();

        let a = generate_coin_mesh(&route, &options).unwrap();
        let b = generate_coin_mesh(&route, &options).unwrap();

        assert_eq!(a.mesh.positions, b.mesh.positions);
        assert_eq!(a.mesh.normals, b.mesh.normals);
    }

    #[test]
    fn test_no_base_is_watertight_wall_only() {
        let options = ExportOptions {
            base: 0.0,
            ..Default::default()
        };
        let coin = generate_coin_mesh(&test_route(), &options).unwrap();

        // Wall only: 8(n-1)+4 triangles for n=3 simplified points
        assert_eq!(coin.triangle_count(), 20);

        // Without a base nothing dips below z=0
        let (min, _) = coin.mesh.extent();
        assert_eq!(min[2], 0.0);
    }

    #[test]
    fn test_flat_route_all_standoff() {
        let route = Route::new(vec![
            Waypoint::new(37.000, -122.000, Some(100.0)),
            Waypoint::new(37.001, -122.000, Some(100.0)),
            Waypoint::new(37.002, -122.000, Some(100.0)),
        ]);
        let coin = generate_coin_mesh(&route, &ExportOptions::default()).unwrap();

        // Flat relief collapses onto the standoff plane; wall tops out at
        // min_path_height
        let (_, max) = coin.mesh.extent();
        assert!((max[2] - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_scaled_footprint_matches_available_size() {
        let options = ExportOptions {
            base: 0.0,
            bed_x: 200.0,
            bed_y: 200.0,
            ..Default::default()
        };
        let coin = generate_coin_mesh(&test_route(), &options).unwrap();

        // available = 200 - 2*10 = 180mm; the route is a straight
        // north-south line, so the ribbon's y extent is the fitted span
        // (plus nothing: end caps cut square across the path)
        let (min, max) = coin.mesh.extent();
        let depth = max[1] - min[1];
        assert!((depth - 180.0).abs() < 0.1);
    }

    #[test]
    fn test_utm_projection_end_to_end() {
        let options = ExportOptions {
            projection: "utm".to_string(),
            ..Default::default()
        };
        let coin = generate_coin_mesh(&test_route(), &options).unwrap();
        assert!(coin.report.is_valid());
    }

    #[test]
    fn test_degenerate_footprint_rejected() {
        // Both points project to the same planar position
        let route = Route::new(vec![
            Waypoint::new(37.0, -122.0, Some(0.0)),
            Waypoint::new(37.0, -122.0, Some(500.0)),
        ]);
        let err = generate_coin_mesh(&route, &ExportOptions::default()).unwrap_err();
        assert!(matches!(err, Error::ZeroExtentFootprint));
    }
}
