use crate::domain::Waypoint;
use crate::error::{Error, Result};

use super::bounds::Point3;

/// WGS84 equatorial radius in meters
const EARTH_RADIUS: f64 = 6_378_137.0;

/// WGS84 flattening
const FLATTENING: f64 = 1.0 / 298.257_223_563;

/// UTM central-meridian scale factor
const UTM_K0: f64 = 0.9996;

/// A waypoint projected to planar meters; z carries the elevation through
#[derive(Debug, Clone, Copy)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 for ProjectedPoint {
    fn coords(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }
}

/// Forward projection from WGS84 degrees to planar meters
///
/// Two projections are supported:
/// - `mercator`: spherical web-Mercator. Constant for all routes, no setup
///   needed. Shapes stretch toward the poles, which is irrelevant here
///   because the route is scaled to fit a coin anyway.
/// - `utm`: transverse Mercator on the WGS84 ellipsoid. The zone is picked
///   once from the first waypoint; routes spanning multiple zones accumulate
///   distortion toward their far end. Not corrected.
///
/// Both transforms are hand-rolled. Route-scale accuracy does not justify a
/// proj dependency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    Mercator,
    Utm { zone: u32, north: bool },
}

impl Projection {
    /// Select a projection for a route
    ///
    /// # Errors
    /// `UnsupportedProjection` for any kind other than "mercator" or "utm"
    pub fn for_route(kind: &str, points: &[Waypoint]) -> Result<Self> {
        match kind {
            "mercator" => Ok(Projection::Mercator),
            "utm" => {
                let first = points.first().ok_or(Error::TooFewPoints(0))?;
                Ok(Projection::Utm {
                    zone: utm_zone(first.lon),
                    north: first.lat >= 0.0,
                })
            }
            other => Err(Error::UnsupportedProjection(other.to_string())),
        }
    }

    /// Project a single (lon, lat) pair in degrees to (x, y) meters
    pub fn forward(&self, lon: f64, lat: f64) -> (f64, f64) {
        match *self {
            Projection::Mercator => mercator_forward(lon, lat),
            Projection::Utm { zone, north } => utm_forward(lon, lat, zone, north),
        }
    }

    /// Project a slice of waypoints, passing elevation through as z
    pub fn project_points(&self, points: &[Waypoint]) -> Vec<ProjectedPoint> {
        points
            .iter()
            .map(|wp| {
                let (x, y) = self.forward(wp.lon, wp.lat);
                ProjectedPoint {
                    x,
                    y,
                    z: wp.elevation_or_zero(),
                }
            })
            .collect()
    }
}

/// UTM zone number for a longitude, 1..=60
fn utm_zone(lon: f64) -> u32 {
    (((lon + 180.0) / 6.0).floor() as i32 + 1).clamp(1, 60) as u32
}

fn mercator_forward(lon: f64, lat: f64) -> (f64, f64) {
    let x = EARTH_RADIUS * lon.to_radians();
    let y = EARTH_RADIUS * (std::f64::consts::FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln();
    (x, y)
}

/// Standard transverse Mercator series (Snyder, "Map Projections: A Working
/// Manual", eq. 8-9..8-15), good to sub-millimeter within a zone.
fn utm_forward(lon: f64, lat: f64, zone: u32, north: bool) -> (f64, f64) {
    let e2 = FLATTENING * (2.0 - FLATTENING);
    let ep2 = e2 / (1.0 - e2);

    let phi = lat.to_radians();
    let central_meridian = ((zone as f64 - 1.0) * 6.0 - 180.0 + 3.0).to_radians();

    let sin_phi = phi.sin();
    let cos_phi = phi.cos();

    let n = EARTH_RADIUS / (1.0 - e2 * sin_phi * sin_phi).sqrt();
    let t = phi.tan() * phi.tan();
    let c = ep2 * cos_phi * cos_phi;
    let a = (lon.to_radians() - central_meridian) * cos_phi;

    let m = EARTH_RADIUS
        * ((1.0 - e2 / 4.0 - 3.0 * e2 * e2 / 64.0 - 5.0 * e2 * e2 * e2 / 256.0) * phi
            - (3.0 * e2 / 8.0 + 3.0 * e2 * e2 / 32.0 + 45.0 * e2 * e2 * e2 / 1024.0)
                * (2.0 * phi).sin()
            + (15.0 * e2 * e2 / 256.0 + 45.0 * e2 * e2 * e2 / 1024.0) * (4.0 * phi).sin()
            - (35.0 * e2 * e2 * e2 / 3072.0) * (6.0 * phi).sin());

    let x = UTM_K0
        * n
        * (a + (1.0 - t + c) * a.powi(3) / 6.0
            + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * ep2) * a.powi(5) / 120.0)
        + 500_000.0;

    let mut y = UTM_K0
        * (m + n
            * phi.tan()
            * (a * a / 2.0
                + (5.0 - t + 9.0 * c + 4.0 * c * c) * a.powi(4) / 24.0
                + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * ep2) * a.powi(6) / 720.0));

    if !north {
        y += 10_000_000.0;
    }

    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wp(lat: f64, lon: f64) -> Waypoint {
        Waypoint::new(lat, lon, None)
    }

    #[test]
    fn test_mercator_origin() {
        let proj = Projection::for_route("mercator", &[wp(0.0, 0.0)]).unwrap();
        let (x, y) = proj.forward(0.0, 0.0);
        assert!(x.abs() < 1e-6);
        assert!(y.abs() < 1e-6);
    }

    #[test]
    fn test_mercator_one_degree_lon() {
        let proj = Projection::Mercator;
        let (x, _) = proj.forward(1.0, 0.0);
        // One degree of longitude at the equator
        assert!((x - 111_319.49).abs() < 1.0);
    }

    #[test]
    fn test_utm_zone_selection() {
        // Santa Cruz, zone 10 north
        let proj = Projection::for_route("utm", &[wp(37.0, -122.0)]).unwrap();
        assert_eq!(
            proj,
            Projection::Utm {
                zone: 10,
                north: true
            }
        );

        // Zurich, zone 32 north
        let proj = Projection::for_route("utm", &[wp(47.37, 8.54)]).unwrap();
        assert_eq!(
            proj,
            Projection::Utm {
                zone: 32,
                north: true
            }
        );
    }

    #[test]
    fn test_utm_central_meridian_easting() {
        // On the central meridian of zone 31 (3°E) the easting is exactly
        // the false easting
        let proj = Projection::Utm {
            zone: 31,
            north: true,
        };
        let (x, y) = proj.forward(3.0, 0.0);
        assert!((x - 500_000.0).abs() < 0.01);
        assert!(y.abs() < 0.01);
    }

    #[test]
    fn test_utm_southern_hemisphere_false_northing() {
        let proj = Projection::for_route("utm", &[wp(-33.9, 18.4)]).unwrap();
        assert_eq!(
            proj,
            Projection::Utm {
                zone: 34,
                north: false
            }
        );

        // Cape Town sits around 6.2M meters of southern-hemisphere northing
        let (_, y) = proj.forward(18.4, -33.9);
        assert!(y > 5_000_000.0 && y < 10_000_000.0);
    }

    #[test]
    fn test_unsupported_projection() {
        let err = Projection::for_route("lambert", &[wp(0.0, 0.0)]).unwrap_err();
        assert!(matches!(err, Error::UnsupportedProjection(_)));
    }

    #[test]
    fn test_project_points_elevation_passthrough() {
        let points = vec![
            Waypoint::new(37.0, -122.0, Some(120.0)),
            Waypoint::new(37.001, -122.0, None),
        ];
        let proj = Projection::Mercator;
        let projected = proj.project_points(&points);

        assert_eq!(projected.len(), 2);
        assert_eq!(projected[0].z, 120.0);
        assert_eq!(projected[1].z, 0.0);
    }
}
