use serde::Deserialize;

/// A single GPS fix on a route
///
/// Elevation is optional in upstream data (some trackers omit it); a missing
/// value is treated as sea level.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Waypoint {
    /// Latitude in degrees (WGS84)
    pub lat: f64,
    /// Longitude in degrees (WGS84)
    pub lon: f64,
    /// Elevation in meters above sea level
    #[serde(default)]
    pub elevation: Option<f64>,
}

impl Waypoint {
    #[allow(dead_code)]
    pub fn new(lat: f64, lon: f64, elevation: Option<f64>) -> Self {
        Self {
            lat,
            lon,
            elevation,
        }
    }

    /// Elevation with the sea-level fallback applied
    pub fn elevation_or_zero(&self) -> f64 {
        self.elevation.unwrap_or(0.0)
    }
}

/// A finalized route as handed over by the upstream transformation pipeline
///
/// The string tags describe how the upstream pipeline produced the point
/// list (aggregation window, elevation mode, path pattern). They only feed
/// the output filename; the geometry stages never look at them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Route {
    /// Points in travel order, (lat, lon, elevation)
    pub points: Vec<Waypoint>,
    /// Source filename, e.g. "morning_climb.gpx"
    #[serde(default)]
    pub name: Option<String>,
    /// Stable route id, used for naming when no filename exists
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub aggregation: Option<String>,
    #[serde(default)]
    pub elevation_mode: Option<String>,
    #[serde(default)]
    pub path_pattern: Option<String>,
}

impl Route {
    #[allow(dead_code)]
    pub fn new(points: Vec<Waypoint>) -> Self {
        Self {
            points,
            ..Default::default()
        }
    }
}
