use serde::Deserialize;
use std::path::PathBuf;

/// Central print-fit constants, all in mm unless noted.
///
/// The ribbon must stay clear of the base rim, so the footprint fit reserves
/// clearance proportional to the ribbon width. Values here are shared by the
/// scaling, simplification, and base-plate stages.
pub mod fit {
    /// Margin kept on each side when fitting to a rectangular bed
    pub const BED_MARGIN_MM: f64 = 10.0;

    /// Clearance reserved on each side when fitting inside a circular base,
    /// expressed as a multiple of the ribbon width
    pub const BUFFER_CLEARANCE_FACTOR: f64 = 4.0;

    /// Base diameter used when the options leave it unset
    pub const FALLBACK_BASE_DIAMETER_MM: f64 = 50.0;

    /// Radial resolution of the cylindrical base
    pub const BASE_SEGMENTS: usize = 32;

    /// Minimum spacing between simplified route points
    pub const MIN_POINT_SPACING_MM: f64 = 0.5;
}

fn default_shape() -> String {
    "track".to_string()
}
fn default_projection() -> String {
    "mercator".to_string()
}
fn default_buffer() -> f64 {
    0.5
}
fn default_target_height() -> f64 {
    20.0
}
fn default_vertical() -> f64 {
    10.0
}
fn default_base() -> f64 {
    3.0
}
fn default_base_diameter() -> f64 {
    80.0
}
fn default_min_path_height() -> f64 {
    1.0
}
fn default_zcut() -> bool {
    true
}
fn default_bed() -> f64 {
    200.0
}

/// Options for one coin export
#[derive(Debug, Clone, Deserialize)]
pub struct ExportOptions {
    /// Route shape: only "track" (ribbon) is implemented
    #[serde(default = "default_shape")]
    pub shape: String,
    /// Projection type: "mercator" or "utm"
    #[serde(default = "default_projection")]
    pub projection: String,
    /// Ribbon width in mm
    #[serde(default = "default_buffer")]
    pub buffer: f64,
    /// Total relief height in mm; 0 disables the target and falls back to
    /// the `vertical` multiplier
    #[serde(default = "default_target_height")]
    pub target_height: f64,
    /// Vertical exaggeration multiplier, used iff `target_height` is 0
    #[serde(default = "default_vertical")]
    pub vertical: f64,
    /// Base plate height in mm; 0 means no base
    #[serde(default = "default_base")]
    pub base: f64,
    /// Base plate diameter in mm; 0 means unset
    #[serde(default = "default_base_diameter")]
    pub base_diameter: f64,
    /// Floor offset in mm added to every point, keeps even the lowest part
    /// of the ribbon above the base surface
    #[serde(default = "default_min_path_height")]
    pub min_path_height: f64,
    /// Measure heights relative to the route's lowest point instead of the
    /// absolute zero baseline
    #[serde(default = "default_zcut")]
    pub zcut: bool,
    /// Print bed size in mm, used iff `base` is 0
    #[serde(default = "default_bed")]
    pub bed_x: f64,
    #[serde(default = "default_bed")]
    pub bed_y: f64,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            shape: default_shape(),
            projection: default_projection(),
            buffer: default_buffer(),
            target_height: default_target_height(),
            vertical: default_vertical(),
            base: default_base(),
            base_diameter: default_base_diameter(),
            min_path_height: default_min_path_height(),
            zcut: default_zcut(),
            bed_x: default_bed(),
            bed_y: default_bed(),
        }
    }
}

/// Optional config file; every set field overrides the built-in default
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub shape: Option<String>,
    #[serde(default)]
    pub projection: Option<String>,
    #[serde(default)]
    pub buffer: Option<f64>,
    #[serde(default)]
    pub target_height: Option<f64>,
    #[serde(default)]
    pub vertical: Option<f64>,
    #[serde(default)]
    pub base: Option<f64>,
    #[serde(default)]
    pub base_diameter: Option<f64>,
    #[serde(default)]
    pub min_path_height: Option<f64>,
    #[serde(default)]
    pub zcut: Option<bool>,
    #[serde(default)]
    pub bed_x: Option<f64>,
    #[serde(default)]
    pub bed_y: Option<f64>,
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    /// Overlay the set fields onto a set of export options
    pub fn apply(&self, options: &mut ExportOptions) {
        if let Some(ref v) = self.shape {
            options.shape = v.clone();
        }
        if let Some(ref v) = self.projection {
            options.projection = v.clone();
        }
        if let Some(v) = self.buffer {
            options.buffer = v;
        }
        if let Some(v) = self.target_height {
            options.target_height = v;
        }
        if let Some(v) = self.vertical {
            options.vertical = v;
        }
        if let Some(v) = self.base {
            options.base = v;
        }
        if let Some(v) = self.base_diameter {
            options.base_diameter = v;
        }
        if let Some(v) = self.min_path_height {
            options.min_path_height = v;
        }
        if let Some(v) = self.zcut {
            options.zcut = v;
        }
        if let Some(v) = self.bed_x {
            options.bed_x = v;
        }
        if let Some(v) = self.bed_y {
            options.bed_y = v;
        }
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("route2coin.toml"));
    paths.push(PathBuf::from(".route2coin.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("route2coin").join("config.toml"));
        paths.push(config_dir.join("route2coin.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".route2coin.toml"));
        paths.push(home.join(".config").join("route2coin").join("config.toml"));
    }

    paths
}
