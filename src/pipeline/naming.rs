//! Output filename derivation
//!
//! Glue between the route metadata and the filesystem: the geometry
//! pipeline itself never touches names. Kept here so the CLI and any other
//! front end derive identical names.

use crate::config::ExportOptions;
use crate::domain::Route;

/// Default vertical multiplier; only a deviation shows up in the filename
const DEFAULT_VERTICAL: f64 = 10.0;

/// Derive a descriptive output filename (without the `.stl` extension)
///
/// Starts from the route's source filename (minus a `.gpx` suffix) or its
/// id, appends the upstream transformation tags and any non-default export
/// choices, and sanitizes the result to `[a-zA-Z0-9_-]`.
pub fn output_filename(route: &Route, options: &ExportOptions) -> String {
    let stem = route
        .name
        .as_deref()
        .map(|n| n.strip_suffix(".gpx").unwrap_or(n))
        .or(route.id.as_deref())
        .unwrap_or("route");

    let mut name = stem.to_string();

    for tag in [&route.aggregation, &route.elevation_mode, &route.path_pattern] {
        if let Some(tag) = tag {
            name.push('_');
            name.push_str(tag);
        }
    }

    if options.vertical != DEFAULT_VERTICAL {
        name.push_str(&format!("_{}x", options.vertical));
    }

    if options.base == 0.0 {
        name.push_str("_no-base");
    }

    sanitize(&name)
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_gpx_suffix() {
        let route = Route {
            name: Some("morning_climb.gpx".to_string()),
            ..Default::default()
        };
        let name = output_filename(&route, &ExportOptions::default());
        assert_eq!(name, "morning_climb");
    }

    #[test]
    fn test_id_fallback() {
        let route = Route {
            id: Some("a1b2c3".to_string()),
            ..Default::default()
        };
        assert_eq!(
            output_filename(&route, &ExportOptions::default()),
            "a1b2c3"
        );

        let route = Route::default();
        assert_eq!(output_filename(&route, &ExportOptions::default()), "route");
    }

    #[test]
    fn test_metadata_tags_appended() {
        let route = Route {
            name: Some("tour.gpx".to_string()),
            aggregation: Some("weekly".to_string()),
            elevation_mode: Some("smoothed".to_string()),
            path_pattern: Some("loop".to_string()),
            ..Default::default()
        };
        let name = output_filename(&route, &ExportOptions::default());
        assert_eq!(name, "tour_weekly_smoothed_loop");
    }

    #[test]
    fn test_non_default_vertical_and_no_base() {
        let route = Route {
            name: Some("ride.gpx".to_string()),
            ..Default::default()
        };
        let options = ExportOptions {
            vertical: 2.5,
            base: 0.0,
            ..Default::default()
        };
        // The decimal point falls to the sanitizer
        assert_eq!(output_filename(&route, &options), "ride_2_5x_no-base");
    }

    #[test]
    fn test_sanitizes_awkward_names() {
        let route = Route {
            name: Some("col du galibier (2642m).gpx".to_string()),
            ..Default::default()
        };
        let name = output_filename(&route, &ExportOptions::default());
        assert_eq!(name, "col_du_galibier__2642m_");
    }
}
