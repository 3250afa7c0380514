//! Mesh validation
//!
//! Checks an export-ready mesh for 3D-printing problems:
//! - Position/normal buffer length mismatch
//! - NaN/Inf coordinates
//! - Degenerate triangles (zero area)
//!
//! Validation never mutates the mesh. A buffer mismatch or degenerate face
//! is reported as a warning and the export may still proceed; the caller
//! owns the decision to surface or ignore it.

use super::buffer::{Mesh, Triangle};

/// Minimum area threshold for non-degenerate triangles (in square mm)
const MIN_TRIANGLE_AREA: f32 = 1e-10;

/// Result of mesh validation
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Total number of triangles validated
    pub total: usize,
    /// Vertex count of the position buffer
    pub position_count: usize,
    /// Vertex count of the normal buffer
    pub normal_count: usize,
    /// Number of degenerate triangles (zero or near-zero area)
    pub degenerate: usize,
    /// Number of triangles with invalid coordinates (NaN/Inf)
    pub invalid_coords: usize,
    /// Warning messages for issues found
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Check if the mesh passed validation without critical issues
    #[allow(dead_code)]
    pub fn is_valid(&self) -> bool {
        self.invalid_coords == 0 && self.position_count == self.normal_count
    }

    pub fn has_issues(&self) -> bool {
        !self.is_valid() || self.degenerate > 0
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        if !self.has_issues() {
            format!("Mesh valid: {} triangles, no issues", self.total)
        } else {
            format!(
                "Mesh issues: {} total, {} degenerate, {} invalid coords, {}/{} positions/normals",
                self.total, self.degenerate, self.invalid_coords, self.position_count,
                self.normal_count
            )
        }
    }
}

/// Validate a mesh and return a detailed report
pub fn validate_mesh(mesh: &Mesh) -> ValidationReport {
    let mut report = ValidationReport {
        total: mesh.triangle_count(),
        position_count: mesh.positions.len() / 3,
        normal_count: mesh.normals.len() / 3,
        ..Default::default()
    };

    if report.position_count != report.normal_count {
        report.warnings.push(format!(
            "position/normal vertex count mismatch: {} vs {}",
            report.position_count, report.normal_count
        ));
    }

    for (i, tri) in mesh.triangles().enumerate() {
        if has_invalid_coords(&tri) {
            report.invalid_coords += 1;
            report
                .warnings
                .push(format!("Triangle {} has NaN/Inf coordinates", i));
            continue;
        }

        if is_degenerate(&tri) {
            report.degenerate += 1;
        }
    }

    if report.degenerate > 0 {
        report.warnings.push(format!(
            "{} degenerate triangles detected",
            report.degenerate
        ));
    }

    report
}

/// Check if a triangle has any invalid (NaN/Inf) coordinates
fn has_invalid_coords(tri: &Triangle) -> bool {
    for vertex in &tri.vertices {
        for coord in vertex {
            if !coord.is_finite() {
                return true;
            }
        }
    }
    for coord in &tri.normal {
        if !coord.is_finite() {
            return true;
        }
    }
    false
}

/// Check if a triangle is degenerate (zero or near-zero area)
fn is_degenerate(tri: &Triangle) -> bool {
    triangle_area(&tri.vertices) < MIN_TRIANGLE_AREA
}

/// Calculate the area of a triangle from its vertices
fn triangle_area(vertices: &[[f32; 3]; 3]) -> f32 {
    let v0 = vertices[0];
    let v1 = vertices[1];
    let v2 = vertices[2];

    let edge_a = [v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]];
    let edge_b = [v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]];

    let cx = edge_a[1] * edge_b[2] - edge_a[2] * edge_b[1];
    let cy = edge_a[2] * edge_b[0] - edge_a[0] * edge_b[2];
    let cz = edge_a[0] * edge_b[1] - edge_a[1] * edge_b[0];

    0.5 * (cx * cx + cy * cy + cz * cz).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_mesh() {
        let mesh = Mesh::soup(vec![
            0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0, 0.0,
        ]);

        let report = validate_mesh(&mesh);

        assert_eq!(report.total, 2);
        assert!(report.is_valid());
        assert!(!report.has_issues());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_degenerate_collinear() {
        let mesh = Mesh::soup(vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 2.0, 0.0, 0.0]);

        let report = validate_mesh(&mesh);

        assert_eq!(report.degenerate, 1);
        assert!(report.is_valid()); // degenerate is a warning, not fatal
        assert!(report.has_issues());
    }

    #[test]
    fn test_nan_coordinates() {
        let mut mesh = Mesh::soup(vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        mesh.positions[0] = f32::NAN;

        let report = validate_mesh(&mesh);

        assert_eq!(report.invalid_coords, 1);
        assert!(!report.is_valid());
    }

    #[test]
    fn test_count_mismatch_is_warning() {
        let mut mesh = Mesh::soup(vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        mesh.normals.truncate(6);

        let report = validate_mesh(&mesh);

        assert_eq!(report.position_count, 3);
        assert_eq!(report.normal_count, 2);
        assert!(!report.is_valid());
        assert!(
            report
                .warnings
                .iter()
                .any(|w| w.contains("count mismatch"))
        );
    }

    #[test]
    fn test_triangle_area() {
        let area = triangle_area(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
        assert!((area - 0.5).abs() < 0.001);
    }
}
