//! Wall (ribbon) construction
//!
//! Extrudes the simplified route polyline into a thin vertical ribbon: at
//! every point the path is offset perpendicular to its direction by half the
//! ribbon width, and the resulting cross-sections are stitched into bottom,
//! top, left, and right faces plus two end caps. Without a base the shell is
//! watertight on its own.

use crate::error::{Error, Result};
use crate::geometry::ExaggeratedPoint;

use super::buffer::Mesh;

/// Build the ribbon wall along a simplified route
///
/// Emits 4 vertices per point (bottom/top on both sides of the path) and
/// 8 triangles per segment plus 2 per end cap, as an indexed mesh with
/// smooth vertex normals.
///
/// # Errors
/// - `TooFewPoints` for fewer than 2 points
/// - `ZeroLengthSegment` when consecutive points coincide; the simplifier
///   is expected to have removed these, so this is a precondition violation
///   rather than a case to paper over
pub fn build_wall(points: &[ExaggeratedPoint], buffer: f64) -> Result<Mesh> {
    let n = points.len();
    if n < 2 {
        return Err(Error::TooFewPoints(n));
    }

    let half = buffer / 2.0;

    let mut positions: Vec<f32> = Vec::with_capacity(n * 4 * 3);
    for i in 0..n {
        let (px, py) = perpendicular_at(points, i)?;
        let p = &points[i];

        let left = (p.x + px * half, p.y + py * half);
        let right = (p.x - px * half, p.y - py * half);

        // Vertex order per cross-section: bottom-left, bottom-right,
        // top-left, top-right
        positions.extend_from_slice(&[left.0 as f32, left.1 as f32, 0.0]);
        positions.extend_from_slice(&[right.0 as f32, right.1 as f32, 0.0]);
        positions.extend_from_slice(&[left.0 as f32, left.1 as f32, p.z as f32]);
        positions.extend_from_slice(&[right.0 as f32, right.1 as f32, p.z as f32]);
    }

    let mut indices: Vec<u32> = Vec::with_capacity((8 * (n - 1) + 4) * 3);
    for i in 0..n - 1 {
        let b = (4 * i) as u32;
        let c = b + 4;

        // Bottom face, normal -z
        indices.extend_from_slice(&[b, c, c + 1]);
        indices.extend_from_slice(&[b, c + 1, b + 1]);

        // Top face, normal +z (tilts with the path slope)
        indices.extend_from_slice(&[b + 2, b + 3, c + 3]);
        indices.extend_from_slice(&[b + 2, c + 3, c + 2]);

        // Left face, normal +perp
        indices.extend_from_slice(&[b, b + 2, c + 2]);
        indices.extend_from_slice(&[b, c + 2, c]);

        // Right face, normal -perp
        indices.extend_from_slice(&[b + 1, c + 3, b + 3]);
        indices.extend_from_slice(&[b + 1, c + 1, c + 3]);
    }

    // Start cap faces backwards along the path
    indices.extend_from_slice(&[0, 3, 2]);
    indices.extend_from_slice(&[0, 1, 3]);

    // End cap faces forwards
    let b = (4 * (n - 1)) as u32;
    indices.extend_from_slice(&[b, b + 2, b + 3]);
    indices.extend_from_slice(&[b, b + 3, b + 1]);

    Ok(Mesh::indexed(positions, indices))
}

/// Unit perpendicular of the ribbon at point `i`
///
/// Endpoints take the perpendicular of their single adjacent segment.
/// Interior points average the incoming and outgoing perpendiculars and
/// re-normalize: an approximate miter join, not a true corner join. Near
/// 180-degree reversals the average degenerates and the ribbon pinches;
/// replacing this function is the single place to swap in a real miter or
/// bevel algorithm without touching the mesh assembly above.
fn perpendicular_at(points: &[ExaggeratedPoint], i: usize) -> Result<(f64, f64)> {
    let n = points.len();

    if i == 0 {
        return segment_perpendicular(points, 0);
    }
    if i == n - 1 {
        return segment_perpendicular(points, n - 2);
    }

    let (ix, iy) = segment_perpendicular(points, i - 1)?;
    let (ox, oy) = segment_perpendicular(points, i)?;

    let (ax, ay) = ((ix + ox) / 2.0, (iy + oy) / 2.0);
    let len = (ax * ax + ay * ay).sqrt();

    Ok((ax / len, ay / len))
}

/// Unit perpendicular of the segment from point `i` to point `i + 1`,
/// rotated 90 degrees counter-clockwise from the direction of travel
fn segment_perpendicular(points: &[ExaggeratedPoint], i: usize) -> Result<(f64, f64)> {
    let dx = points[i + 1].x - points[i].x;
    let dy = points[i + 1].y - points[i].y;

    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 {
        return Err(Error::ZeroLengthSegment(i, i + 1));
    }

    Ok((-dy / len, dx / len))
}
