//! Cylindrical base plate
//!
//! The coin's base is a cylinder sitting entirely below the wall: its top
//! face lies exactly at z=0, flush with the ribbon's bottom, so merging the
//! two leaves no gap to repair.

use crate::config::{ExportOptions, fit};

use super::buffer::Mesh;

/// Build the base plate centered under the wall
///
/// `center_x`/`center_y` come from the wall mesh's bounding box (its center
/// after exaggeration, not the route's geographic centroid). Height is
/// `options.base`; diameter falls back to a stock size when unset. The
/// radial resolution is fixed at [`fit::BASE_SEGMENTS`].
pub fn build_base_plate(center_x: f32, center_y: f32, options: &ExportOptions) -> Mesh {
    let diameter = if options.base_diameter > 0.0 {
        options.base_diameter
    } else {
        fit::FALLBACK_BASE_DIAMETER_MM
    };
    let radius = (diameter / 2.0) as f32;
    let height = options.base as f32;

    let segments = fit::BASE_SEGMENTS;
    let z_top = 0.0f32;
    let z_bottom = -height;

    // Layout: top center, bottom center, top ring, bottom ring
    let mut positions: Vec<f32> = Vec::with_capacity((2 + 2 * segments) * 3);
    positions.extend_from_slice(&[center_x, center_y, z_top]);
    positions.extend_from_slice(&[center_x, center_y, z_bottom]);

    let top_ring = 2u32;
    let bottom_ring = 2 + segments as u32;

    for ring_z in [z_top, z_bottom] {
        for s in 0..segments {
            let angle = 2.0 * std::f32::consts::PI * s as f32 / segments as f32;
            positions.extend_from_slice(&[
                center_x + radius * angle.cos(),
                center_y + radius * angle.sin(),
                ring_z,
            ]);
        }
    }

    let mut indices: Vec<u32> = Vec::with_capacity(segments * 4 * 3);
    for s in 0..segments as u32 {
        let next = (s + 1) % segments as u32;

        // Top cap fan, normal +z
        indices.extend_from_slice(&[0, top_ring + s, top_ring + next]);

        // Bottom cap fan, normal -z
        indices.extend_from_slice(&[1, bottom_ring + next, bottom_ring + s]);

        // Side wall, normal radially outward
        indices.extend_from_slice(&[bottom_ring + s, bottom_ring + next, top_ring + next]);
        indices.extend_from_slice(&[bottom_ring + s, top_ring + next, top_ring + s]);
    }

    Mesh::indexed(positions, indices)
}
