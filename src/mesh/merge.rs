//! Mesh merging
//!
//! The wall and base are merged as non-indexed triangle soup: every triangle
//! owns its 3 vertices and normals are recomputed per face. Shared edges end
//! up faceted instead of smooth, which is acceptable for an STL-bound solid
//! and keeps the merge free of vertex-welding bookkeeping.

use super::buffer::Mesh;

/// Concatenate wall and base into one triangle-soup mesh, wall first, and
/// recompute all normals from scratch
pub fn merge_meshes(wall: &Mesh, base: Option<&Mesh>) -> Mesh {
    let mut positions = wall.expand_to_soup();

    if let Some(base) = base {
        positions.extend(base.expand_to_soup());
    }

    Mesh::soup(positions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> Mesh {
        let positions = vec![
            0.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, //
            1.0, 1.0, 0.0, //
            0.0, 1.0, 0.0,
        ];
        Mesh::indexed(positions, vec![0, 1, 2, 0, 2, 3])
    }

    #[test]
    fn test_merge_expands_indices() {
        let wall = quad();
        let base = quad();

        let merged = merge_meshes(&wall, Some(&base));

        assert!(merged.indices.is_none());
        assert_eq!(merged.triangle_count(), 4);
        // Soup: 3 unique vertices per triangle
        assert_eq!(merged.vertex_count(), 12);
        assert_eq!(merged.normals.len(), merged.positions.len());
    }

    #[test]
    fn test_merge_without_base() {
        let wall = quad();
        let merged = merge_meshes(&wall, None);

        assert_eq!(merged.triangle_count(), 2);
        assert_eq!(merged.vertex_count(), 6);
    }

    #[test]
    fn test_wall_comes_first() {
        let wall = quad();
        let mut base = quad();
        base.translate(100.0, 0.0, 0.0);

        let merged = merge_meshes(&wall, Some(&base));

        // First wall triangle vertex is still at the origin, the base
        // block follows after the wall's 6 vertices
        assert_eq!(merged.positions[0], 0.0);
        assert_eq!(merged.positions[6 * 3], 100.0);
    }
}
