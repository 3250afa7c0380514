use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::buffer::Mesh;

/// Write a mesh to a binary STL file
///
/// Binary STL format:
/// - 80 byte header
/// - 4 byte u32 triangle count (little endian)
/// - For each triangle:
///   - 3 x f32 normal (12 bytes)
///   - 3 x 3 x f32 vertices (36 bytes)
///   - 2 byte attribute (usually 0)
///
/// The mesh is expected in merged soup layout (3 consecutive vertices per
/// triangle sharing one normal), so encoding is a plain transcription.
pub fn write_stl(path: &Path, mesh: &Mesh) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create STL file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    let header: [u8; 80] =
        *b"route2coin - Climbing Coin STL Generator                                        ";
    writer.write_all(&header)?;

    // Triangle count (u32, little endian)
    let count = mesh.triangle_count() as u32;
    writer.write_all(&count.to_le_bytes())?;

    // Write each triangle
    for tri in mesh.triangles() {
        // Normal (3 x f32)
        for &n in &tri.normal {
            writer.write_all(&n.to_le_bytes())?;
        }

        // Vertices (3 vertices x 3 coords x f32)
        for vertex in &tri.vertices {
            for &coord in vertex {
                writer.write_all(&coord.to_le_bytes())?;
            }
        }

        // Attribute byte count (2 bytes, usually 0)
        writer.write_all(&[0u8, 0u8])?;
    }

    writer.flush()?;

    Ok(())
}

/// Get the file size of an STL with the given number of triangles
pub fn estimate_stl_size(triangle_count: usize) -> usize {
    // 80 (header) + 4 (count) + triangles * (12 normal + 36 vertices + 2 attribute)
    80 + 4 + triangle_count * 50
}
