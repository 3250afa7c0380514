//! Engine-agnostic mesh buffers
//!
//! A mesh is a flat f32 position buffer (xyz triples), an optional index
//! buffer, and a normal buffer of the same length as the positions. Keeping
//! the representation to plain numeric buffers means any preview renderer or
//! encoder consumes it with one conversion at its own boundary.

/// A triangle view for validation and STL output
#[derive(Debug, Clone)]
pub struct Triangle {
    /// Three vertices: [[x, y, z], [x, y, z], [x, y, z]]
    pub vertices: [[f32; 3]; 3],
    /// Normal vector [nx, ny, nz]
    pub normal: [f32; 3],
}

/// Calculate the normal vector for a triangle using the cross product
pub(crate) fn face_normal(v0: [f32; 3], v1: [f32; 3], v2: [f32; 3]) -> [f32; 3] {
    let u = [v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]];
    let v = [v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]];

    let nx = u[1] * v[2] - u[2] * v[1];
    let ny = u[2] * v[0] - u[0] * v[2];
    let nz = u[0] * v[1] - u[1] * v[0];

    let len = (nx * nx + ny * ny + nz * nz).sqrt();
    if len > 1e-10 {
        [nx / len, ny / len, nz / len]
    } else {
        [0.0, 0.0, 1.0] // Default to up for degenerate triangles
    }
}

/// Triangle mesh as plain numeric buffers
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions, xyz triples
    pub positions: Vec<f32>,
    /// Triangle indices into `positions`; `None` means triangle soup where
    /// every 3 consecutive vertices form a face
    pub indices: Option<Vec<u32>>,
    /// Per-vertex normals, same length as `positions`
    pub normals: Vec<f32>,
}

impl Mesh {
    /// Build an indexed mesh and compute smooth per-vertex normals
    pub fn indexed(positions: Vec<f32>, indices: Vec<u32>) -> Self {
        let mut mesh = Self {
            positions,
            indices: Some(indices),
            normals: Vec::new(),
        };
        mesh.compute_vertex_normals();
        mesh
    }

    /// Build a triangle soup and compute flat per-face normals
    pub fn soup(positions: Vec<f32>) -> Self {
        let mut mesh = Self {
            positions,
            indices: None,
            normals: Vec::new(),
        };
        mesh.compute_face_normals();
        mesh
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        match &self.indices {
            Some(indices) => indices.len() / 3,
            None => self.vertex_count() / 3,
        }
    }

    fn vertex(&self, i: usize) -> [f32; 3] {
        [
            self.positions[3 * i],
            self.positions[3 * i + 1],
            self.positions[3 * i + 2],
        ]
    }

    /// Vertex indices of triangle `t`, resolved through the index buffer
    fn triangle_vertices(&self, t: usize) -> [usize; 3] {
        match &self.indices {
            Some(indices) => [
                indices[3 * t] as usize,
                indices[3 * t + 1] as usize,
                indices[3 * t + 2] as usize,
            ],
            None => [3 * t, 3 * t + 1, 3 * t + 2],
        }
    }

    /// Smooth normals: average the (area-weighted) face normals of every
    /// face a vertex participates in, then normalize
    pub fn compute_vertex_normals(&mut self) {
        let mut accum = vec![0.0f32; self.positions.len()];

        for t in 0..self.triangle_count() {
            let [i0, i1, i2] = self.triangle_vertices(t);
            let (v0, v1, v2) = (self.vertex(i0), self.vertex(i1), self.vertex(i2));

            // Unnormalized cross product weights large faces more
            let u = [v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]];
            let v = [v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]];
            let n = [
                u[1] * v[2] - u[2] * v[1],
                u[2] * v[0] - u[0] * v[2],
                u[0] * v[1] - u[1] * v[0],
            ];

            for &i in &[i0, i1, i2] {
                accum[3 * i] += n[0];
                accum[3 * i + 1] += n[1];
                accum[3 * i + 2] += n[2];
            }
        }

        for chunk in accum.chunks_mut(3) {
            let len = (chunk[0] * chunk[0] + chunk[1] * chunk[1] + chunk[2] * chunk[2]).sqrt();
            if len > 1e-10 {
                chunk[0] /= len;
                chunk[1] /= len;
                chunk[2] /= len;
            } else {
                chunk[0] = 0.0;
                chunk[1] = 0.0;
                chunk[2] = 1.0;
            }
        }

        self.normals = accum;
    }

    /// Flat normals: every vertex of a face carries the face normal. Only
    /// meaningful for soup meshes, where faces share no vertices.
    pub fn compute_face_normals(&mut self) {
        let mut normals = vec![0.0f32; self.positions.len()];

        for t in 0..self.triangle_count() {
            let [i0, i1, i2] = self.triangle_vertices(t);
            let n = face_normal(self.vertex(i0), self.vertex(i1), self.vertex(i2));

            for &i in &[i0, i1, i2] {
                normals[3 * i] = n[0];
                normals[3 * i + 1] = n[1];
                normals[3 * i + 2] = n[2];
            }
        }

        self.normals = normals;
    }

    /// Expand the index buffer away, giving every triangle 3 unique vertices
    pub fn expand_to_soup(&self) -> Vec<f32> {
        match &self.indices {
            Some(indices) => {
                let mut positions = Vec::with_capacity(indices.len() * 3);
                for &i in indices {
                    positions.extend_from_slice(&self.vertex(i as usize));
                }
                positions
            }
            None => self.positions.clone(),
        }
    }

    pub fn translate(&mut self, dx: f32, dy: f32, dz: f32) {
        for chunk in self.positions.chunks_mut(3) {
            chunk[0] += dx;
            chunk[1] += dy;
            chunk[2] += dz;
        }
    }

    /// Min and max corner over each axis; infinity sentinels for an empty
    /// mesh.
    pub fn extent(&self) -> ([f32; 3], [f32; 3]) {
        let mut min = [f32::INFINITY; 3];
        let mut max = [f32::NEG_INFINITY; 3];

        for chunk in self.positions.chunks(3) {
            for axis in 0..3 {
                min[axis] = min[axis].min(chunk[axis]);
                max[axis] = max[axis].max(chunk[axis]);
            }
        }

        (min, max)
    }

    /// Iterate triangles for encoding: vertices plus one shared normal.
    /// Soup meshes report their stored normal, indexed meshes derive the
    /// face normal from the winding.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        (0..self.triangle_count()).map(|t| {
            let [i0, i1, i2] = self.triangle_vertices(t);
            let vertices = [self.vertex(i0), self.vertex(i1), self.vertex(i2)];
            let normal = if self.indices.is_none() && self.normals.len() == self.positions.len() {
                [
                    self.normals[3 * i0],
                    self.normals[3 * i0 + 1],
                    self.normals[3 * i0 + 2],
                ]
            } else {
                face_normal(vertices[0], vertices[1], vertices[2])
            };
            Triangle { vertices, normal }
        })
    }
}
