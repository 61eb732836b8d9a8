//! Growable vertex/normal/uv/index container for one leaf patch mesh.

use glam::{DVec2, DVec3};

/// The mesh output of a single leaf patch.
///
/// `positions`, `normals`, and `uvs` are parallel sequences of equal length;
/// `indices` holds triangles as index triples into them. A buffer is owned
/// exclusively by the leaf patch that generated it and is never mutated
/// after generation completes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffer {
    /// Vertex positions, cube or sphere space depending on projection.
    pub positions: Vec<DVec3>,
    /// Per-vertex normals; unit length after finalization except for
    /// exact-zero accumulations, which stay zero.
    pub normals: Vec<DVec3>,
    /// Per-vertex texture coordinates.
    pub uvs: Vec<DVec2>,
    /// Triangle indices, three per triangle, each a valid vertex index.
    pub indices: Vec<u32>,
}

impl MeshBuffer {
    /// Create an empty buffer pre-sized for an `(n+1) x (n+1)` vertex grid
    /// with `2 n^2` triangles.
    #[must_use]
    pub fn for_grid(resolution: u32) -> Self {
        let vertex_count = ((resolution + 1) * (resolution + 1)) as usize;
        let index_count = (resolution * resolution * 6) as usize;
        Self {
            positions: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(index_count),
        }
    }

    /// Append one vertex. The normal starts at zero; normal accumulation
    /// fills it in once all triangles are present.
    pub fn push_vertex(&mut self, position: DVec3, uv: DVec2) {
        self.positions.push(position);
        self.normals.push(DVec3::ZERO);
        self.uvs.push(uv);
    }

    /// Append one triangle as three vertex indices.
    pub fn push_triangle(&mut self, i1: u32, i2: u32, i3: u32) {
        self.indices.extend_from_slice(&[i1, i2, i3]);
    }

    /// Number of vertices in the buffer.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of complete triangles in the buffer.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// True if the buffer holds no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// True if every index refers to an existing vertex.
    #[must_use]
    pub fn indices_in_range(&self) -> bool {
        let len = self.positions.len() as u32;
        self.indices.iter().all(|&i| i < len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_grid_capacities() {
        let buffer = MeshBuffer::for_grid(4);
        assert!(buffer.is_empty());
        assert!(buffer.positions.capacity() >= 25);
        assert!(buffer.indices.capacity() >= 96);
    }

    #[test]
    fn test_push_vertex_keeps_sequences_parallel() {
        let mut buffer = MeshBuffer::default();
        buffer.push_vertex(DVec3::X, DVec2::new(0.5, 0.5));
        buffer.push_vertex(DVec3::Y, DVec2::new(1.0, 0.0));
        assert_eq!(buffer.positions.len(), 2);
        assert_eq!(buffer.normals.len(), 2);
        assert_eq!(buffer.uvs.len(), 2);
        assert_eq!(buffer.normals[0], DVec3::ZERO);
    }

    #[test]
    fn test_push_triangle_appends_three_indices() {
        let mut buffer = MeshBuffer::default();
        for _ in 0..3 {
            buffer.push_vertex(DVec3::ZERO, DVec2::ZERO);
        }
        buffer.push_triangle(0, 1, 2);
        assert_eq!(buffer.indices, vec![0, 1, 2]);
        assert_eq!(buffer.triangle_count(), 1);
        assert!(buffer.indices_in_range());
    }

    #[test]
    fn test_out_of_range_index_detected() {
        let mut buffer = MeshBuffer::default();
        buffer.push_vertex(DVec3::ZERO, DVec2::ZERO);
        buffer.push_triangle(0, 0, 7);
        assert!(!buffer.indices_in_range());
    }
}
