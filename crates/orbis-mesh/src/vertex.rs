//! Interleaved GPU-ready vertex format for surface meshes.
//!
//! Geometry is generated in f64; rendering hosts consume f32. This module
//! provides the flattened, interleaved record a host uploads directly.

use bytemuck::{Pod, Zeroable};
use static_assertions::const_assert_eq;

use crate::MeshBuffer;

/// One interleaved surface vertex: position, normal, uv.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct SurfaceVertex {
    /// Position, cube or sphere space.
    pub position: [f32; 3],
    /// Unit normal (zero for degenerate accumulations).
    pub normal: [f32; 3],
    /// Texture coordinates.
    pub uv: [f32; 2],
}

// 8 f32 fields, tightly packed. Render pipelines consuming this format
// assume the 32-byte stride.
const_assert_eq!(core::mem::size_of::<SurfaceVertex>(), 32);
const_assert_eq!(core::mem::align_of::<SurfaceVertex>(), 4);

impl MeshBuffer {
    /// Flatten the f64 buffer into interleaved f32 vertices for upload.
    ///
    /// Output order matches vertex emission order, so `indices` can be used
    /// unchanged against the returned slice.
    #[must_use]
    pub fn to_vertices(&self) -> Vec<SurfaceVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .map(|((position, normal), uv)| SurfaceVertex {
                position: position.as_vec3().to_array(),
                normal: normal.as_vec3().to_array(),
                uv: uv.as_vec2().to_array(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{DVec2, DVec3};

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(core::mem::size_of::<SurfaceVertex>(), 32);
        assert_eq!(core::mem::offset_of!(SurfaceVertex, position), 0);
        assert_eq!(core::mem::offset_of!(SurfaceVertex, normal), 12);
        assert_eq!(core::mem::offset_of!(SurfaceVertex, uv), 24);
    }

    #[test]
    fn test_to_vertices_preserves_order_and_values() {
        let mut buffer = MeshBuffer::default();
        buffer.push_vertex(DVec3::new(1.0, 2.0, 3.0), DVec2::new(0.25, 0.75));
        buffer.push_vertex(DVec3::new(-1.0, 0.0, 0.5), DVec2::new(1.0, 0.0));
        buffer.normals[0] = DVec3::Y;
        buffer.normals[1] = DVec3::Z;

        let vertices = buffer.to_vertices();
        assert_eq!(vertices.len(), 2);
        assert_eq!(vertices[0].position, [1.0, 2.0, 3.0]);
        assert_eq!(vertices[0].normal, [0.0, 1.0, 0.0]);
        assert_eq!(vertices[0].uv, [0.25, 0.75]);
        assert_eq!(vertices[1].normal, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_vertices_cast_to_bytes() {
        let vertex = SurfaceVertex {
            position: [1.0, 0.0, 0.0],
            normal: [0.0, 1.0, 0.0],
            uv: [0.5, 0.5],
        };
        let bytes: &[u8] = bytemuck::bytes_of(&vertex);
        assert_eq!(bytes.len(), 32);
    }
}
