//! Smooth per-vertex normals by triangle-normal accumulation.

use crate::MeshBuffer;

/// Accumulate per-triangle face normals into the incident vertex normals,
/// then renormalize every vertex normal in place.
///
/// Each triangle contributes its unit face normal to all three of its
/// vertices, so shading is weighted by incident-triangle count rather than
/// true triangle area. A zero-area triangle contributes a zero normal, and
/// a vertex whose accumulated normal is exactly zero stays zero; neither is
/// an error.
pub fn accumulate_normals(buffer: &mut MeshBuffer) {
    debug_assert_eq!(buffer.normals.len(), buffer.positions.len());
    debug_assert!(buffer.indices_in_range());

    for triangle in buffer.indices.chunks_exact(3) {
        let i1 = triangle[0] as usize;
        let i2 = triangle[1] as usize;
        let i3 = triangle[2] as usize;

        let edge1 = buffer.positions[i2] - buffer.positions[i1];
        let edge2 = buffer.positions[i3] - buffer.positions[i1];
        let face_normal = edge1.cross(edge2).normalize_or_zero();

        buffer.normals[i1] += face_normal;
        buffer.normals[i2] += face_normal;
        buffer.normals[i3] += face_normal;
    }

    for normal in &mut buffer.normals {
        *normal = normal.normalize_or_zero();
    }
}
