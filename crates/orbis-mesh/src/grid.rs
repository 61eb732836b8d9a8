//! Regular grid meshing of a single leaf patch.

use glam::DVec2;
use orbis_cubesphere::{PatchFrame, Projection};

use crate::{MeshBuffer, accumulate_normals};

/// Generate the grid mesh for one leaf patch.
///
/// Emits an `(n+1) x (n+1)` vertex grid in the patch's local frame, `u`
/// outer and `v` inner, with
/// `position(u, v) = center + (local_x/n) * (v - n/2) + (local_y/n) * (u - n/2)`
/// projected per `projection` and `uv = (v/n, u/n)`. Each grid cell emits
/// two triangles with consistent winding using a row stride of `n + 1`,
/// appended in the same row-major scan order as the vertices. Normals are
/// accumulated and finalized before the buffer is returned.
///
/// Caller guarantees `resolution > 0`.
#[must_use]
pub fn mesh_grid(frame: &PatchFrame, projection: Projection, resolution: u32) -> MeshBuffer {
    debug_assert!(resolution > 0, "grid resolution must be positive");

    let n = resolution;
    let stride = n + 1;
    let nf = f64::from(n);
    let step_x = frame.local_x / nf;
    let step_y = frame.local_y / nf;

    let mut buffer = MeshBuffer::for_grid(n);
    let mut vertex_index = 0u32;

    for u in 0..=n {
        for v in 0..=n {
            let position = frame.center
                + step_x * (f64::from(v) - nf / 2.0)
                + step_y * (f64::from(u) - nf / 2.0);
            buffer.push_vertex(
                projection.apply(position),
                DVec2::new(f64::from(v) / nf, f64::from(u) / nf),
            );

            if u < n && v < n {
                buffer.push_triangle(vertex_index, vertex_index + stride, vertex_index + 1);
                buffer.push_triangle(
                    vertex_index + stride,
                    vertex_index + stride + 1,
                    vertex_index + 1,
                );
            }

            vertex_index += 1;
        }
    }

    accumulate_normals(&mut buffer);
    buffer
}
