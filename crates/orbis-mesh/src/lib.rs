//! Leaf-patch meshing: vertex/index buffers, grid generation, and smooth
//! normal accumulation.

mod buffer;
mod grid;
mod normals;
mod vertex;

pub use buffer::MeshBuffer;
pub use grid::mesh_grid;
pub use normals::accumulate_normals;
pub use vertex::SurfaceVertex;
