//! Planet surface generation: the per-face patch quadtree and the planet
//! that owns all six of them.

mod error;
mod patch;
mod planet;

pub use error::PlanetError;
pub use patch::Patch;
pub use planet::{MaterialHandle, Planet};
